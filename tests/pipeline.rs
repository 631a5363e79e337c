//! End-to-end repack tests through real files on disk.

use retile::{
    BYTES_PER_PIXEL, FrameSelection, PixelBuffer, RepackOptions, RetileError, compose_sheet,
    decode_sheet, encode_sheet, repack,
};

fn coordinate_sheet(width: u32, height: u32) -> PixelBuffer {
    assert!(width < 256 && height < 256);
    let mut data = Vec::with_capacity((width * height) as usize * BYTES_PER_PIXEL);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8, 255]);
        }
    }
    PixelBuffer::from_raw(width, height, data).expect("coordinate sheet")
}

// ── Round trips through disk ─────────────────────────────────────

#[test]
fn encode_then_decode_is_lossless_for_png() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("sheet.png");

    let sheet = coordinate_sheet(32, 16);
    encode_sheet(&path, &sheet).unwrap();

    let decoded = decode_sheet(&path).unwrap();
    assert_eq!(decoded, sheet);
}

#[test]
fn repack_reflows_a_sheet_on_disk() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.png");
    let output = directory.path().join("output.png");

    // 3x1 strip of 10x10 frames, reflowed to two columns.
    let sheet = coordinate_sheet(30, 10);
    encode_sheet(&input, &sheet).unwrap();

    let options = RepackOptions::new(3, 1).with_max_columns(2);
    let summary = repack(&input, &output, &options).unwrap();

    assert_eq!(summary.source_width, 30);
    assert_eq!(summary.frame_width, 10);
    assert_eq!(summary.frames_written, 3);
    assert_eq!(summary.output_width, 20);
    assert_eq!(summary.output_height, 20);

    // The file on disk matches an in-memory compose of the same frames.
    let grid = retile::GridGeometry::from_sheet(30, 10, 3, 1).unwrap();
    let frames = retile::extract_frames(&sheet, &grid, &FrameSelection::All).unwrap();
    let expected = compose_sheet(&frames, 2).unwrap();
    assert_eq!(decode_sheet(&output).unwrap(), expected);
}

#[test]
fn repack_with_step_subsamples_frames() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.png");
    let output = directory.path().join("output.png");

    // 4x4 grid; keeping every other frame halves the count.
    encode_sheet(&input, &coordinate_sheet(64, 64)).unwrap();

    let options = RepackOptions::new(4, 4).with_max_columns(4).with_step(2);
    let summary = repack(&input, &output, &options).unwrap();

    assert_eq!(summary.frames_written, 8);
    assert_eq!(summary.output_width, 64);
    assert_eq!(summary.output_height, 32, "8 frames over 4 columns need 2 rows");
}

#[test]
fn repack_identity_reproduces_the_input() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.png");
    let output = directory.path().join("output.png");

    let sheet = coordinate_sheet(40, 20);
    encode_sheet(&input, &sheet).unwrap();

    let options = RepackOptions::new(4, 2);
    repack(&input, &output, &options).unwrap();

    assert_eq!(decode_sheet(&output).unwrap(), sheet);
}

// ── Failure paths ────────────────────────────────────────────────

#[test]
fn uneven_geometry_fails_and_writes_nothing() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.png");
    let output = directory.path().join("output.png");

    encode_sheet(&input, &coordinate_sheet(30, 10)).unwrap();

    // 30 does not divide into 4 columns.
    let options = RepackOptions::new(4, 1);
    let error = repack(&input, &output, &options).unwrap_err();

    assert!(matches!(
        error,
        RetileError::UnevenGrid {
            axis: "width",
            size: 30,
            count: 4,
        }
    ));
    assert!(!output.exists(), "no output file may appear on failure");
}

#[test]
fn missing_input_reports_decode_error() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("output.png");

    let options = RepackOptions::new(2, 2);
    let error = repack(directory.path().join("absent.png"), &output, &options).unwrap_err();

    assert!(matches!(error, RetileError::Decode { .. }));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_reports_encode_error() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.png");
    // Parent directory does not exist.
    let output = directory.path().join("missing_dir").join("output.png");

    encode_sheet(&input, &coordinate_sheet(20, 20)).unwrap();

    let options = RepackOptions::new(2, 2);
    let error = repack(&input, &output, &options).unwrap_err();
    assert!(matches!(error, RetileError::Encode { .. }));
}

#[test]
fn zero_step_fails_before_touching_the_output() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("input.png");
    let output = directory.path().join("output.png");

    encode_sheet(&input, &coordinate_sheet(20, 20)).unwrap();

    let options = RepackOptions::new(2, 2).with_step(0);
    assert!(matches!(
        repack(&input, &output, &options),
        Err(RetileError::InvalidStep)
    ));
    assert!(!output.exists());
}
