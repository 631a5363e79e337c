//! Benchmarks for frame extraction and sheet composition.
//!
//! Run with: cargo bench
//! Run with all features: cargo bench --all-features
//!
//! All benchmarks run over synthetic in-memory sheets; no fixture files are
//! needed.

use criterion::Criterion;
use retile::{
    BYTES_PER_PIXEL, FrameSelection, GridGeometry, PixelBuffer, compose_sheet, extract_frame,
    extract_frames,
};

#[cfg(feature = "rayon")]
use retile::SpriteSheet;

/// A 512x512 sheet holding an 8x8 grid of 64x64 frames.
fn sample_sheet() -> PixelBuffer {
    let mut data = Vec::with_capacity(512 * 512 * BYTES_PER_PIXEL);
    for y in 0_u32..512 {
        for x in 0_u32..512 {
            data.extend_from_slice(&[x as u8, y as u8, (x ^ y) as u8, 255]);
        }
    }
    PixelBuffer::from_raw(512, 512, data).unwrap()
}

fn benchmark_single_frame_extraction(criterion: &mut Criterion) {
    let sheet = sample_sheet();
    let grid = GridGeometry::from_sheet(512, 512, 8, 8).unwrap();

    criterion.bench_function("extract single frame (top left)", |bencher| {
        bencher.iter(|| {
            let _frame = extract_frame(&sheet, &grid, 0).unwrap();
        });
    });

    criterion.bench_function("extract single frame (bottom right)", |bencher| {
        bencher.iter(|| {
            let _frame = extract_frame(&sheet, &grid, 63).unwrap();
        });
    });
}

fn benchmark_full_extraction(criterion: &mut Criterion) {
    let sheet = sample_sheet();
    let grid = GridGeometry::from_sheet(512, 512, 8, 8).unwrap();

    criterion.bench_function("extract all 64 frames", |bencher| {
        bencher.iter(|| {
            let _frames = extract_frames(&sheet, &grid, &FrameSelection::All).unwrap();
        });
    });

    criterion.bench_function("extract every other frame", |bencher| {
        bencher.iter(|| {
            let _frames = extract_frames(&sheet, &grid, &FrameSelection::Step(2)).unwrap();
        });
    });
}

fn benchmark_composition(criterion: &mut Criterion) {
    let sheet = sample_sheet();
    let grid = GridGeometry::from_sheet(512, 512, 8, 8).unwrap();
    let frames = extract_frames(&sheet, &grid, &FrameSelection::All).unwrap();

    criterion.bench_function("compose 64 frames, same width", |bencher| {
        bencher.iter(|| {
            let _sheet = compose_sheet(&frames, 8).unwrap();
        });
    });

    criterion.bench_function("compose 64 frames into one column", |bencher| {
        bencher.iter(|| {
            let _sheet = compose_sheet(&frames, 1).unwrap();
        });
    });
}

fn benchmark_round_trip(criterion: &mut Criterion) {
    let sheet = sample_sheet();

    criterion.bench_function("extract all + recompose (identity)", |bencher| {
        bencher.iter(|| {
            let grid = GridGeometry::from_sheet(512, 512, 8, 8).unwrap();
            let frames = extract_frames(&sheet, &grid, &FrameSelection::All).unwrap();
            let _recomposed = compose_sheet(&frames, 8).unwrap();
        });
    });
}

#[cfg(feature = "rayon")]
fn benchmark_parallel(criterion: &mut Criterion) {
    let sheet = SpriteSheet::from_buffer(sample_sheet(), 8, 8).unwrap();

    criterion.bench_function("extract all 64 frames (rayon)", |bencher| {
        bencher.iter(|| {
            let _frames = sheet.frames_parallel(&FrameSelection::All).unwrap();
        });
    });
}

#[cfg(not(feature = "rayon"))]
fn benchmark_parallel(_criterion: &mut Criterion) {}

criterion::criterion_group!(
    benches,
    benchmark_single_frame_extraction,
    benchmark_full_extraction,
    benchmark_composition,
    benchmark_round_trip,
    benchmark_parallel,
);
criterion::criterion_main!(benches);
