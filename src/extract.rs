//! Frame extraction.
//!
//! Pulls individual frames out of a sheet buffer into independent,
//! tightly-packed [`PixelBuffer`]s. The higher-level entry point is
//! [`SpriteSheet`](crate::SpriteSheet); the functions here operate on bare
//! buffers and geometries.

use crate::buffer::{PixelBuffer, copy_block};
use crate::error::RetileError;
use crate::geometry::GridGeometry;
use crate::selection::FrameSelection;

/// Extract a single frame from a sheet.
///
/// Allocates a `frame_width x frame_height` buffer and copies the frame's
/// rows out of the sheet. The result is a fully independent copy; mutating
/// it never affects the source sheet.
///
/// # Errors
///
/// - [`RetileError::SheetSizeMismatch`] when the sheet buffer's dimensions do
///   not match the grid geometry.
/// - [`RetileError::FrameOutOfRange`] when `frame_index` exceeds the grid.
///
/// # Example
///
/// ```
/// use retile::{GridGeometry, PixelBuffer, extract_frame};
///
/// let sheet = PixelBuffer::new(32, 32);
/// let grid = GridGeometry::from_sheet(32, 32, 2, 2)?;
/// let frame = extract_frame(&sheet, &grid, 3)?;
/// assert_eq!(frame.width(), 16);
/// assert_eq!(frame.height(), 16);
/// # Ok::<(), retile::RetileError>(())
/// ```
pub fn extract_frame(
    sheet: &PixelBuffer,
    grid: &GridGeometry,
    frame_index: usize,
) -> Result<PixelBuffer, RetileError> {
    check_sheet_matches(sheet, grid)?;
    grid.frame_offset(frame_index)?;
    Ok(extract_frame_unchecked(sheet, grid, frame_index))
}

/// Extraction without the sheet/index checks.
///
/// Callers have already validated the sheet against the grid and the index
/// against the frame count.
pub(crate) fn extract_frame_unchecked(
    sheet: &PixelBuffer,
    grid: &GridGeometry,
    frame_index: usize,
) -> PixelBuffer {
    let offset = grid.frame_offset_unchecked(frame_index);

    let mut frame = PixelBuffer::new(grid.frame_width, grid.frame_height);
    let frame_stride = grid.frame_row_stride();
    copy_block(
        sheet.as_bytes(),
        offset,
        grid.sheet_row_stride(),
        frame.as_bytes_mut(),
        0,
        frame_stride,
        frame_stride,
        grid.frame_height as usize,
    );

    frame
}

/// Extract the frames named by `selection`, in selection order.
///
/// # Errors
///
/// Propagates selection resolution errors ([`RetileError::InvalidStep`],
/// [`RetileError::InvalidRange`], [`RetileError::FrameOutOfRange`]) and the
/// per-frame errors of [`extract_frame`].
pub fn extract_frames(
    sheet: &PixelBuffer,
    grid: &GridGeometry,
    selection: &FrameSelection,
) -> Result<Vec<PixelBuffer>, RetileError> {
    let indices = selection.resolve(grid.frame_count())?;
    log::debug!(
        "Extracting {} of {} frames ({}x{} each)",
        indices.len(),
        grid.frame_count(),
        grid.frame_width,
        grid.frame_height,
    );

    indices
        .iter()
        .map(|&index| extract_frame(sheet, grid, index))
        .collect()
}

/// Extract frames in parallel across rayon threads.
///
/// The sheet buffer is shared read-only between workers; each frame's output
/// buffer is owned by exactly one worker. Results are returned in selection
/// order.
#[cfg(feature = "rayon")]
pub(crate) fn parallel_extract_frames(
    sheet: &PixelBuffer,
    grid: &GridGeometry,
    selection: &FrameSelection,
) -> Result<Vec<PixelBuffer>, RetileError> {
    use ::rayon::iter::{IntoParallelRefIterator, ParallelIterator};

    let indices = selection.resolve(grid.frame_count())?;
    log::debug!("Extracting {} frames across rayon threads", indices.len());

    indices
        .par_iter()
        .map(|&index| extract_frame(sheet, grid, index))
        .collect()
}

/// Verify that a sheet buffer has exactly the dimensions its grid describes.
pub(crate) fn check_sheet_matches(
    sheet: &PixelBuffer,
    grid: &GridGeometry,
) -> Result<(), RetileError> {
    if sheet.width() != grid.sheet_width() || sheet.height() != grid.sheet_height() {
        return Err(RetileError::SheetSizeMismatch {
            sheet_width: sheet.width(),
            sheet_height: sheet.height(),
            expected_width: grid.sheet_width(),
            expected_height: grid.sheet_height(),
        });
    }
    Ok(())
}
