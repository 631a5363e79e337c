//! Sheet composition.
//!
//! Lays an ordered sequence of frames into a fresh sheet under a new column
//! count. The output walks the grid left to right, top to bottom; when the
//! last column of a row is filled the destination cursor jumps back to
//! column 0 of the next frame row rather than advancing one frame width.

use crate::buffer::{PixelBuffer, copy_block};
use crate::error::RetileError;
use crate::geometry::GridGeometry;

/// Compose an ordered sequence of frames into a new sheet.
///
/// The output has `min(max_columns, frames.len())` columns and as many rows
/// as needed to hold every frame. Cells in the last row beyond the frame
/// count stay fully transparent black.
///
/// # Errors
///
/// - [`RetileError::EmptyComposition`] when `frames` is empty.
/// - [`RetileError::EmptyGrid`] when `max_columns` is zero.
/// - [`RetileError::FrameSizeMismatch`] when any frame's dimensions differ
///   from the first frame's.
///
/// # Example
///
/// ```
/// use retile::{PixelBuffer, compose_sheet};
///
/// let frames = vec![PixelBuffer::new(10, 10); 3];
/// let sheet = compose_sheet(&frames, 2)?;
/// assert_eq!(sheet.width(), 20);
/// assert_eq!(sheet.height(), 20);
/// # Ok::<(), retile::RetileError>(())
/// ```
pub fn compose_sheet(
    frames: &[PixelBuffer],
    max_columns: u32,
) -> Result<PixelBuffer, RetileError> {
    let first = frames.first().ok_or(RetileError::EmptyComposition)?;
    let frame_width = first.width();
    let frame_height = first.height();

    for (frame_index, frame) in frames.iter().enumerate() {
        if frame.width() != frame_width || frame.height() != frame_height {
            return Err(RetileError::FrameSizeMismatch {
                frame_index,
                expected_width: frame_width,
                expected_height: frame_height,
                actual_width: frame.width(),
                actual_height: frame.height(),
            });
        }
    }

    let grid = GridGeometry::for_output(frame_width, frame_height, frames.len(), max_columns)?;
    let mut sheet = PixelBuffer::new(grid.sheet_width(), grid.sheet_height());

    let columns = grid.columns as usize;
    let sheet_stride = grid.sheet_row_stride();
    let horizontal_step = grid.frame_row_stride();
    // Byte span of one full frame row of the output sheet.
    let row_band = sheet_stride * grid.frame_height as usize;

    let mut cursor = 0_usize;
    let mut column = 0_usize;

    for (frame_index, frame) in frames.iter().enumerate() {
        // The cursor walk and the grid addressing must agree at every cell.
        debug_assert_eq!(cursor, grid.frame_offset_unchecked(frame_index));

        copy_block(
            frame.as_bytes(),
            0,
            horizontal_step,
            sheet.as_bytes_mut(),
            cursor,
            sheet_stride,
            horizontal_step,
            frame_height as usize,
        );

        column += 1;
        if column >= columns {
            // Jump to the left-most cell of the next frame row.
            column = 0;
            cursor += row_band - horizontal_step * (columns - 1);
        } else {
            cursor += horizontal_step;
        }
    }

    log::debug!(
        "Composed {} frames into a {}x{} sheet ({} columns)",
        frames.len(),
        sheet.width(),
        sheet.height(),
        grid.columns,
    );

    Ok(sheet)
}
