//! Frame selection.
//!
//! [`FrameSelection`] specifies which frames to take from a source grid, and
//! in what order. The order of the resolved indices is the order frames are
//! appended into a composed sheet.
//!
//! # Example
//!
//! ```
//! use retile::FrameSelection;
//!
//! // Every other frame of a 16-frame grid.
//! let indices = FrameSelection::Step(2).resolve(16)?;
//! assert_eq!(indices, vec![0, 2, 4, 6, 8, 10, 12, 14]);
//! # Ok::<(), retile::RetileError>(())
//! ```

use crate::error::RetileError;

/// Specifies which frames to select from a source grid.
///
/// Indices are 0-based and row-major (`index = row * columns + column`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum FrameSelection {
    /// Every frame, in row-major order.
    All,
    /// Every Nth frame starting at index 0.
    Step(usize),
    /// Frames from start to end (inclusive).
    Range(usize, usize),
    /// Frames at specific indices, in the given order.
    Specific(Vec<usize>),
}

impl FrameSelection {
    /// Resolve the selection to a concrete list of frame indices against a
    /// grid of `frame_count` frames.
    ///
    /// # Errors
    ///
    /// - [`RetileError::InvalidStep`] for [`Step(0)`](FrameSelection::Step).
    /// - [`RetileError::InvalidRange`] when a range's start exceeds its end.
    /// - [`RetileError::FrameOutOfRange`] when any selected index is
    ///   `>= frame_count`.
    pub fn resolve(&self, frame_count: usize) -> Result<Vec<usize>, RetileError> {
        let indices = match self {
            FrameSelection::All => (0..frame_count).collect(),
            FrameSelection::Step(step) => {
                if *step == 0 {
                    return Err(RetileError::InvalidStep);
                }
                (0..frame_count).step_by(*step).collect()
            }
            FrameSelection::Range(start, end) => {
                if start > end {
                    return Err(RetileError::InvalidRange {
                        start: *start,
                        end: *end,
                    });
                }
                if *end >= frame_count {
                    return Err(RetileError::FrameOutOfRange {
                        frame_index: *end,
                        frame_count,
                    });
                }
                (*start..=*end).collect()
            }
            FrameSelection::Specific(indices) => {
                if let Some(&out_of_range) =
                    indices.iter().find(|&&index| index >= frame_count)
                {
                    return Err(RetileError::FrameOutOfRange {
                        frame_index: out_of_range,
                        frame_count,
                    });
                }
                indices.clone()
            }
        };
        Ok(indices)
    }
}
