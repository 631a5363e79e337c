//! Error types for the `retile` crate.
//!
//! This module defines [`RetileError`], the unified error type returned by all
//! fallible operations in the crate. Errors carry rich context to aid
//! debugging, including file paths, sheet dimensions, and frame indices.

use std::{io::Error as IoError, path::PathBuf};

use image::ImageError;
use thiserror::Error;

/// The unified error type for all `retile` operations.
///
/// Every public method that can fail returns `Result<T, RetileError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RetileError {
    /// The input image could not be opened or decoded.
    #[error("Failed to decode sheet at {path}: {reason}")]
    Decode {
        /// Path that was passed to the decoder.
        path: PathBuf,
        /// Underlying reason the decode failed.
        reason: String,
    },

    /// The output image could not be encoded or written.
    #[error("Failed to encode sheet to {path}: {reason}")]
    Encode {
        /// Path the encoder was writing to.
        path: PathBuf,
        /// Underlying reason the encode failed.
        reason: String,
    },

    /// A sheet dimension is not evenly divisible by the requested frame count.
    #[error("Sheet {axis} {size}px does not divide evenly into {count} frames")]
    UnevenGrid {
        /// Which axis failed: `"width"` or `"height"`.
        axis: &'static str,
        /// The sheet dimension in pixels.
        size: u32,
        /// The requested frame count along that axis.
        count: u32,
    },

    /// A grid was requested with zero columns or zero rows.
    #[error("Grid must have at least one column and one row")]
    EmptyGrid,

    /// A pixel buffer's length does not match its declared dimensions.
    #[error(
        "Buffer of {actual} bytes cannot hold a {width}x{height} RGBA sheet ({expected} bytes)"
    )]
    BufferSizeMismatch {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
        /// Expected byte length (`width * height * 4`).
        expected: usize,
        /// Actual byte length supplied.
        actual: usize,
    },

    /// A sheet buffer's dimensions do not match the grid geometry applied to it.
    #[error(
        "Sheet is {sheet_width}x{sheet_height} but the grid describes {expected_width}x{expected_height}"
    )]
    SheetSizeMismatch {
        /// Actual sheet width in pixels.
        sheet_width: u32,
        /// Actual sheet height in pixels.
        sheet_height: u32,
        /// Width the grid geometry implies.
        expected_width: u32,
        /// Height the grid geometry implies.
        expected_height: u32,
    },

    /// The requested frame index exceeds the grid's frame count.
    #[error("Frame {frame_index} is out of range (grid has {frame_count} frames)")]
    FrameOutOfRange {
        /// The frame index that was requested.
        frame_index: usize,
        /// The total number of frames in the grid.
        frame_count: usize,
    },

    /// A step value of zero was provided.
    #[error("Step must be greater than zero")]
    InvalidStep,

    /// A range's start index is greater than its end index.
    #[error("Invalid range: start ({start}) must be <= end ({end})")]
    InvalidRange {
        /// The start of the range.
        start: usize,
        /// The end of the range.
        end: usize,
    },

    /// Composition was attempted with no frames.
    #[error("Cannot compose a sheet from zero frames")]
    EmptyComposition,

    /// A frame's dimensions differ from the others during composition.
    #[error(
        "Frame {frame_index} is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}"
    )]
    FrameSizeMismatch {
        /// Index of the offending frame in the composition sequence.
        frame_index: usize,
        /// Width shared by the preceding frames.
        expected_width: u32,
        /// Height shared by the preceding frames.
        expected_height: u32,
        /// The offending frame's width.
        actual_width: u32,
        /// The offending frame's height.
        actual_height: u32,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// An error from the `image` crate during decode or encode.
    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),
}
