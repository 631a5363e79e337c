//! End-to-end repacking.
//!
//! [`repack`] wires the whole crate together: decode a sheet, partition it
//! into the source grid, select frames by step (or any other
//! [`FrameSelection`]), extract them, compose the new sheet, and encode it.
//! [`RepackOptions`] is a builder that carries the grid and selection
//! settings without polluting the function signature.
//!
//! # Example
//!
//! ```no_run
//! use retile::{RepackOptions, repack};
//!
//! // Keep every odd frame of a 10x10 sheet, reflow to 5 columns.
//! let options = RepackOptions::new(10, 10)
//!     .with_max_columns(5)
//!     .with_step(2);
//! let summary = repack("big.png", "not_so_big.png", &options)?;
//! println!(
//!     "{} frames -> {}x{}",
//!     summary.frames_written, summary.output_width, summary.output_height,
//! );
//! # Ok::<(), retile::RetileError>(())
//! ```

use std::path::Path;

use crate::{
    codec::encode_sheet,
    compose::compose_sheet,
    error::RetileError,
    selection::FrameSelection,
    sheet::SpriteSheet,
};

/// Settings for a [`repack`] run.
///
/// `columns` and `rows` describe the *source* grid; `max_columns` bounds the
/// *output* grid's width in frames. The default selection keeps every frame.
#[derive(Debug, Clone)]
#[must_use]
pub struct RepackOptions {
    /// Number of frame columns in the source sheet.
    pub columns: u32,
    /// Number of frame rows in the source sheet.
    pub rows: u32,
    /// Maximum number of frame columns in the output sheet.
    pub max_columns: u32,
    /// Which frames to keep, and in what order.
    pub selection: FrameSelection,
}

impl RepackOptions {
    /// Create options for a source sheet of `columns x rows` frames.
    ///
    /// Defaults: output keeps the source column count, every frame selected.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            max_columns: columns,
            selection: FrameSelection::Step(1),
        }
    }

    /// Bound the output sheet's width in frames.
    pub fn with_max_columns(mut self, max_columns: u32) -> Self {
        self.max_columns = max_columns;
        self
    }

    /// Keep every Nth frame, starting at frame 0.
    ///
    /// Shorthand for `with_selection(FrameSelection::Step(step))`.
    pub fn with_step(mut self, step: usize) -> Self {
        self.selection = FrameSelection::Step(step);
        self
    }

    /// Set the full frame selection.
    pub fn with_selection(mut self, selection: FrameSelection) -> Self {
        self.selection = selection;
        self
    }
}

/// What a [`repack`] run produced.
///
/// Returned on success so callers can report without re-probing the files.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct RepackSummary {
    /// Decoded source sheet width in pixels.
    pub source_width: u32,
    /// Decoded source sheet height in pixels.
    pub source_height: u32,
    /// Width of a single frame in pixels.
    pub frame_width: u32,
    /// Height of a single frame in pixels.
    pub frame_height: u32,
    /// Number of frames placed into the output sheet.
    pub frames_written: usize,
    /// Output sheet width in pixels.
    pub output_width: u32,
    /// Output sheet height in pixels.
    pub output_height: u32,
}

/// Decode `input`, re-tile it per `options`, and encode the result to
/// `output`.
///
/// # Errors
///
/// - [`RetileError::Decode`] when the input cannot be read or decoded.
/// - The [`crate::GridGeometry`] errors when the decoded dimensions do not
///   tile evenly into the requested source grid.
/// - Selection resolution errors for a bad step or index list.
/// - [`RetileError::Encode`] when the output cannot be written. Encode
///   failures are fatal: no run reports success without a complete output
///   file on disk.
pub fn repack<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &RepackOptions,
) -> Result<RepackSummary, RetileError> {
    let output = output.as_ref();

    let sheet = SpriteSheet::open(input, options.columns, options.rows)?;
    let grid = sheet.geometry();

    let frames = sheet.frames(&options.selection)?;
    let composed = compose_sheet(&frames, options.max_columns)?;

    log::info!(
        "Saving {}: {}x{}, {} frames in total",
        output.display(),
        composed.width(),
        composed.height(),
        frames.len(),
    );
    encode_sheet(output, &composed)?;

    Ok(RepackSummary {
        source_width: grid.sheet_width(),
        source_height: grid.sheet_height(),
        frame_width: grid.frame_width,
        frame_height: grid.frame_height,
        frames_written: frames.len(),
        output_width: composed.width(),
        output_height: composed.height(),
    })
}
