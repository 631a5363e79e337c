//! Core [`SpriteSheet`] implementation.
//!
//! `SpriteSheet` is the main entry point for the crate. It decodes a sheet
//! image, validates the requested grid against the decoded dimensions once,
//! and then hands out frames by index or [`FrameSelection`].

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
};

use crate::{
    buffer::PixelBuffer,
    codec::{decode_sheet, encode_sheet},
    error::RetileError,
    extract::{check_sheet_matches, extract_frame_unchecked, extract_frames},
    geometry::GridGeometry,
    selection::FrameSelection,
    validation::{ValidationReport, validate_grid},
};

/// A decoded sprite sheet with a validated grid geometry.
///
/// Created via [`SpriteSheet::open`] (decode from disk) or
/// [`SpriteSheet::from_buffer`] (wrap an in-memory buffer). The grid is
/// checked against the sheet dimensions exactly once, at construction, so
/// every later frame access only needs an index bounds check.
///
/// # Example
///
/// ```no_run
/// use retile::{FrameSelection, SpriteSheet};
///
/// let sheet = SpriteSheet::open("walk_cycle.png", 10, 4)?;
/// let frames = sheet.frames(&FrameSelection::Step(2))?;
/// println!("{} frames extracted", frames.len());
/// # Ok::<(), retile::RetileError>(())
/// ```
pub struct SpriteSheet {
    /// The decoded RGBA pixels.
    buffer: PixelBuffer,
    /// Grid geometry validated against `buffer` at construction.
    grid: GridGeometry,
    /// Path the sheet was decoded from (kept for error messages and logs).
    path: Option<PathBuf>,
}

impl Debug for SpriteSheet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SpriteSheet")
            .field("buffer", &self.buffer)
            .field("grid", &self.grid)
            .field("path", &self.path)
            .finish()
    }
}

impl SpriteSheet {
    /// Open a sheet image and partition it into a `columns x rows` grid.
    ///
    /// # Errors
    ///
    /// Returns [`RetileError::Decode`] when the file cannot be read or
    /// decoded, and the [`GridGeometry::from_sheet`] errors when the decoded
    /// dimensions do not tile evenly.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use retile::SpriteSheet;
    ///
    /// let sheet = SpriteSheet::open("explosion.png", 8, 8)?;
    /// assert_eq!(sheet.geometry().frame_count(), 64);
    /// # Ok::<(), retile::RetileError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P, columns: u32, rows: u32) -> Result<Self, RetileError> {
        let path = path.as_ref();
        log::debug!("Opening sheet: {}", path.display());

        let buffer = decode_sheet(path)?;
        let grid = GridGeometry::from_sheet(buffer.width(), buffer.height(), columns, rows)?;

        log::info!(
            "Loaded {}: {}x{} with {} frames of {}x{}",
            path.display(),
            buffer.width(),
            buffer.height(),
            grid.frame_count(),
            grid.frame_width,
            grid.frame_height,
        );

        Ok(Self {
            buffer,
            grid,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an in-memory buffer as a sheet with a `columns x rows` grid.
    ///
    /// # Errors
    ///
    /// Same grid errors as [`SpriteSheet::open`].
    pub fn from_buffer(
        buffer: PixelBuffer,
        columns: u32,
        rows: u32,
    ) -> Result<Self, RetileError> {
        let grid = GridGeometry::from_sheet(buffer.width(), buffer.height(), columns, rows)?;
        Ok(Self {
            buffer,
            grid,
            path: None,
        })
    }

    /// The sheet's grid geometry.
    pub fn geometry(&self) -> GridGeometry {
        self.grid
    }

    /// The sheet's pixel buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Consume the sheet and return its pixel buffer.
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// Extract a single frame as an independent buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RetileError::FrameOutOfRange`] when `frame_index` exceeds
    /// the grid's frame count.
    pub fn frame(&self, frame_index: usize) -> Result<PixelBuffer, RetileError> {
        self.grid.frame_offset(frame_index)?;
        Ok(extract_frame_unchecked(&self.buffer, &self.grid, frame_index))
    }

    /// Extract the frames named by `selection`, in selection order.
    ///
    /// # Errors
    ///
    /// Propagates selection resolution errors.
    pub fn frames(&self, selection: &FrameSelection) -> Result<Vec<PixelBuffer>, RetileError> {
        extract_frames(&self.buffer, &self.grid, selection)
    }

    /// Extract frames in parallel across rayon threads.
    ///
    /// The sheet is shared read-only between workers; results come back in
    /// selection order. Only available with the `rayon` feature.
    ///
    /// # Errors
    ///
    /// Same as [`frames`](SpriteSheet::frames).
    #[cfg(feature = "rayon")]
    pub fn frames_parallel(
        &self,
        selection: &FrameSelection,
    ) -> Result<Vec<PixelBuffer>, RetileError> {
        crate::extract::parallel_extract_frames(&self.buffer, &self.grid, selection)
    }

    /// Iterate over selected frames lazily, extracting one per `next()` call.
    ///
    /// The selection is resolved up front, so iteration itself cannot fail.
    ///
    /// # Errors
    ///
    /// Propagates selection resolution errors.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use retile::{FrameSelection, SpriteSheet};
    ///
    /// let sheet = SpriteSheet::open("run_cycle.png", 6, 1)?;
    /// for frame in sheet.iter_frames(&FrameSelection::All)? {
    ///     println!("{}x{}", frame.width(), frame.height());
    /// }
    /// # Ok::<(), retile::RetileError>(())
    /// ```
    pub fn iter_frames(&self, selection: &FrameSelection) -> Result<FrameIter<'_>, RetileError> {
        let indices = selection.resolve(self.grid.frame_count())?;
        Ok(FrameIter {
            sheet: self,
            indices,
            position: 0,
        })
    }

    /// Run validation checks against this sheet's grid and return a report.
    pub fn validate(&self) -> ValidationReport {
        validate_grid(
            self.buffer.width(),
            self.buffer.height(),
            self.grid.columns,
            self.grid.rows,
        )
    }

    /// Encode the sheet's buffer to an image file.
    ///
    /// # Errors
    ///
    /// Returns [`RetileError::Encode`] on write failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RetileError> {
        encode_sheet(path, &self.buffer)
    }

    /// Invariant check used by tests: buffer and grid always agree.
    #[doc(hidden)]
    pub fn check_consistency(&self) -> Result<(), RetileError> {
        check_sheet_matches(&self.buffer, &self.grid)
    }
}

/// A lazy iterator over extracted frames.
///
/// Created via [`SpriteSheet::iter_frames`]. Each call to
/// [`next()`](Iterator::next) extracts one frame into a fresh buffer; frames
/// that are never visited are never copied.
pub struct FrameIter<'a> {
    sheet: &'a SpriteSheet,
    /// Resolved frame indices, in selection order.
    indices: Vec<usize>,
    /// Position of the next index to yield.
    position: usize,
}

impl Iterator for FrameIter<'_> {
    type Item = PixelBuffer;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.indices.get(self.position)?;
        self.position += 1;
        Some(extract_frame_unchecked(
            &self.sheet.buffer,
            &self.sheet.grid,
            index,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.indices.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameIter<'_> {}
