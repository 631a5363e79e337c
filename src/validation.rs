//! Sheet and grid validation.
//!
//! Provides [`validate_grid`] which checks a sheet's dimensions against a
//! requested grid and returns a [`ValidationReport`] describing the geometry
//! and any problems, without performing any pixel work.
//!
//! # Example
//!
//! ```
//! use retile::validate_grid;
//!
//! let report = validate_grid(64, 64, 4, 4);
//! if report.is_valid() {
//!     println!("Grid fits");
//! } else {
//!     for error in &report.errors {
//!         println!("Error: {error}");
//!     }
//! }
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Summary of sheet/grid validation.
///
/// Produced by [`validate_grid`] and
/// [`SpriteSheet::validate`](crate::SpriteSheet::validate). Contains lists of
/// informational notices, warnings, and errors found during validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Informational notices (not problems).
    pub info: Vec<String>,
    /// Non-fatal issues that may indicate a mistaken grid.
    pub warnings: Vec<String>,
    /// Fatal issues that will prevent extraction.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Returns `true` if no errors were found.
    ///
    /// Warnings do not affect this result — only errors make the report
    /// invalid.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of issues (info + warnings + errors).
    pub fn issue_count(&self) -> usize {
        self.info.len() + self.warnings.len() + self.errors.len()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for item in &self.info {
            writeln!(f, "[INFO] {item}")?;
        }
        for item in &self.warnings {
            writeln!(f, "[WARN] {item}")?;
        }
        for item in &self.errors {
            writeln!(f, "[ERROR] {item}")?;
        }
        if self.issue_count() == 0 {
            writeln!(f, "No issues found.")?;
        }
        Ok(())
    }
}

/// Check a sheet's pixel dimensions against a requested grid.
///
/// Validation never touches pixel data, so it works from dimensions alone;
/// use it before committing to a full decode and repack run.
pub fn validate_grid(
    sheet_width: u32,
    sheet_height: u32,
    columns: u32,
    rows: u32,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    report
        .info
        .push(format!("Sheet: {sheet_width}x{sheet_height}"));

    // ── Grid counts ────────────────────────────────────────────────
    if columns == 0 || rows == 0 {
        report
            .errors
            .push("Grid must have at least one column and one row".to_string());
        return report;
    }

    // ── Divisibility ───────────────────────────────────────────────
    if sheet_width % columns != 0 {
        report.errors.push(format!(
            "Sheet width {sheet_width}px does not divide evenly into {columns} frames",
        ));
    }

    if sheet_height % rows != 0 {
        report.errors.push(format!(
            "Sheet height {sheet_height}px does not divide evenly into {rows} frames",
        ));
    }

    if !report.errors.is_empty() {
        return report;
    }

    // ── Frame geometry ─────────────────────────────────────────────
    let frame_width = sheet_width / columns;
    let frame_height = sheet_height / rows;

    if frame_width == 0 || frame_height == 0 {
        report.errors.push(format!(
            "Grid produces zero-size frames ({frame_width}x{frame_height})",
        ));
        return report;
    }

    report.info.push(format!(
        "Grid: {columns}x{rows} frames of {frame_width}x{frame_height}",
    ));

    if columns == 1 && rows == 1 {
        report
            .warnings
            .push("Grid holds a single frame; repacking will copy the sheet unchanged".to_string());
    }

    if frame_width < 4 || frame_height < 4 {
        report.warnings.push(format!(
            "Frames are only {frame_width}x{frame_height}px; column and row counts may be swapped",
        ));
    }

    report
}
