//! # retile
//!
//! Re-tile sprite sheets — chop a regular grid of frames out of a sheet
//! image and re-pack a chosen subset into a new sheet with a different
//! layout.
//!
//! `retile` serves asset-pipeline workflows where a source animation sheet
//! must be reflowed into a different row width, subsampled (keep every Nth
//! frame), or both. All pixel work happens on flat RGBA buffers with exact
//! stride arithmetic; file I/O goes through the
//! [`image`](https://crates.io/crates/image) crate, so any format it reads
//! or writes works here.
//!
//! ## Quick Start
//!
//! ### Repack a sheet in one call
//!
//! ```no_run
//! use retile::{RepackOptions, repack};
//!
//! // 10x10 source grid, keep every odd frame, reflow to 5 columns.
//! let options = RepackOptions::new(10, 10)
//!     .with_max_columns(5)
//!     .with_step(2);
//! let summary = repack("big.png", "not_so_big.png", &options).unwrap();
//! println!("{}x{}", summary.output_width, summary.output_height);
//! ```
//!
//! ### Work with individual frames
//!
//! ```no_run
//! use retile::{FrameSelection, SpriteSheet, compose_sheet};
//!
//! let sheet = SpriteSheet::open("walk_cycle.png", 8, 4).unwrap();
//!
//! // A single frame
//! let frame = sheet.frame(0).unwrap();
//!
//! // Every third frame, then stack them in one column
//! let frames = sheet.frames(&FrameSelection::Step(3)).unwrap();
//! let column = compose_sheet(&frames, 1).unwrap();
//! ```
//!
//! ## Features
//!
//! - **Frame extraction** — by index, step, range, or specific index list,
//!   eagerly ([`SpriteSheet::frames`]) or lazily
//!   ([`SpriteSheet::iter_frames`])
//! - **Sheet composition** — re-pack any ordered frame sequence under a new
//!   column bound; partially-filled last rows stay transparent
//! - **Pixel-exact addressing** — frames are located by stride arithmetic
//!   over the flat buffer; extraction regions never overlap
//! - **Validation** — check a grid against a sheet's dimensions before
//!   doing any pixel work
//! - **One-call pipeline** — [`repack`] wires decode, select, extract,
//!   compose, and encode together
//!
//! ### Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `rayon` | [`SpriteSheet::frames_parallel`] distributes extraction across rayon threads |

pub mod buffer;
pub mod codec;
pub mod compose;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod pipeline;
pub mod selection;
pub mod sheet;
pub mod validation;

pub use buffer::{BYTES_PER_PIXEL, PixelBuffer};
pub use codec::{decode_sheet, encode_sheet};
pub use compose::compose_sheet;
pub use error::RetileError;
pub use extract::{extract_frame, extract_frames};
pub use geometry::GridGeometry;
pub use pipeline::{RepackOptions, RepackSummary, repack};
pub use selection::FrameSelection;
pub use sheet::{FrameIter, SpriteSheet};
pub use validation::{ValidationReport, validate_grid};
