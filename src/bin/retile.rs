use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use retile::{FrameSelection, RepackOptions, SpriteSheet, encode_sheet, repack, validate_grid};
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  retile repack big.png not_so_big.png --columns 10 --rows 10 --max-columns 10 --step 2\n  retile info sheet.png --columns 8 --rows 4 --json\n  retile extract sheet.png --out frames --columns 8 --rows 4 --progress\n  retile completions zsh > _retile";

#[derive(Debug, Parser)]
#[command(
    name = "retile",
    version,
    about = "Chop a sprite sheet into frames and re-pack them into a new layout",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,

    /// Show a progress bar where supported.
    #[arg(long)]
    progress: bool,

    /// Allow overwriting existing output files.
    #[arg(long)]
    overwrite: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Re-tile a sheet into a new grid layout.
    #[command(
        about = "Re-pack a sheet into a new layout",
        after_help = "Examples:\n  retile repack big.png small.png --columns 10 --rows 10 --step 2\n  retile repack strip.png column.png --columns 6 --rows 1 --max-columns 1"
    )]
    Repack {
        /// Input sheet image path.
        input: PathBuf,
        /// Output sheet image path.
        output: PathBuf,
        /// Number of frame columns in the input sheet.
        #[arg(long)]
        columns: u32,
        /// Number of frame rows in the input sheet.
        #[arg(long)]
        rows: u32,
        /// Maximum frame columns in the output sheet (defaults to --columns).
        #[arg(long)]
        max_columns: Option<u32>,
        /// Keep every Nth frame, starting at frame 0.
        #[arg(long, default_value_t = 1)]
        step: usize,
        /// Print the run summary as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print sheet dimensions and grid geometry (alias: probe).
    #[command(
        about = "Print sheet information",
        visible_alias = "probe",
        after_help = "Examples:\n  retile info sheet.png\n  retile info sheet.png --columns 8 --rows 4 --json"
    )]
    Info {
        /// Input sheet image path.
        input: PathBuf,
        /// Optional frame columns, to report grid geometry.
        #[arg(long)]
        columns: Option<u32>,
        /// Optional frame rows, to report grid geometry.
        #[arg(long)]
        rows: Option<u32>,
        /// Output information as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Extract frames to individual image files.
    #[command(
        about = "Extract frames to a directory",
        after_help = "Examples:\n  retile extract sheet.png --out frames --columns 8 --rows 4\n  retile extract sheet.png --out frames --columns 8 --rows 4 --step 2 --ext bmp --progress"
    )]
    Extract {
        /// Input sheet image path.
        input: PathBuf,
        /// Output directory for extracted frame images.
        #[arg(long)]
        out: PathBuf,
        /// Number of frame columns in the input sheet.
        #[arg(long)]
        columns: u32,
        /// Number of frame rows in the input sheet.
        #[arg(long)]
        rows: u32,
        /// Keep every Nth frame, starting at frame 0.
        #[arg(long, default_value_t = 1)]
        step: usize,
        /// Output image extension (png, bmp, tiff, ...).
        #[arg(long, default_value = "png")]
        ext: String,
    },

    /// Validate a grid against a sheet and print a report.
    #[command(
        about = "Validate sheet geometry",
        after_help = "Examples:\n  retile validate sheet.png --columns 8 --rows 4"
    )]
    Validate {
        /// Input sheet image path.
        input: PathBuf,
        /// Number of frame columns to check.
        #[arg(long)]
        columns: u32,
        /// Number of frame rows to check.
        #[arg(long)]
        rows: u32,
    },

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn clean_extension(value: &str) -> String {
    value.trim_start_matches('.').to_ascii_lowercase()
}

fn frame_output_path(directory: &Path, frame_index: usize, extension: &str) -> PathBuf {
    directory.join(format!("frame_{frame_index:06}.{extension}"))
}

fn ensure_writable_path(path: &Path, overwrite: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        if overwrite {
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("overwriting {}", path.display()).yellow()
            );
        } else {
            return Err(format!(
                "output already exists: {} (use --overwrite to replace)",
                path.display()
            )
            .into());
        }
    }
    Ok(())
}

fn sheet_dimensions(path: &Path) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    // Header-only probe; no pixel decode.
    let (width, height) = image::image_dimensions(path)
        .map_err(|error| format!("cannot read {}: {error}", path.display()))?;
    Ok((width, height))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Repack {
            input,
            output,
            columns,
            rows,
            max_columns,
            step,
            json,
        } => {
            ensure_writable_path(&output, cli.global.overwrite)?;

            let options = RepackOptions::new(columns, rows)
                .with_max_columns(max_columns.unwrap_or(columns))
                .with_step(step);

            if cli.global.verbose {
                eprintln!(
                    "repacking {} -> {} ({columns}x{rows} grid, step {step})",
                    input.display(),
                    output.display()
                );
            }

            let summary = repack(&input, &output, &options)?;

            if json {
                let payload = json!({
                    "source": {
                        "width": summary.source_width,
                        "height": summary.source_height,
                    },
                    "frame": {
                        "width": summary.frame_width,
                        "height": summary.frame_height,
                    },
                    "frames_written": summary.frames_written,
                    "output": {
                        "width": summary.output_width,
                        "height": summary.output_height,
                        "path": output.display().to_string(),
                    },
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!(
                    "{} {}",
                    "success:".green().bold(),
                    format!(
                        "Packed {} frame(s) into {} ({}x{})",
                        summary.frames_written,
                        output.display(),
                        summary.output_width,
                        summary.output_height,
                    )
                    .green()
                );
            }
        }
        Commands::Info {
            input,
            columns,
            rows,
            json,
        } => {
            let (width, height) = sheet_dimensions(&input)?;

            let grid = match (columns, rows) {
                (Some(columns), Some(rows)) => {
                    Some(retile::GridGeometry::from_sheet(width, height, columns, rows)?)
                }
                (None, None) => None,
                _ => {
                    return Err("Provide both --columns and --rows, or neither".into());
                }
            };

            if json {
                let payload = json!({
                    "width": width,
                    "height": height,
                    "grid": grid.map(|grid| json!({
                        "columns": grid.columns,
                        "rows": grid.rows,
                        "frame_width": grid.frame_width,
                        "frame_height": grid.frame_height,
                        "frame_count": grid.frame_count(),
                    })),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("Sheet: {width}x{height}");
                if let Some(grid) = grid {
                    println!(
                        "Grid: {}x{} frames of {}x{} ({} total)",
                        grid.columns,
                        grid.rows,
                        grid.frame_width,
                        grid.frame_height,
                        grid.frame_count(),
                    );
                }
            }
        }
        Commands::Extract {
            input,
            out,
            columns,
            rows,
            step,
            ext,
        } => {
            if out.exists() {
                if !cli.global.overwrite {
                    return Err(format!(
                        "output directory already exists: {} (use --overwrite)",
                        out.display()
                    )
                    .into());
                }
                eprintln!(
                    "{} {}",
                    "warning:".yellow().bold(),
                    format!("writing into existing directory {}", out.display()).yellow()
                );
            }
            fs::create_dir_all(&out)?;

            let sheet = SpriteSheet::open(&input, columns, rows)?;
            let grid = sheet.geometry();
            let indices = FrameSelection::Step(step).resolve(grid.frame_count())?;

            let progress_bar = if cli.global.progress {
                let pb = ProgressBar::new(indices.len() as u64);
                let style = ProgressStyle::with_template(
                    "{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}",
                )?;
                pb.set_style(style.progress_chars("##-"));
                Some(pb)
            } else {
                None
            };

            let extension = clean_extension(&ext);
            let mut extracted = 0_usize;

            for frame_index in indices {
                let output_path = frame_output_path(&out, frame_index, &extension);
                if output_path.exists() && !cli.global.overwrite {
                    return Err(format!(
                        "output file already exists: {} (use --overwrite)",
                        output_path.display()
                    )
                    .into());
                }

                let frame = sheet.frame(frame_index)?;
                encode_sheet(&output_path, &frame)?;
                extracted += 1;

                if let Some(pb) = &progress_bar {
                    pb.inc(1);
                }

                if cli.global.verbose {
                    eprintln!("saved frame {} -> {}", frame_index, output_path.display());
                }
            }

            if let Some(pb) = progress_bar {
                pb.finish_with_message("done");
            }

            println!(
                "{} {}",
                "success:".green().bold(),
                format!("Extracted {extracted} frame(s) to {}", out.display()).green()
            );
        }
        Commands::Validate {
            input,
            columns,
            rows,
        } => {
            let (width, height) = sheet_dimensions(&input)?;
            let report = validate_grid(width, height, columns, rows);
            print!("{report}");
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "retile", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{clean_extension, frame_output_path};

    #[test]
    fn clean_extension_strips_dot_and_case() {
        assert_eq!(clean_extension(".PNG"), "png");
        assert_eq!(clean_extension("bmp"), "bmp");
        assert_eq!(clean_extension(".Tiff"), "tiff");
    }

    #[test]
    fn frame_output_path_pads_index() {
        let path = frame_output_path(Path::new("frames"), 7, "png");
        assert_eq!(path, Path::new("frames/frame_000007.png"));
    }
}
