//! Command-line interface for batch reassembly of image files

use crate::algorithm::scheduler::{Scheduler, default_seed_positions};
use crate::io::configuration::{
    DEFAULT_BAND_WIDTH, DEFAULT_SEED, DEFAULT_SEED_PLACEMENTS, DEFAULT_TILE_SIZE,
    GIF_FRAME_DELAY_MS, LAYOUT_SUFFIX, MAX_GRID_DIMENSION, OUTPUT_SUFFIX, PREVIEW_CELL_PIXELS,
    SUPPORTED_EXTENSIONS, VISUALIZATION_SUFFIX,
};
use crate::io::error::{AssemblyError, Result, invalid_parameter};
use crate::io::image::export_canvas_as_png;
use crate::io::progress::ProgressManager;
use crate::io::provider::TileProvider;
use crate::io::visualization::AssemblyCapture;
use crate::matching::Matcher;
use crate::spatial::Canvas;
use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

/// Cost strategy selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MatcherKind {
    /// Whole-patch mean color, best single neighbor
    Mean,
    /// Facing boundary bands, summed over neighbors
    Edge,
}

#[derive(Parser)]
#[command(name = "atsumaru")]
#[command(
    author,
    version,
    about = "Reassemble shuffled image tiles by greedy neighbor matching"
)]
/// Command-line arguments for the reassembly tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible shuffling and orientation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Tile edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Canvas width in cells (defaults to the source tile grid width)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Canvas height in cells (defaults to the source tile grid height)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Neighbor cost strategy
    #[arg(short, long, value_enum, default_value_t = MatcherKind::Edge)]
    pub matcher: MatcherKind,

    /// Boundary band thickness in pixels for the edge matcher
    #[arg(short, long, default_value_t = DEFAULT_BAND_WIDTH)]
    pub band_width: usize,

    /// Number of patches placed before greedy matching starts
    #[arg(long, default_value_t = DEFAULT_SEED_PLACEMENTS)]
    pub seeds: usize,

    /// Score every orientation of each patch instead of keeping its own
    #[arg(short, long)]
    pub orientations: bool,

    /// Keep every tile upright instead of assigning random orientations
    #[arg(long)]
    pub no_rotate: bool,

    /// Keep tiles in source order instead of shuffling them
    #[arg(long)]
    pub no_shuffle: bool,

    /// Enable visualization output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Write the final grid layout as a text dump
    #[arg(short, long)]
    pub layout: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// The matcher selected by the arguments
    pub const fn matcher(&self) -> Matcher {
        match self.matcher {
            MatcherKind::Mean => Matcher::MeanColor,
            MatcherKind::Edge => Matcher::EdgeBand {
                band_width: self.band_width,
            },
        }
    }

    /// Canvas size in cells, falling back to the source tile grid
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or exceeds the maximum
    pub fn canvas_size(&self, source_grid: (usize, usize)) -> Result<(usize, usize)> {
        let width = self.width.unwrap_or(source_grid.0);
        let height = self.height.unwrap_or(source_grid.1);

        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION} cells"),
                ));
            }
        }

        Ok((width, height))
    }

    /// Validate argument combinations that clap cannot express
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size, band width or seed count is zero
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile-size",
                &self.tile_size,
                &"tile edge must be at least one pixel",
            ));
        }
        if self.band_width == 0 {
            return Err(invalid_parameter(
                "band-width",
                &self.band_width,
                &"band must be at least one pixel thick",
            ));
        }
        if self.seeds == 0 {
            return Err(invalid_parameter(
                "seeds",
                &self.seeds,
                &"at least one seed placement is needed to open the frontier",
            ));
        }
        Ok(())
    }
}

/// Orchestrates batch reassembly of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target collection or any
    /// image's assembly fails
    pub fn process(&mut self) -> Result<()> {
        self.cli.validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Whether a path names a source image rather than an assembled output
    pub fn is_source_image(path: &Path) -> bool {
        let supported = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext))
            });
        let generated = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
        supported && !generated
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if Self::is_source_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG or JPEG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let read_error = |e: std::io::Error| AssemblyError::FileSystem {
                path: self.cli.target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if Self::is_source_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let provider = TileProvider::from_path(input_path, self.cli.tile_size)?;
        let (width, height) = self.cli.canvas_size(provider.grid_size())?;

        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let patches = provider.into_patches(&mut rng, !self.cli.no_rotate, !self.cli.no_shuffle);
        let total = patches.len();

        let mut scheduler = Scheduler::new(Canvas::new(width, height), patches, self.cli.matcher())
            .with_orientation_search(self.cli.orientations);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_image(index, input_path, total);
        }

        let seeds = default_seed_positions(width, height, self.cli.seeds.min(total));
        scheduler.seed_all(&seeds)?;

        while scheduler.remaining() > 0 {
            scheduler.step()?;
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_placements(index, scheduler.history().len());
            }
        }

        export_canvas_as_png(
            scheduler.canvas(),
            self.cli.tile_size,
            &Self::get_output_path(input_path),
        )?;

        if self.cli.visualize {
            let capture = AssemblyCapture::from_history(
                scheduler.canvas(),
                scheduler.history(),
                PREVIEW_CELL_PIXELS,
            );
            capture.export_gif(&Self::get_visualization_path(input_path), GIF_FRAME_DELAY_MS)?;
        }

        if self.cli.layout {
            let layout_path = Self::get_layout_path(input_path);
            std::fs::write(&layout_path, scheduler.canvas().to_string()).map_err(|e| {
                AssemblyError::FileSystem {
                    path: layout_path.clone(),
                    operation: "write layout",
                    source: e,
                }
            })?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_image(index);
        }

        Ok(())
    }

    /// Path of the assembled PNG for an input image
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, OUTPUT_SUFFIX, "png")
    }

    /// Path of the assembly animation for an input image
    pub fn get_visualization_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, VISUALIZATION_SUFFIX, "gif")
    }

    /// Path of the text layout dump for an input image
    pub fn get_layout_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, LAYOUT_SUFFIX, "txt")
    }

    fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
