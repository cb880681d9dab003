//! Assembly constants and runtime configuration defaults

/// Fixed seed for reproducible shuffling and orientation
pub const DEFAULT_SEED: u64 = 42;

/// Edge length of the square tiles cut from the source image, in pixels
pub const DEFAULT_TILE_SIZE: usize = 50;

/// Thickness of the boundary band compared by the edge-band matcher
pub const DEFAULT_BAND_WIDTH: usize = 10;

// Two seeds give the early frontier two growth fronts
/// Number of patches placed before the greedy loop starts
pub const DEFAULT_SEED_PLACEMENTS: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension in cells
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Image extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to assembled image filenames
pub const OUTPUT_SUFFIX: &str = "_assembled";
/// Suffix added to assembly animation filenames
pub const VISUALIZATION_SUFFIX: &str = "_assembly";
/// Suffix added to text layout dump filenames
pub const LAYOUT_SUFFIX: &str = "_layout";
/// Edge length in pixels of one cell in the assembly animation
pub const PREVIEW_CELL_PIXELS: u32 = 8;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
