/// Command-line interface and batch file processing
pub mod cli;
/// Defaults and output naming constants
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Canvas compositing and PNG export
pub mod image;
/// Progress bars for batch assembly
pub mod progress;
/// Tile extraction from source images
pub mod provider;
/// Assembly animation capture and GIF export
pub mod visualization;
