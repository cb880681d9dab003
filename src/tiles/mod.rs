//! Patch content, orientation and channel statistics
//!
//! This module contains tile-related functionality including:
//! - The four quarter-turn orientations
//! - Patches pairing immutable content with an orientation
//! - Channel means over whole patches and boundary bands

/// Channel statistics over patches and their boundary bands
pub mod bands;
/// Quarter-turn orientation tag
pub mod orientation;
/// Content blocks with on-demand rotation
pub mod patch;

pub use orientation::Orientation;
pub use patch::Patch;
