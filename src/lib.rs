//! Greedy frontier-expansion reassembly of image tiles
//!
//! A source image is cut into fixed-size tiles which are then placed, one at
//! a time and in queue order, onto a grid canvas. Each tile goes to the open
//! frontier position whose already-placed neighbors it matches best under a
//! pluggable cost function. Decisions are never revisited.

#![deny(unsafe_code)]

/// Greedy placement scheduling and candidate selection
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Neighbor-cost strategies for scoring candidate placements
pub mod matching;
/// Canvas grid, positions and frontier management
pub mod spatial;
/// Patch content, orientation and channel statistics
pub mod tiles;

pub use algorithm::scheduler::{Placement, Scheduler};
pub use io::error::{AssemblyError, Result};
pub use matching::Matcher;
pub use spatial::{Canvas, Position};
pub use tiles::{Orientation, Patch};
