//! Spatial data structures for patch placement
//!
//! This module contains spatial-related functionality including:
//! - Grid coordinates and neighbor directions
//! - Canvas state with filled and frontier tracking
//! - Bit-level occupancy storage

/// Placement canvas and neighbor queries
pub mod canvas;
/// Bitset occupancy storage for filled cells
pub mod occupancy;
/// Grid coordinates and the four neighbor sides
pub mod position;

pub use canvas::{Canvas, CellState, Neighbors};
pub use position::{Position, Side};
