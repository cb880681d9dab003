//! Fixed-size placement canvas with filled and frontier position tracking
//!
//! The canvas owns every placed item and maintains two position sets: the
//! filled set and the frontier (`available`) set of in-bounds, unfilled
//! positions that touch at least one filled position. The frontier is kept in
//! an ordered set so that iteration is reproducible. Both sets are updated
//! incrementally on each insert, and nothing is ever removed from the canvas.

use ndarray::Array2;
use std::collections::BTreeSet;
use std::fmt;

use crate::io::error::{AssemblyError, Result};
use crate::spatial::occupancy::Occupancy;
use crate::spatial::position::{Position, Side};

/// Dump glyph for a cell that has never been touched
pub const UNTOUCHED_GLYPH: char = '.';
/// Dump glyph for a frontier cell awaiting a patch
pub const FRONTIER_GLYPH: char = '+';
/// Dump glyph for a filled cell
pub const FILLED_GLYPH: char = '#';

/// Placement status of a single canvas cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Neither filled nor adjacent to a filled cell
    Untouched,
    /// Empty but adjacent to at least one filled cell
    Frontier,
    /// Holds placed content
    Filled,
}

impl CellState {
    /// Character used for this state in the text dump
    pub const fn glyph(self) -> char {
        match self {
            Self::Untouched => UNTOUCHED_GLYPH,
            Self::Frontier => FRONTIER_GLYPH,
            Self::Filled => FILLED_GLYPH,
        }
    }
}

/// Contents of the four cells around a position
///
/// Always carries exactly one entry per [`Side`]; an entry is `None` when the
/// neighbor is out of bounds or not filled.
#[derive(Debug)]
pub struct Neighbors<'a, C> {
    entries: [Option<&'a C>; 4],
}

impl<'a, C> Neighbors<'a, C> {
    /// Content of the neighbor on the given side, if filled
    pub fn get(&self, side: Side) -> Option<&'a C> {
        self.entries.get(side.index()).copied().flatten()
    }

    /// Every entry keyed by side, present or not
    pub fn iter(&self) -> impl Iterator<Item = (Side, Option<&'a C>)> + '_ {
        Side::ALL.into_iter().map(|side| (side, self.get(side)))
    }

    /// Only the filled neighbors
    pub fn present(&self) -> impl Iterator<Item = (Side, &'a C)> + '_ {
        Side::ALL
            .into_iter()
            .filter_map(|side| self.get(side).map(|content| (side, content)))
    }

    /// Number of filled neighbors
    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    /// True when no neighbor is filled
    pub fn none_present(&self) -> bool {
        self.present_count() == 0
    }
}

/// Grid of placement slots with filled and frontier bookkeeping
#[derive(Debug, Clone)]
pub struct Canvas<C> {
    width: usize,
    height: usize,
    /// Owned slot per cell, indexed `[y, x]`
    slots: Array2<Option<C>>,
    filled: Occupancy,
    available: BTreeSet<Position>,
}

impl<C> Canvas<C> {
    /// Create an empty canvas; both position sets start empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            slots: Array2::from_shape_simple_fn((height, width), || None),
            filled: Occupancy::new(width * height),
            available: BTreeSet::new(),
        }
    }

    /// Canvas dimensions as `(width, height)`
    pub const fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Check `0 <= x < width` and `0 <= y < height`
    pub const fn within_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    /// Store content at a vacant in-bounds position and grow the frontier
    ///
    /// The position leaves the frontier and every in-bounds, unfilled
    /// 4-neighbor joins it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The position is outside the canvas (`OutOfBounds`)
    /// - The position already holds content (`AlreadyFilled`)
    pub fn insert(&mut self, content: C, position: Position) -> Result<()> {
        let index = self.checked_index(position)?;
        if self.filled.contains(index) {
            return Err(AssemblyError::AlreadyFilled { position });
        }

        if let Some(slot) = self.slots.get_mut(Self::slot_index(position)) {
            *slot = Some(content);
        }
        self.filled.occupy(index);
        self.available.remove(&position);

        for (_, neighbor) in position.neighbors() {
            if let Some(neighbor_index) = self.cell_index(neighbor) {
                if !self.filled.contains(neighbor_index) {
                    self.available.insert(neighbor);
                }
            }
        }

        Ok(())
    }

    /// Content at a position, `None` if never filled
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the canvas
    pub fn get(&self, position: Position) -> Result<Option<&C>> {
        self.checked_index(position)?;
        Ok(self.slot(position))
    }

    /// Neighbor map around a position, one entry per side
    pub fn get_neighbors(&self, position: Position) -> Neighbors<'_, C> {
        let mut entries = [None; 4];
        for (side, neighbor) in position.neighbors() {
            if let Some(entry) = entries.get_mut(side.index()) {
                *entry = self.slot(neighbor);
            }
        }
        Neighbors { entries }
    }

    /// Verify a position can receive content
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` or `AlreadyFilled` exactly as [`Self::insert`] would
    pub fn ensure_vacant(&self, position: Position) -> Result<()> {
        let index = self.checked_index(position)?;
        if self.filled.contains(index) {
            return Err(AssemblyError::AlreadyFilled { position });
        }
        Ok(())
    }

    /// Whether a position holds content
    pub fn is_filled(&self, position: Position) -> bool {
        self.cell_index(position)
            .is_some_and(|index| self.filled.contains(index))
    }

    /// Whether a position is on the frontier
    pub fn is_available(&self, position: Position) -> bool {
        self.available.contains(&position)
    }

    /// Frontier positions in `(x, y)` lexicographic order
    pub const fn available(&self) -> &BTreeSet<Position> {
        &self.available
    }

    /// Number of filled positions
    pub fn filled_count(&self) -> usize {
        self.filled.count()
    }

    /// True once every cell holds content
    pub fn is_full(&self) -> bool {
        self.filled.is_full()
    }

    /// Filled positions in row-major order
    pub fn filled_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.filled
            .iter_occupied()
            .map(|index| self.position_of(index))
    }

    /// Every placed item with its position, in row-major order
    pub fn placed(&self) -> impl Iterator<Item = (Position, &C)> + '_ {
        self.filled_positions()
            .filter_map(|position| self.slot(position).map(|content| (position, content)))
    }

    /// Placement status of a position; out-of-bounds positions are untouched
    pub fn cell_state(&self, position: Position) -> CellState {
        if self.is_filled(position) {
            CellState::Filled
        } else if self.is_available(position) {
            CellState::Frontier
        } else {
            CellState::Untouched
        }
    }

    fn slot(&self, position: Position) -> Option<&C> {
        if !self.within_bounds(position) {
            return None;
        }
        self.slots
            .get(Self::slot_index(position))
            .and_then(Option::as_ref)
    }

    const fn slot_index(position: Position) -> [usize; 2] {
        [position.y as usize, position.x as usize]
    }

    fn cell_index(&self, position: Position) -> Option<usize> {
        self.within_bounds(position)
            .then(|| position.y as usize * self.width + position.x as usize)
    }

    fn checked_index(&self, position: Position) -> Result<usize> {
        self.cell_index(position)
            .ok_or(AssemblyError::OutOfBounds {
                position,
                size: self.size(),
            })
    }

    const fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }
}

impl<C> fmt::Display for Canvas<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| self.cell_state(Position::new(x as i32, y as i32)).glyph())
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
