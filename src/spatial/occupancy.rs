use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset recording which canvas cells hold a patch
///
/// Cells are addressed by their flat row-major index `y * width + x`.
/// Every cell owns its own bit, so no two rows can alias each other.
#[derive(Clone, Debug)]
pub struct Occupancy {
    bits: BitVec,
}

impl Occupancy {
    /// Create an occupancy set with every cell vacant
    pub fn new(cells: usize) -> Self {
        Self {
            bits: bitvec![0; cells],
        }
    }

    /// Mark a cell as occupied
    ///
    /// Returns `false` when the cell was already occupied or lies past the end.
    pub fn occupy(&mut self, index: usize) -> bool {
        if index >= self.bits.len() || self.contains(index) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test cell membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Count occupied cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Total number of cells tracked
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Flat indices of occupied cells in ascending order
    pub fn iter_occupied(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Occupancy({}/{} cells)", self.count(), self.capacity())
    }
}
