use ndarray::{Array3, ArrayView3, s};
use rand::Rng;

use crate::tiles::orientation::Orientation;

/// Rotate `(rows, cols, channels)` content clockwise by the orientation's quarter turns
///
/// Pure function of its inputs; the source view is never modified.
pub fn rotate<T: Clone>(content: ArrayView3<'_, T>, orientation: Orientation) -> Array3<T> {
    match orientation {
        Orientation::Up => content.to_owned(),
        // Transpose, then mirror columns
        Orientation::Right => content
            .permuted_axes([1, 0, 2])
            .slice_move(s![.., ..;-1, ..])
            .to_owned(),
        Orientation::Down => content.slice_move(s![..;-1, ..;-1, ..]).to_owned(),
        // Transpose, then mirror rows
        Orientation::Left => content
            .permuted_axes([1, 0, 2])
            .slice_move(s![..;-1, .., ..])
            .to_owned(),
    }
}

/// Rotate content a single quarter turn clockwise
pub fn rotate_clockwise<T: Clone>(content: ArrayView3<'_, T>) -> Array3<T> {
    rotate(content, Orientation::Right)
}

/// Fixed content block paired with a reassignable orientation
///
/// Content is laid out as `(rows, cols, channels)` and never changes after
/// construction. [`Patch::data`] derives the oriented view on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch<T = u8> {
    content: Array3<T>,
    orientation: Orientation,
}

impl<T: Clone> Patch<T> {
    /// Create an upright patch
    pub fn new(content: Array3<T>) -> Self {
        Self::with_orientation(content, Orientation::Up)
    }

    /// Create a patch with an explicit orientation
    pub const fn with_orientation(content: Array3<T>, orientation: Orientation) -> Self {
        Self {
            content,
            orientation,
        }
    }

    /// Create a patch with a uniformly random orientation
    pub fn random<R: Rng>(content: Array3<T>, rng: &mut R) -> Self {
        Self::with_orientation(content, Orientation::random(rng))
    }

    /// The unrotated content
    pub const fn content(&self) -> &Array3<T> {
        &self.content
    }

    /// Current orientation
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Reassign the orientation; content is unaffected
    pub const fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Content rotated by the current orientation
    pub fn data(&self) -> Array3<T> {
        rotate(self.content.view(), self.orientation)
    }

    /// Dimensions of [`Patch::data`] as `(rows, cols, channels)`
    pub fn dim(&self) -> (usize, usize, usize) {
        let (rows, cols, channels) = self.content.dim();
        if self.orientation.rotation_index() % 2 == 1 {
            (cols, rows, channels)
        } else {
            (rows, cols, channels)
        }
    }
}
