//! Per-channel statistics over whole patches and their boundary bands
//!
//! Content is laid out as `(rows, cols, channels)`. A band is the outermost
//! `width` rows or columns on one side, clamped to the content size.

use ndarray::{ArrayView3, Axis, s};
use num_traits::ToPrimitive;

use crate::spatial::position::Side;

/// Mean of each channel over every pixel of the view
///
/// An empty view yields zero for every channel.
pub fn channel_means<T: ToPrimitive>(view: ArrayView3<'_, T>) -> Vec<f64> {
    let (rows, cols, channels) = view.dim();
    let count = rows * cols;

    (0..channels)
        .map(|channel| {
            if count == 0 {
                return 0.0;
            }
            let sum: f64 = view
                .index_axis(Axis(2), channel)
                .iter()
                .filter_map(ToPrimitive::to_f64)
                .sum();
            sum / count as f64
        })
        .collect()
}

/// The boundary band facing the given side
pub fn edge_band<T>(view: ArrayView3<'_, T>, side: Side, width: usize) -> ArrayView3<'_, T> {
    let (rows, cols, _) = view.dim();
    match side {
        Side::Left => {
            let band = width.min(cols);
            view.slice_move(s![.., ..band, ..])
        }
        Side::Right => {
            let band = width.min(cols);
            view.slice_move(s![.., cols - band.., ..])
        }
        Side::Top => {
            let band = width.min(rows);
            view.slice_move(s![..band, .., ..])
        }
        Side::Bottom => {
            let band = width.min(rows);
            view.slice_move(s![rows - band.., .., ..])
        }
    }
}

/// Per-channel means of the band facing the given side
pub fn band_means<T: ToPrimitive>(view: ArrayView3<'_, T>, side: Side, width: usize) -> Vec<f64> {
    channel_means(edge_band(view, side, width))
}

/// Sum over channels of the absolute difference between two mean vectors
pub fn mean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
