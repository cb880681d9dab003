//! Cost functions scoring a candidate patch against its prospective neighbors
//!
//! Lower cost means a better fit. Absent neighbors contribute nothing; when
//! every neighbor is absent there is nothing to compare against and the cost
//! is `None`.

use num_traits::ToPrimitive;
use std::fmt;

use crate::io::configuration::DEFAULT_BAND_WIDTH;
use crate::spatial::canvas::Neighbors;
use crate::tiles::Patch;
use crate::tiles::bands::{band_means, channel_means, mean_distance};

/// Closed set of neighbor-cost strategies, chosen once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Compare whole-patch channel means; the best single neighbor wins
    MeanColor,
    /// Compare facing boundary bands; costs add up across all neighbors
    EdgeBand {
        /// Band thickness in pixels
        band_width: usize,
    },
}

impl Default for Matcher {
    fn default() -> Self {
        Self::EdgeBand {
            band_width: DEFAULT_BAND_WIDTH,
        }
    }
}

impl Matcher {
    /// Score a patch against the neighbor map of a candidate position
    ///
    /// Returns `None` when no neighbor is present.
    pub fn cost<T>(&self, patch: &Patch<T>, neighbors: &Neighbors<'_, Patch<T>>) -> Option<f64>
    where
        T: Clone + ToPrimitive,
    {
        match *self {
            Self::MeanColor => mean_color_cost(patch, neighbors),
            Self::EdgeBand { band_width } => edge_band_cost(patch, neighbors, band_width),
        }
    }

    /// Short identifier used on the command line
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MeanColor => "mean",
            Self::EdgeBand { .. } => "edge",
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MeanColor => f.write_str("mean-color"),
            Self::EdgeBand { band_width } => write!(f, "edge-band({band_width}px)"),
        }
    }
}

// Whole-patch means ignore orientation, so the raw content is enough
fn mean_color_cost<T>(patch: &Patch<T>, neighbors: &Neighbors<'_, Patch<T>>) -> Option<f64>
where
    T: Clone + ToPrimitive,
{
    let own = channel_means(patch.content().view());

    neighbors
        .present()
        .map(|(_, neighbor)| mean_distance(&own, &channel_means(neighbor.content().view())))
        .min_by(f64::total_cmp)
}

fn edge_band_cost<T>(
    patch: &Patch<T>,
    neighbors: &Neighbors<'_, Patch<T>>,
    band_width: usize,
) -> Option<f64>
where
    T: Clone + ToPrimitive,
{
    let own = patch.data();
    let mut total = None;

    for (side, neighbor) in neighbors.present() {
        let theirs = neighbor.data();
        // Our band on `side` touches their band on the opposite side
        let own_band = band_means(own.view(), side, band_width);
        let their_band = band_means(theirs.view(), side.opposite(), band_width);
        total = Some(total.unwrap_or(0.0) + mean_distance(&own_band, &their_band));
    }

    total
}
