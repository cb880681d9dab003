/// Neighbor-cost strategies for candidate placements
pub mod matcher;

pub use matcher::Matcher;
