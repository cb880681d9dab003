/// Greedy placement driver and seeding helpers
pub mod scheduler;
/// Candidate ordering and best-placement selection
pub mod selection;
