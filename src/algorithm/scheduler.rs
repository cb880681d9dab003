use num_traits::ToPrimitive;
use std::collections::VecDeque;

use crate::{
    algorithm::selection::{Candidate, select_best},
    io::error::{AssemblyError, Result, computation_error, invalid_parameter},
    matching::Matcher,
    spatial::{Canvas, Position},
    tiles::{Orientation, Patch},
};

/// Record of one committed placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Zero-based index among all placements, seeds included
    pub step: usize,
    /// Where the patch went
    pub position: Position,
    /// Orientation the patch was committed with
    pub orientation: Orientation,
    /// Matcher cost of the winning candidate (`None` for seed placements)
    pub cost: Option<f64>,
}

/// Spread seed positions along the middle row of a grid
///
/// Seeds sit at evenly spaced columns, leaving room for the frontier to grow
/// on both sides. Returns fewer positions than requested when the grid is too
/// narrow to keep them distinct.
pub fn default_seed_positions(width: usize, height: usize, count: usize) -> Vec<Position> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let y = (height / 2) as i32;
    let mut positions: Vec<Position> = (0..count)
        .map(|i| {
            let x = ((i + 1) * width / (count + 1)).min(width - 1);
            Position::new(x as i32, y)
        })
        .collect();
    positions.dedup();
    positions
}

/// Greedy frontier-expansion placement driver
///
/// Each step pops the next queued patch, scores it against every frontier
/// position of the canvas and commits it to the lowest-cost position.
/// Decisions are never revisited.
pub struct Scheduler<T = u8> {
    canvas: Canvas<Patch<T>>,
    queue: VecDeque<Patch<T>>,
    matcher: Matcher,
    search_orientations: bool,
    history: Vec<Placement>,
}

impl<T> Scheduler<T>
where
    T: Clone + ToPrimitive,
{
    /// Create a scheduler over a canvas and an ordered patch sequence
    pub fn new(
        canvas: Canvas<Patch<T>>,
        patches: impl IntoIterator<Item = Patch<T>>,
        matcher: Matcher,
    ) -> Self {
        Self {
            canvas,
            queue: patches.into_iter().collect(),
            matcher,
            search_orientations: false,
            history: Vec::new(),
        }
    }

    /// Also try all four orientations of each patch at every candidate position
    #[must_use]
    pub fn with_orientation_search(mut self, enabled: bool) -> Self {
        self.search_orientations = enabled;
        self
    }

    /// Place the next queued patch at a fixed position to bootstrap the frontier
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The position is outside the canvas or already filled
    /// - The queue is empty
    pub fn seed(&mut self, position: Position) -> Result<Placement> {
        self.canvas.ensure_vacant(position)?;
        let patch = self.queue.pop_front().ok_or(AssemblyError::QueueEmpty {
            step: self.history.len(),
        })?;
        let orientation = patch.orientation();
        self.canvas.insert(patch, position)?;
        Ok(self.record(position, orientation, None))
    }

    /// Seed several positions in order
    ///
    /// # Errors
    ///
    /// Stops at and returns the first seeding failure
    pub fn seed_all(&mut self, positions: &[Position]) -> Result<()> {
        for &position in positions {
            self.seed(position)?;
        }
        Ok(())
    }

    /// Score a patch against every frontier position without mutating anything
    ///
    /// Positions whose neighbor map yields no score are omitted. With
    /// orientation search enabled, candidates are produced for the patch's
    /// current orientation first, then each further clockwise turn.
    pub fn evaluate(&self, patch: &Patch<T>) -> Vec<Candidate> {
        let mut candidates = Vec::new();

        if self.search_orientations {
            let mut oriented = patch.clone();
            for orientation in patch.orientation().cycle_from() {
                oriented.set_orientation(orientation);
                self.score_frontier(&oriented, &mut candidates);
            }
        } else {
            self.score_frontier(patch, &mut candidates);
        }

        candidates
    }

    /// Place the next queued patch at its best frontier position
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No patches remain (`QueueEmpty`)
    /// - The frontier is empty while patches remain (`CapacityExceeded`)
    /// - No frontier position could be scored
    pub fn step(&mut self) -> Result<Placement> {
        let step = self.history.len();
        let patch = self
            .queue
            .front()
            .ok_or(AssemblyError::QueueEmpty { step })?;

        if self.canvas.available().is_empty() {
            return Err(AssemblyError::CapacityExceeded {
                step,
                remaining: self.queue.len(),
            });
        }

        let candidates = self.evaluate(patch);
        let best = select_best(&candidates).ok_or_else(|| {
            computation_error("placement scoring", &"no frontier position produced a cost")
        })?;

        self.place(best)
    }

    /// Commit the next queued patch at a scored candidate
    ///
    /// The patch is only taken from the queue once the target is known to be
    /// a vacant frontier position, so a rejected candidate leaves the queue
    /// as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The position is outside the canvas or already filled
    /// - The position is not on the frontier
    /// - The queue is empty
    pub fn place(&mut self, candidate: Candidate) -> Result<Placement> {
        let position = candidate.position;
        self.canvas.ensure_vacant(position)?;
        if !self.canvas.is_available(position) {
            return Err(invalid_parameter(
                "position",
                &position,
                &"placement target must be on the frontier",
            ));
        }

        let mut patch = self.queue.pop_front().ok_or(AssemblyError::QueueEmpty {
            step: self.history.len(),
        })?;
        patch.set_orientation(candidate.orientation);
        self.canvas.insert(patch, position)?;
        Ok(self.record(position, candidate.orientation, Some(candidate.cost)))
    }

    /// Run steps until the queue is empty, returning the number of steps taken
    ///
    /// # Errors
    ///
    /// Propagates the first failing step, typically `CapacityExceeded` when
    /// the canvas runs out of room
    pub fn fill(&mut self) -> Result<usize> {
        let mut steps = 0;
        while !self.queue.is_empty() {
            self.step()?;
            steps += 1;
        }
        Ok(steps)
    }

    /// Patches still waiting to be placed
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Current canvas state
    pub const fn canvas(&self) -> &Canvas<Patch<T>> {
        &self.canvas
    }

    /// Consume the scheduler, keeping the canvas
    pub fn into_canvas(self) -> Canvas<Patch<T>> {
        self.canvas
    }

    /// Every placement so far, seeds included, in commit order
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// The active cost strategy
    pub const fn matcher(&self) -> Matcher {
        self.matcher
    }

    fn score_frontier(&self, patch: &Patch<T>, candidates: &mut Vec<Candidate>) {
        for &position in self.canvas.available() {
            let neighbors = self.canvas.get_neighbors(position);
            if let Some(cost) = self.matcher.cost(patch, &neighbors) {
                candidates.push(Candidate {
                    position,
                    orientation: patch.orientation(),
                    cost,
                });
            }
        }
    }

    fn record(
        &mut self,
        position: Position,
        orientation: Orientation,
        cost: Option<f64>,
    ) -> Placement {
        let placement = Placement {
            step: self.history.len(),
            position,
            orientation,
            cost,
        };
        self.history.push(placement);
        placement
    }
}
