//! A playable session: one backend, one current snapshot.

use adventure_core::{Action, GridSnapshot, Simulation, StepError, specialize, step};

/// Owns a simulation backend and the latest specialized snapshot.
///
/// Both the initial snapshot and every stepped snapshot go through
/// [`specialize`], so consumers never observe generic entities or stale
/// portal pairings from the backend round-trip.
pub struct Session<S: Simulation> {
    sim: S,
    snapshot: GridSnapshot,
}

impl<S: Simulation> Session<S> {
    /// Starts a session on an initial (possibly generic) snapshot.
    pub fn new(sim: S, initial: GridSnapshot) -> Self {
        let snapshot = specialize(&initial);
        tracing::debug!(
            width = snapshot.width(),
            height = snapshot.height(),
            turn = snapshot.turn,
            "session started"
        );
        Self { sim, snapshot }
    }

    /// The latest specialized snapshot.
    pub fn snapshot(&self) -> &GridSnapshot {
        &self.snapshot
    }

    /// Advances the session by one action.
    ///
    /// On failure the current snapshot is left untouched.
    pub fn apply(&mut self, action: Action) -> Result<&GridSnapshot, StepError<S::Error>> {
        tracing::debug!(%action, turn = self.snapshot.turn, "applying action");
        let next = step(&self.sim, &self.snapshot, action)?;

        if next.win && !self.snapshot.win {
            tracing::info!(turn = next.turn, score = next.score, "objective reached");
        }
        if next.lose && !self.snapshot.lose {
            tracing::warn!(turn = next.turn, score = next.score, "run lost");
        }

        self.snapshot = next;
        Ok(&self.snapshot)
    }

    /// Tears the session down, handing back the backend and final snapshot.
    pub fn into_parts(self) -> (S, GridSnapshot) {
        (self.sim, self.snapshot)
    }
}
