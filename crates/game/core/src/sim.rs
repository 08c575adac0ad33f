//! Boundary to the external turn simulation.
//!
//! The core does not simulate game rules. Movement, damage, collection, and
//! win/lose detection live in an opaque backend reached through
//! [`Simulation`]; the wrappers here guarantee that every snapshot a caller
//! observes has been through [`specialize`], so externally visible entities
//! always carry their resolved kinds.

use crate::action::Action;
use crate::grid::{GridSnapshot, specialize};

/// Opaque world-state backend supplied by the host.
///
/// Implementations own the native state representation and the rules that
/// advance it; the core only requires a lossless bridge to and from the grid
/// snapshot form.
pub trait Simulation {
    /// Native world-state representation.
    type State;
    /// Backend failure type.
    type Error: std::error::Error;

    /// Projects native state into the grid snapshot form.
    fn to_snapshot(&self, state: &Self::State) -> GridSnapshot;

    /// Rebuilds native state from a snapshot.
    fn from_snapshot(&self, snapshot: &GridSnapshot) -> Result<Self::State, Self::Error>;

    /// Advances the state by one action.
    fn advance(&self, state: Self::State, action: Action) -> Result<Self::State, Self::Error>;
}

/// Errors surfaced by [`step`].
#[derive(Debug, thiserror::Error)]
pub enum StepError<E: std::error::Error> {
    /// The snapshot violated the one-agent boundary contract.
    #[error("snapshot must contain exactly one agent (found {count})")]
    AgentCount {
        /// Number of agent-bearing entities found on the grid.
        count: usize,
    },

    /// The simulation backend rejected the round-trip or the action.
    #[error(transparent)]
    Backend(#[from] E),
}

/// Advances a snapshot by one action through the backend and re-specializes
/// the result.
///
/// Enforces the boundary precondition that the grid holds exactly one agent;
/// a violation is a caller contract error, not something the transforms
/// themselves check.
pub fn step<S: Simulation>(
    sim: &S,
    snapshot: &GridSnapshot,
    action: Action,
) -> Result<GridSnapshot, StepError<S::Error>> {
    let count = snapshot.agent_count();
    if count != 1 {
        return Err(StepError::AgentCount { count });
    }
    let state = sim.from_snapshot(snapshot)?;
    let next = sim.advance(state, action)?;
    Ok(specialize(&sim.to_snapshot(&next)))
}

/// Projects native backend state into a fully specialized snapshot.
pub fn observe<S: Simulation>(sim: &S, state: &S::State) -> GridSnapshot {
    specialize(&sim.to_snapshot(state))
}
