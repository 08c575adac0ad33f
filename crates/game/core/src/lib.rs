//! Deterministic snapshot specialization for the grid adventure world.
//!
//! `adventure-core` defines the canonical snapshot representation (a grid of
//! entity stacks described by optional components) and the pure transforms
//! over it: a classifier that resolves every generic entity to exactly one
//! concrete kind, and a two-pass rewriter that relinks cross-entity
//! references after classification. The underlying turn/physics simulation is
//! an external collaborator reached through the [`sim::Simulation`] trait;
//! this crate never mutates state in place and performs no I/O.
pub mod action;
pub mod grid;
pub mod sim;

pub use action::Action;
pub use grid::{
    Agent, AppearanceName, Collectible, Entity, EntityId, EntityKind, Exit, GridError,
    GridSnapshot, Immunity, Key, Locked, MoveAxis, MovePolicy, Moving, ObjectivePolicy, Phasing,
    Portal, Position, Requirable, Speed, classify, classify_kind, specialize,
};
pub use sim::{Simulation, StepError, observe, step};
