//! Action vocabulary accepted by the external simulation.
//!
//! The core never interprets these beyond passing them to
//! [`Simulation::advance`](crate::sim::Simulation::advance); legality and
//! effects are decided entirely by the backend.

/// One agent action per turn.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Action {
    /// Move one tile up.
    Up,
    /// Move one tile down.
    Down,
    /// Move one tile left.
    Left,
    /// Move one tile right.
    Right,
    /// Use a carried key on an adjacent locked door.
    UseKey,
    /// Pick up whatever sits on the agent's tile.
    PickUp,
    /// Do nothing this turn.
    #[default]
    Wait,
}
