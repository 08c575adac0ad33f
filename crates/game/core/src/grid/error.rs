//! Grid construction and lookup errors.

use super::{EntityId, Position};

/// Errors raised while building or querying a snapshot grid.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Position is outside the grid bounds.
    #[error("Position {position:?} is out of bounds (grid size: {width}x{height})")]
    PositionOutOfBounds {
        /// The invalid position.
        position: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// No entity with this id exists in the snapshot's entity table.
    #[error("Unknown entity {id}")]
    UnknownEntity {
        /// The unresolved id.
        id: EntityId,
    },
}
