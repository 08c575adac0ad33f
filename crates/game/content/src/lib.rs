//! Static game content: tunable constants, entity factories, and the fixed
//! intro level layouts.
//!
//! Everything here is content construction over `adventure-core`'s snapshot
//! API: placing generic entities at coordinates, no algorithmic generation.
//! The snapshot rewriter resolves the placed entities to their concrete kinds
//! whenever a level is observed or stepped.
pub mod constants;
pub mod entities;
pub mod levels;

pub use entities::{
    Facing, agent, coin, exit, floor, gem, key, lava, locked_door, moving_box, phasing_power_up,
    portal, pushable_box, robot, shield_power_up, speed_power_up, unlocked_door, wall,
};
