//! Tunable content values shared by the entity factories and level builders.

use adventure_core::MoveAxis;

use crate::entities::Facing;

// Default settings
pub const DEFAULT_AGENT_HEALTH: u32 = 5;
pub const DEFAULT_FACING: Facing = Facing::Down;

// Entity movement settings
pub const ENTITY_MOVE_SPEED: u32 = 1;
pub const ENTITY_MOVE_DIRECTIONS: [i32; 2] = [1, -1];
/// Either horizontal or vertical patrols.
pub const ENTITY_MOVE_AXES: [MoveAxis; 2] = [MoveAxis::Vertical, MoveAxis::Horizontal];
pub const ENTITY_MOVE_BOUNCE: bool = true;

// Reward and cost values
pub const COIN_REWARD: i64 = 5;
pub const FLOOR_COST: u32 = 3;

// Damage values
pub const HAZARD_DAMAGE: u32 = 2;
pub const ENEMY_DAMAGE: u32 = 1;

// Portal and key/door settings
pub const NUM_PORTAL_PAIRS: usize = 1;
pub const KEY_DOOR_ID: &str = "A";

// Power-up configurations
pub const SPEED_POWERUP_MULTIPLIER: u32 = 2;
/// In turns.
pub const SPEED_POWERUP_DURATION: u32 = 5;
/// In turns.
pub const PHASING_POWERUP_DURATION: u32 = 5;
/// Number of hits absorbed.
pub const SHIELD_POWERUP_USAGE: u32 = 5;
