//! Factory functions for the generic entities the level builders place.
//!
//! Each factory attaches the components and appearance name that make the
//! classifier resolve the entity to the intended kind; the factories
//! themselves hand out generic entities so levels stay representation-driven.

use adventure_core::{
    Agent, AppearanceName, Collectible, Entity, Immunity, Key, Locked, MoveAxis, Moving, Phasing,
    Speed,
};

use crate::constants::{
    COIN_REWARD, ENTITY_MOVE_BOUNCE, ENTITY_MOVE_SPEED, KEY_DOOR_ID, PHASING_POWERUP_DURATION,
    SHIELD_POWERUP_USAGE, SPEED_POWERUP_DURATION, SPEED_POWERUP_MULTIPLIER,
};

/// Facing of a placed mobile entity, mapped onto a patrol axis/direction.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    fn patrol(self) -> Moving {
        let (axis, direction) = match self {
            Facing::Up => (MoveAxis::Vertical, -1),
            Facing::Down => (MoveAxis::Vertical, 1),
            Facing::Left => (MoveAxis::Horizontal, -1),
            Facing::Right => (MoveAxis::Horizontal, 1),
        };
        Moving {
            axis,
            direction,
            speed: ENTITY_MOVE_SPEED,
            bounce: ENTITY_MOVE_BOUNCE,
        }
    }
}

/// The controllable agent.
pub fn agent(health: u32) -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Human)
        .with_agent(Agent { health })
}

/// Walkable background tile.
pub fn floor() -> Entity {
    Entity::new().with_appearance(AppearanceName::Floor)
}

/// Impassable background tile.
pub fn wall() -> Entity {
    Entity::new().with_appearance(AppearanceName::Wall)
}

/// Level goal.
pub fn exit() -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Exit)
        .with_exit()
}

/// Optional score pickup.
pub fn coin() -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Coin)
        .with_collectible(Collectible {
            reward: COIN_REWARD,
        })
}

/// Required collectible counted by the collect-and-exit objective.
pub fn gem() -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Core)
        .with_collectible(Collectible { reward: 0 })
        .with_requirable()
}

/// Key opening the matching locked door.
pub fn key() -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Key)
        .with_key(Key {
            key_id: KEY_DOOR_ID.to_string(),
        })
}

/// Door that blocks until the matching key is used.
pub fn locked_door() -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Door)
        .with_locked(Locked {
            key_id: KEY_DOOR_ID.to_string(),
        })
}

/// Door that no longer blocks.
pub fn unlocked_door() -> Entity {
    Entity::new().with_appearance(AppearanceName::Door)
}

/// One end of a portal link; pair it with
/// [`GridSnapshot::link_portals`](adventure_core::GridSnapshot::link_portals).
pub fn portal() -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Portal)
        .with_portal()
}

/// Pushable obstacle.
pub fn pushable_box() -> Entity {
    Entity::new().with_appearance(AppearanceName::Box)
}

/// Obstacle that patrols on its own.
pub fn moving_box(facing: Facing) -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Box)
        .with_moving(facing.patrol())
}

/// Patrolling enemy.
pub fn robot(facing: Facing) -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Robot)
        .with_moving(facing.patrol())
}

/// Hazard tile.
pub fn lava() -> Entity {
    Entity::new().with_appearance(AppearanceName::Lava)
}

/// Temporary movement-speed boost.
pub fn speed_power_up() -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Boots)
        .with_collectible(Collectible { reward: 0 })
        .with_speed(Speed {
            multiplier: SPEED_POWERUP_MULTIPLIER,
            duration: SPEED_POWERUP_DURATION,
        })
}

/// Absorbs a number of hits.
pub fn shield_power_up() -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Shield)
        .with_collectible(Collectible { reward: 0 })
        .with_immunity(Immunity {
            usages: SHIELD_POWERUP_USAGE,
        })
}

/// Temporary pass-through-obstacles effect.
pub fn phasing_power_up() -> Entity {
    Entity::new()
        .with_appearance(AppearanceName::Ghost)
        .with_collectible(Collectible { reward: 0 })
        .with_phasing(Phasing {
            duration: PHASING_POWERUP_DURATION,
        })
}

#[cfg(test)]
mod tests {
    use adventure_core::{EntityKind, classify_kind};

    use super::*;

    #[test]
    fn factories_resolve_to_their_intended_kinds() {
        let cases = [
            (agent(5), EntityKind::Agent),
            (floor(), EntityKind::Floor),
            (wall(), EntityKind::Wall),
            (exit(), EntityKind::Exit),
            (coin(), EntityKind::Coin),
            (gem(), EntityKind::Gem),
            (key(), EntityKind::Key),
            (locked_door(), EntityKind::LockedDoor),
            (unlocked_door(), EntityKind::UnlockedDoor),
            (portal(), EntityKind::Portal),
            (pushable_box(), EntityKind::Box),
            (moving_box(Facing::Right), EntityKind::MovingBox),
            (robot(Facing::Down), EntityKind::Robot),
            (lava(), EntityKind::Lava),
            (speed_power_up(), EntityKind::SpeedPowerUp),
            (shield_power_up(), EntityKind::ShieldPowerUp),
            (phasing_power_up(), EntityKind::PhasingPowerUp),
        ];
        for (entity, expected) in cases {
            assert_eq!(classify_kind(&entity), Some(expected));
        }
    }

    #[test]
    fn facing_maps_to_patrol_axis_and_direction() {
        let up = Facing::Up.patrol();
        assert_eq!(up.axis, MoveAxis::Vertical);
        assert_eq!(up.direction, -1);
        let right = Facing::Right.patrol();
        assert_eq!(right.axis, MoveAxis::Horizontal);
        assert_eq!(right.direction, 1);
    }
}
