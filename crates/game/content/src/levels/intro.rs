//! The introductory level set: one skill per level, capped by a shared turn
//! limit, ending in a capstone that combines them.

use adventure_core::{GridError, GridSnapshot, ObjectivePolicy, Position};

use crate::constants::DEFAULT_AGENT_HEALTH;
use crate::entities::{
    Facing, agent, coin, exit, floor, gem, key, lava, locked_door, moving_box, phasing_power_up,
    portal, pushable_box, robot, shield_power_up, speed_power_up, wall,
};

pub const TURN_LIMIT: u32 = 50;

fn base_level(width: u32, height: u32, seed: u64, objective: ObjectivePolicy) -> GridSnapshot {
    GridSnapshot::new(width, height)
        .with_seed(seed)
        .with_turn_limit(TURN_LIMIT)
        .with_objective(objective)
}

fn floors(level: &mut GridSnapshot) -> Result<(), GridError> {
    for y in 0..level.height() as i32 {
        for x in 0..level.width() as i32 {
            level.add(Position::new(x, y), floor())?;
        }
    }
    Ok(())
}

fn border(level: &mut GridSnapshot) -> Result<(), GridError> {
    let (w, h) = (level.width() as i32, level.height() as i32);
    for x in 0..w {
        level.add(Position::new(x, 0), wall())?;
        level.add(Position::new(x, h - 1), wall())?;
    }
    for y in 0..h {
        level.add(Position::new(0, y), wall())?;
        level.add(Position::new(w - 1, y), wall())?;
    }
    Ok(())
}

/// Straight corridor with one gap in a dividing wall.
pub fn basic_movement(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (7i32, 5i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    level.add(Position::new(1, h / 2), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    for y in 0..h {
        if y != h / 2 {
            level.add(Position::new(w / 2, y), wall())?;
        }
    }
    Ok(level)
}

/// Two staggered walls force direction changes.
pub fn maze_turns(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (9i32, 7i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    border(&mut level)?;
    for x in 2..w - 2 {
        level.add(Position::new(x, 2), wall())?;
    }
    for x in 2..w - 2 {
        if x != w / 2 {
            level.add(Position::new(x, h - 3), wall())?;
        }
    }
    level.add(Position::new(1, 1), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h - 2), exit())?;
    Ok(level)
}

/// A detour row of coins the agent may skip.
pub fn optional_coin(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (9i32, 7i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    border(&mut level)?;
    level.add(Position::new(1, 2), wall())?;
    level.add(Position::new(3, 3), wall())?;
    for x in 3..w - 2 {
        level.add(Position::new(x, 2), wall())?;
    }
    for x in 2..w - 2 {
        if x != w / 2 {
            level.add(Position::new(x, h - 3), wall())?;
        }
    }
    level.add(Position::new(1, 1), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h - 2), exit())?;
    for x in 1..w - 2 {
        level.add(Position::new(x, h - 2), coin())?;
    }
    Ok(level)
}

/// One required gem behind a gap.
pub fn required_one(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (9i32, 7i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::CollectAndExit);
    floors(&mut level)?;
    border(&mut level)?;
    for y in 1..h - 1 {
        if y != h / 2 {
            level.add(Position::new(w / 2, y), wall())?;
        }
    }
    level.add(Position::new(1, h / 2), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    level.add(Position::new(w / 2 - 1, h / 2 - 1), gem())?;
    Ok(level)
}

/// Two required gems on opposite arms of a cross.
pub fn required_two(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (11i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::CollectAndExit);
    floors(&mut level)?;
    border(&mut level)?;
    let (midx, midy) = (w / 2, h / 2);
    for x in 1..w - 1 {
        for y in 1..h - 1 {
            if x != midx && y != midy {
                level.add(Position::new(x, y), wall())?;
            }
        }
    }
    level.add(Position::new(1, midy), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, midy), exit())?;
    level.add(Position::new(midx, 1), gem())?;
    level.add(Position::new(midx, h - 2), gem())?;
    Ok(level)
}

/// A locked door on the only path, key off to the side.
pub fn key_door(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (11i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    for y in 0..h {
        if y != h / 2 {
            level.add(Position::new(w / 2, y), wall())?;
        }
    }
    level.add(Position::new(1, h / 2), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    level.add(Position::new(2, h / 2 - 1), key())?;
    level.add(Position::new(w / 2, h / 2), locked_door())?;
    Ok(level)
}

/// Lava blocks the direct route; a safe detour exists.
pub fn hazard_detour(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (11i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    level.add(Position::new(1, h / 2), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    level.add(Position::new(w / 2 - 1, h / 2), lava())?;
    for y in 1..h - 1 {
        if y != h / 2 {
            level.add(Position::new(w / 2 - 1, y), wall())?;
        }
    }
    Ok(level)
}

/// A linked portal pair shortcuts around a long wall.
pub fn portal_shortcut(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (11i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    level.add(Position::new(1, h / 2), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    let p1 = level.add(Position::new(2, 1), portal())?;
    let p2 = level.add(Position::new(w - 1, h / 2), portal())?;
    level.link_portals(p1, p2)?;
    for x in 3..w - 3 {
        level.add(Position::new(x, h / 2 - 1), wall())?;
    }
    Ok(level)
}

/// A box must be pushed out of the only gap.
pub fn pushable_box_level(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (11i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    for y in 0..h {
        if y != h / 2 {
            level.add(Position::new(w / 2, y), wall())?;
        }
    }
    level.add(Position::new(1, h / 2), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    level.add(Position::new(w / 2 - 1, h / 2), pushable_box())?;
    Ok(level)
}

/// A patrolling box sweeps across a two-tile gap.
pub fn moving_box_level(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (11i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    for y in 0..h {
        if y != h / 2 && y != h / 2 + 1 {
            level.add(Position::new(w / 2, y), wall())?;
        }
    }
    level.add(Position::new(1, h / 2), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    level.add(Position::new(w / 2, h / 2), moving_box(Facing::Down))?;
    Ok(level)
}

/// Two robots patrol the only crossing.
pub fn enemy_patrol(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (13i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    level.add(Position::new(2, h / 2), agent(1))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    for y in 0..h {
        if y != h / 2 && y != h / 2 + 1 {
            level.add(Position::new(w / 2, y), wall())?;
            level.add(Position::new(w / 2 + 1, y), wall())?;
        }
    }
    level.add(Position::new(w / 2, h / 2), robot(Facing::Down))?;
    level.add(Position::new(w / 2 + 1, h / 2), robot(Facing::Down))?;
    Ok(level)
}

/// A shield power-up lets the agent tank the lava gap.
pub fn power_shield(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (11i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    level.add(Position::new(1, h / 2), agent(2))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    for y in 0..h {
        if y != h / 2 {
            level.add(Position::new(w / 2, y), wall())?;
        }
    }
    level.add(Position::new(2, h / 2 - 3), shield_power_up())?;
    level.add(Position::new(w / 2, h / 2), lava())?;
    Ok(level)
}

/// A phasing power-up lets the agent slip through the locked door.
pub fn power_ghost(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (13i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    level.add(Position::new(1, h / 2), agent(DEFAULT_AGENT_HEALTH))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    for y in 0..h {
        if y != h / 2 {
            level.add(Position::new(w / 2, y), wall())?;
        }
    }
    level.add(Position::new(2, h / 2 - 3), phasing_power_up())?;
    level.add(Position::new(w / 2, h / 2), locked_door())?;
    Ok(level)
}

/// Speed boots to outrun a triple robot patrol.
pub fn power_boots(seed: u64) -> Result<GridSnapshot, GridError> {
    let (w, h) = (13i32, 9i32);
    let mut level = base_level(w as u32, h as u32, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;
    level.add(Position::new(1, h / 2), agent(1))?;
    level.add(Position::new(w - 2, h / 2), exit())?;
    for y in 0..h {
        if y != h / 2 && y != h / 2 + 1 {
            level.add(Position::new(w / 2, y), wall())?;
            level.add(Position::new(w / 2 + 1, y), wall())?;
            level.add(Position::new(w / 2 + 2, y), wall())?;
        }
    }
    level.add(Position::new(w / 2 - 1, h / 2 + 1), speed_power_up())?;
    level.add(Position::new(w / 2, h / 2), robot(Facing::Down))?;
    level.add(Position::new(w / 2 + 1, h / 2), robot(Facing::Down))?;
    level.add(Position::new(w / 2 + 2, h / 2), robot(Facing::Down))?;
    Ok(level)
}

/// Everything at once: maze, gem, key/door, enemy, exit.
pub fn capstone(seed: u64) -> Result<GridSnapshot, GridError> {
    let mut level = base_level(7, 7, seed, ObjectivePolicy::Exit);
    floors(&mut level)?;

    level.add(Position::new(0, 0), agent(DEFAULT_AGENT_HEALTH))?;

    let wall_coords = [
        // Row 0
        (3, 0),
        (5, 0),
        // Row 1
        (1, 1),
        // Row 2
        (1, 2),
        (3, 2),
        (4, 2),
        (6, 2),
        // Row 3
        (0, 3),
        (3, 3),
        (5, 3),
        // Row 4
        (1, 4),
        // Row 5
        (3, 5),
        (5, 5),
        (6, 5),
        // Row 6
        (1, 6),
        (3, 6),
    ];
    level.add_many(
        wall_coords
            .into_iter()
            .map(|(x, y)| (Position::new(x, y), wall())),
    )?;

    level.add(Position::new(6, 3), gem())?;
    level.add(Position::new(0, 4), key())?;
    level.add(Position::new(3, 4), locked_door())?;

    level.add(Position::new(2, 6), robot(Facing::Up))?;

    level.add(Position::new(6, 6), exit())?;

    Ok(level)
}

#[cfg(test)]
mod tests {
    use adventure_core::{EntityKind, specialize};

    use super::*;

    fn top_kind(snapshot: &GridSnapshot, x: i32, y: i32) -> Option<EntityKind> {
        let stack = snapshot.stack(Position::new(x, y)).unwrap();
        stack
            .last()
            .and_then(|&id| snapshot.entity(id))
            .and_then(|entity| entity.kind)
    }

    #[test]
    fn every_intro_level_builds_with_one_agent() {
        let levels = [
            basic_movement(100).unwrap(),
            maze_turns(101).unwrap(),
            optional_coin(102).unwrap(),
            required_one(103).unwrap(),
            required_two(104).unwrap(),
            key_door(105).unwrap(),
            hazard_detour(106).unwrap(),
            portal_shortcut(107).unwrap(),
            pushable_box_level(108).unwrap(),
            moving_box_level(108).unwrap(),
            enemy_patrol(109).unwrap(),
            power_shield(110).unwrap(),
            power_ghost(111).unwrap(),
            power_boots(112).unwrap(),
            capstone(113).unwrap(),
        ];
        for level in &levels {
            assert_eq!(level.agent_count(), 1);
            assert_eq!(level.turn_limit, Some(TURN_LIMIT));
        }
    }

    #[test]
    fn capstone_specializes_to_the_expected_layout() {
        let level = specialize(&capstone(113).unwrap());
        assert_eq!(level.width(), 7);
        assert_eq!(level.height(), 7);
        assert_eq!(top_kind(&level, 0, 0), Some(EntityKind::Agent));
        assert_eq!(top_kind(&level, 3, 0), Some(EntityKind::Wall));
        assert_eq!(top_kind(&level, 6, 3), Some(EntityKind::Gem));
        assert_eq!(top_kind(&level, 0, 4), Some(EntityKind::Key));
        assert_eq!(top_kind(&level, 3, 4), Some(EntityKind::LockedDoor));
        assert_eq!(top_kind(&level, 2, 6), Some(EntityKind::Robot));
        assert_eq!(top_kind(&level, 6, 6), Some(EntityKind::Exit));
        // Untouched cells keep their floor.
        assert_eq!(top_kind(&level, 2, 1), Some(EntityKind::Floor));
    }

    #[test]
    fn portal_shortcut_portals_survive_specialization_paired() {
        let level = specialize(&portal_shortcut(107).unwrap());
        let (w, h) = (level.width() as i32, level.height() as i32);
        let p1 = *level.stack(Position::new(2, 1)).unwrap().last().unwrap();
        let p2 = *level
            .stack(Position::new(w - 1, h / 2))
            .unwrap()
            .last()
            .unwrap();
        assert_eq!(level.entity(p1).unwrap().kind, Some(EntityKind::Portal));
        assert_eq!(level.entity(p1).unwrap().portal_pair, Some(p2));
        assert_eq!(level.entity(p2).unwrap().portal_pair, Some(p1));
    }

    #[test]
    fn objectives_match_the_level_intent() {
        assert_eq!(
            basic_movement(100).unwrap().objective,
            ObjectivePolicy::Exit
        );
        assert_eq!(
            required_two(104).unwrap().objective,
            ObjectivePolicy::CollectAndExit
        );
    }
}
