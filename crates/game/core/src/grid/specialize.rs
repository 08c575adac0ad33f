//! Entity classification and snapshot rewriting.
//!
//! Two transforms live here:
//!
//! - [`classify`]: a pure, total function resolving one generic entity to
//!   exactly one [`EntityKind`], by a fixed priority order over component
//!   presence with the appearance name as a tie-breaking hint.
//! - [`specialize`]: drives the classifier over a whole snapshot and then
//!   repairs cross-entity references, so that entities that pointed at each
//!   other before the rewrite point at the correct replacements afterwards.
//!
//! `specialize` runs in two passes because reference repair needs the
//! complete old-id → new-id table before any rewriting is safe: a portal's
//! mate may appear later in traversal order than the portal itself.

use std::collections::BTreeMap;

use super::entity::{AppearanceName, Entity, EntityId, EntityKind};
use super::GridSnapshot;

/// Resolves the kind a generic entity classifies as, or `None` when no rule
/// matches.
///
/// First match wins. Component checks run before appearance checks because
/// components are authoritative game semantics while the appearance name is a
/// rendering hint shared across kinds. Within collectibles, power-up effects
/// outrank the gem/coin split so that e.g. a required speed boost still
/// resolves as a speed power-up.
pub fn classify_kind(entity: &Entity) -> Option<EntityKind> {
    if let Some(kind) = entity.kind {
        return Some(kind);
    }
    if entity.agent.is_some() {
        return Some(EntityKind::Agent);
    }
    if entity.exit.is_some() {
        return Some(EntityKind::Exit);
    }
    if entity.appearance == Some(AppearanceName::Door) {
        return Some(if entity.locked.is_some() {
            EntityKind::LockedDoor
        } else {
            EntityKind::UnlockedDoor
        });
    }
    if entity.key.is_some() {
        return Some(EntityKind::Key);
    }
    if entity.portal.is_some() {
        return Some(EntityKind::Portal);
    }
    if entity.collectible.is_some() {
        if entity.speed.is_some() {
            return Some(EntityKind::SpeedPowerUp);
        }
        if entity.immunity.is_some() {
            return Some(EntityKind::ShieldPowerUp);
        }
        if entity.phasing.is_some() {
            return Some(EntityKind::PhasingPowerUp);
        }
        if entity.appearance == Some(AppearanceName::Core) || entity.requirable.is_some() {
            return Some(EntityKind::Gem);
        }
        return Some(EntityKind::Coin);
    }
    if entity.appearance == Some(AppearanceName::Box) {
        return Some(if entity.moving.is_some() {
            EntityKind::MovingBox
        } else {
            EntityKind::Box
        });
    }
    match entity.appearance {
        Some(AppearanceName::Lava) => Some(EntityKind::Lava),
        Some(AppearanceName::Monster) | Some(AppearanceName::Robot) => Some(EntityKind::Robot),
        Some(AppearanceName::Floor) => Some(EntityKind::Floor),
        Some(AppearanceName::Wall) => Some(EntityKind::Wall),
        _ => None,
    }
}

/// Returns a specialized copy of `entity`.
///
/// Every field is carried over unchanged; only `kind` is filled in. An
/// already specialized entity comes back as an identical copy, and an entity
/// matching no rule comes back unchanged with `kind` still `None` — never an
/// error.
pub fn classify(entity: &Entity) -> Entity {
    let mut specialized = entity.clone();
    specialized.kind = classify_kind(entity);
    specialized
}

/// Rewrites a snapshot so that every entity carries its resolved kind and all
/// cross-entity references point at the specialized replacements.
///
/// Pass 1 walks cells in row-major order, classifying each stack entity under
/// a freshly allocated id and recursing exactly one level into inventory and
/// status lists. Entities nested deeper than one level are carried into the
/// output verbatim under their original ids, still generic; references to
/// entities never visited by the traversal are likewise left pointing at the
/// carried originals rather than cleared. Pass 2 rewrites `pathfind_target`
/// and `portal_pair` through the old→new table and repairs one-sided portal
/// links bidirectionally, filling only absent mate links and never
/// overwriting an existing one.
///
/// The input is read-only; the result is a fresh snapshot with identical
/// dimensions, per-cell stack order, and scalar fields.
pub fn specialize(snapshot: &GridSnapshot) -> GridSnapshot {
    let mut out = snapshot.shell();
    let mut remap: BTreeMap<EntityId, EntityId> = BTreeMap::new();
    // New ids in creation order; pass 2 visits them in this order.
    let mut visited: Vec<EntityId> = Vec::new();

    // Pass 1: classify and build the identity map.
    for y in 0..snapshot.height() as i32 {
        for x in 0..snapshot.width() as i32 {
            let index = y as usize * snapshot.width() as usize + x as usize;
            let stack: Vec<EntityId> = snapshot.cells[index]
                .iter()
                .map(|&old| specialize_stack_entry(snapshot, &mut out, &mut remap, &mut visited, old))
                .collect();
            out.cells[index] = stack;
        }
    }

    // Pass 2: rewrite references through the identity map.
    for &id in &visited {
        relink(&mut out, &remap, id);
    }

    // Specialized replacements supersede their originals; anything the
    // traversal never reached stays in the table untouched.
    for old in remap.keys() {
        out.entities.remove(old);
    }

    out
}

/// Classifies one cell-stack entity and one level of its containment lists.
fn specialize_stack_entry(
    input: &GridSnapshot,
    out: &mut GridSnapshot,
    remap: &mut BTreeMap<EntityId, EntityId>,
    visited: &mut Vec<EntityId>,
    old: EntityId,
) -> EntityId {
    if let Some(&mapped) = remap.get(&old) {
        return mapped;
    }
    let Some(original) = input.entities.get(&old) else {
        // Foreign id: keep it so the caller can still observe the reference.
        return old;
    };
    let mut specialized = classify(original);
    specialized.inventory = original
        .inventory
        .iter()
        .map(|&member| specialize_member(input, out, remap, visited, member))
        .collect();
    specialized.status = original
        .status
        .iter()
        .map(|&member| specialize_member(input, out, remap, visited, member))
        .collect();
    record(out, remap, visited, old, specialized)
}

/// Classifies a nested inventory/status member.
///
/// Members of *this* entity's own lists are not recursed into; the rewrite is
/// bounded at one containment level, and deeper entities ride along
/// unchanged.
fn specialize_member(
    input: &GridSnapshot,
    out: &mut GridSnapshot,
    remap: &mut BTreeMap<EntityId, EntityId>,
    visited: &mut Vec<EntityId>,
    old: EntityId,
) -> EntityId {
    if let Some(&mapped) = remap.get(&old) {
        return mapped;
    }
    let Some(original) = input.entities.get(&old) else {
        return old;
    };
    let specialized = classify(original);
    record(out, remap, visited, old, specialized)
}

fn record(
    out: &mut GridSnapshot,
    remap: &mut BTreeMap<EntityId, EntityId>,
    visited: &mut Vec<EntityId>,
    old: EntityId,
    specialized: Entity,
) -> EntityId {
    let new_id = out.insert_entity(specialized);
    remap.insert(old, new_id);
    visited.push(new_id);
    new_id
}

/// Rewrites one entity's references through the identity map.
fn relink(out: &mut GridSnapshot, remap: &BTreeMap<EntityId, EntityId>, id: EntityId) {
    let (target, mate) = match out.entities.get(&id) {
        Some(entity) => (entity.pathfind_target, entity.portal_pair),
        None => return,
    };

    if let Some(old_target) = target {
        if let Some(&new_target) = remap.get(&old_target) {
            if let Some(entity) = out.entities.get_mut(&id) {
                entity.pathfind_target = Some(new_target);
            }
        }
        // Unmapped target: leave the stale reference in place.
    }

    if let Some(old_mate) = mate {
        if let Some(&new_mate) = remap.get(&old_mate) {
            if let Some(entity) = out.entities.get_mut(&id) {
                entity.portal_pair = Some(new_mate);
            }
            // Repair the reverse link, but only if the mate has none; an
            // existing link is never overwritten, even a stale one.
            if let Some(mate_entity) = out.entities.get_mut(&new_mate) {
                if mate_entity.portal_pair.is_none() {
                    mate_entity.portal_pair = Some(id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::entity::{Agent, Collectible, Immunity, Locked, MoveAxis, Moving, Speed};

    fn agent() -> Entity {
        Entity::new()
            .with_appearance(AppearanceName::Human)
            .with_agent(Agent { health: 5 })
    }

    #[test]
    fn agent_component_outranks_exit() {
        let entity = agent().with_exit();
        assert_eq!(classify_kind(&entity), Some(EntityKind::Agent));
    }

    #[test]
    fn door_appearance_splits_on_locked() {
        let locked = Entity::new()
            .with_appearance(AppearanceName::Door)
            .with_locked(Locked { key_id: "A".into() });
        let unlocked = Entity::new().with_appearance(AppearanceName::Door);
        assert_eq!(classify_kind(&locked), Some(EntityKind::LockedDoor));
        assert_eq!(classify_kind(&unlocked), Some(EntityKind::UnlockedDoor));
    }

    #[test]
    fn power_up_effects_outrank_gem_fallback() {
        let entity = Entity::new()
            .with_collectible(Collectible { reward: 0 })
            .with_speed(Speed {
                multiplier: 2,
                duration: 5,
            })
            .with_requirable();
        assert_eq!(classify_kind(&entity), Some(EntityKind::SpeedPowerUp));

        let shield = Entity::new()
            .with_collectible(Collectible { reward: 0 })
            .with_immunity(Immunity { usages: 5 });
        assert_eq!(classify_kind(&shield), Some(EntityKind::ShieldPowerUp));
    }

    #[test]
    fn requirable_or_core_appearance_makes_a_gem() {
        let by_flag = Entity::new()
            .with_collectible(Collectible { reward: 0 })
            .with_requirable();
        let by_appearance = Entity::new()
            .with_appearance(AppearanceName::Core)
            .with_collectible(Collectible { reward: 0 });
        let plain = Entity::new()
            .with_appearance(AppearanceName::Coin)
            .with_collectible(Collectible { reward: 5 });
        assert_eq!(classify_kind(&by_flag), Some(EntityKind::Gem));
        assert_eq!(classify_kind(&by_appearance), Some(EntityKind::Gem));
        assert_eq!(classify_kind(&plain), Some(EntityKind::Coin));
    }

    #[test]
    fn box_appearance_splits_on_moving() {
        let moving = Entity::new()
            .with_appearance(AppearanceName::Box)
            .with_moving(Moving {
                axis: MoveAxis::Horizontal,
                direction: 1,
                speed: 1,
                bounce: true,
            });
        let still = Entity::new().with_appearance(AppearanceName::Box);
        assert_eq!(classify_kind(&moving), Some(EntityKind::MovingBox));
        assert_eq!(classify_kind(&still), Some(EntityKind::Box));
    }

    #[test]
    fn monster_and_robot_appearances_both_resolve_to_robot() {
        for appearance in [AppearanceName::Monster, AppearanceName::Robot] {
            let entity = Entity::new().with_appearance(appearance);
            assert_eq!(classify_kind(&entity), Some(EntityKind::Robot));
        }
    }

    #[test]
    fn background_appearances_resolve_last() {
        assert_eq!(
            classify_kind(&Entity::new().with_appearance(AppearanceName::Floor)),
            Some(EntityKind::Floor)
        );
        assert_eq!(
            classify_kind(&Entity::new().with_appearance(AppearanceName::Wall)),
            Some(EntityKind::Wall)
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let first = classify(&agent());
        let second = classify(&first);
        assert_eq!(first, second);
    }

    #[test]
    fn unmatched_entity_passes_through_unchanged() {
        let entity = Entity::new();
        let classified = classify(&entity);
        assert_eq!(classified, entity);
        assert!(!classified.is_specialized());
    }

    #[test]
    fn classify_copies_every_field() {
        let entity = agent()
            .with_pathfind_target(EntityId(7))
            .with_portal_pair(EntityId(9));
        let classified = classify(&entity);
        assert_eq!(classified.kind, Some(EntityKind::Agent));
        assert_eq!(classified.appearance, entity.appearance);
        assert_eq!(classified.agent, entity.agent);
        assert_eq!(classified.pathfind_target, Some(EntityId(7)));
        assert_eq!(classified.portal_pair, Some(EntityId(9)));
    }

    #[test]
    fn pre_specialized_kind_wins_over_components() {
        let entity = agent().with_kind(EntityKind::Wall);
        assert_eq!(classify_kind(&entity), Some(EntityKind::Wall));
    }
}
