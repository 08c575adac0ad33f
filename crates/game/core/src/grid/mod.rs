//! Grid-shaped world snapshot: entity stacks per cell plus scalar metadata.
//!
//! [`GridSnapshot`] owns every entity in a central table keyed by
//! [`EntityId`]; cells and containment lists reference entities by id, never
//! by value. Content-construction code builds snapshots through
//! [`GridSnapshot::add`] and [`GridSnapshot::link_portals`]; the transforms in
//! [`specialize`] consume them read-only and produce fresh snapshots.
pub mod entity;
pub mod error;
pub mod specialize;

use std::collections::BTreeMap;

pub use entity::{
    Agent, AppearanceName, Collectible, Entity, EntityId, EntityKind, Exit, Immunity, Key, Locked,
    MoveAxis, Moving, Phasing, Portal, Position, Requirable, Speed,
};
pub use error::GridError;
pub use specialize::{classify, classify_kind, specialize};

/// Named movement policy resolved by the external simulation.
///
/// Opaque to the core: snapshots carry it verbatim through every rewrite.
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
pub enum MovePolicy {
    /// Four-way movement on the cardinal axes.
    #[default]
    Cardinal,
}

/// Named win-condition policy resolved by the external simulation.
///
/// Opaque to the core, like [`MovePolicy`].
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
pub enum ObjectivePolicy {
    /// Reach the exit tile.
    #[default]
    Exit,
    /// Collect every required item, then reach the exit.
    CollectAndExit,
}

/// Full world state at one point in time.
///
/// The grid is row-major; each cell holds an ordered entity stack whose order
/// is semantically meaningful (the last-added entity is topmost). Scalar
/// fields below the grid are opaque simulation data that every transform
/// copies verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    width: u32,
    height: u32,
    /// Row-major cell stacks; `cells[y * width + x]`.
    pub(crate) cells: Vec<Vec<EntityId>>,
    /// Central entity table; cells and containment lists index into it.
    pub(crate) entities: BTreeMap<EntityId, Entity>,
    /// Monotonic id allocator, shared across a snapshot lineage so rewrites
    /// never reuse a handle.
    pub(crate) next_entity_id: u32,

    pub turn: u32,
    pub score: i64,
    pub win: bool,
    pub lose: bool,
    pub message: Option<String>,
    pub turn_limit: Option<u32>,
    pub seed: Option<u64>,
    pub movement: MovePolicy,
    pub objective: ObjectivePolicy,
}

impl GridSnapshot {
    /// Creates an empty snapshot of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Vec::new(); (width as usize) * (height as usize)],
            entities: BTreeMap::new(),
            next_entity_id: 0,
            turn: 0,
            score: 0,
            win: false,
            lose: false,
            message: None,
            turn_limit: None,
            seed: None,
            movement: MovePolicy::default(),
            objective: ObjectivePolicy::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.turn_limit = Some(turn_limit);
        self
    }

    pub fn with_movement(mut self, movement: MovePolicy) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_objective(mut self, objective: ObjectivePolicy) -> Self {
        self.objective = objective;
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    fn cell_index(&self, position: Position) -> Result<usize, GridError> {
        if position.x < 0
            || position.y < 0
            || position.x >= self.width as i32
            || position.y >= self.height as i32
        {
            return Err(GridError::PositionOutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        Ok(position.y as usize * self.width as usize + position.x as usize)
    }

    /// Adds an entity to the top of the stack at `position`.
    ///
    /// Allocates and returns the entity's handle.
    ///
    /// # Panics
    ///
    /// Panics if the id space is exhausted.
    pub fn add(&mut self, position: Position, entity: Entity) -> Result<EntityId, GridError> {
        let index = self.cell_index(position)?;
        let id = self.insert_entity(entity);
        self.cells[index].push(id);
        Ok(id)
    }

    /// Adds a batch of entities, preserving iteration order per cell.
    pub fn add_many<I>(&mut self, entries: I) -> Result<Vec<EntityId>, GridError>
    where
        I: IntoIterator<Item = (Position, Entity)>,
    {
        let mut ids = Vec::new();
        for (position, entity) in entries {
            ids.push(self.add(position, entity)?);
        }
        Ok(ids)
    }

    /// Registers a sub-entity (inventory item or active effect) that lives in
    /// the entity table without occupying a grid cell.
    pub fn add_detached(&mut self, entity: Entity) -> EntityId {
        self.insert_entity(entity)
    }

    /// Sets both halves of a two-way portal link.
    pub fn link_portals(&mut self, a: EntityId, b: EntityId) -> Result<(), GridError> {
        for id in [a, b] {
            if !self.entities.contains_key(&id) {
                return Err(GridError::UnknownEntity { id });
            }
        }
        if let Some(entity) = self.entities.get_mut(&a) {
            entity.portal_pair = Some(b);
        }
        if let Some(entity) = self.entities.get_mut(&b) {
            entity.portal_pair = Some(a);
        }
        Ok(())
    }

    /// Returns the entity stack at `position`, bottom to top.
    pub fn stack(&self, position: Position) -> Result<&[EntityId], GridError> {
        let index = self.cell_index(position)?;
        Ok(&self.cells[index])
    }

    /// Looks up an entity by handle.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Mutable lookup by handle.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Iterates over every entity in the table, in id order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(&id, entity)| (id, entity))
    }

    /// Counts entities on the grid carrying the agent component.
    ///
    /// Only cell stacks are consulted; detached or nested entities do not
    /// count toward the boundary precondition checked by
    /// [`step`](crate::sim::step).
    pub fn agent_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter_map(|id| self.entities.get(id))
            .filter(|entity| entity.agent.is_some())
            .count()
    }

    pub(crate) fn insert_entity(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self
            .next_entity_id
            .checked_add(1)
            .expect("entity id space exhausted");
        self.entities.insert(id, entity);
        id
    }

    /// Copies scalar fields, the entity table, and the allocator into a new
    /// snapshot with empty cell stacks. Rewriter scaffolding.
    pub(crate) fn shell(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![Vec::new(); (self.width as usize) * (self.height as usize)],
            entities: self.entities.clone(),
            next_entity_id: self.next_entity_id,
            turn: self.turn,
            score: self.score,
            win: self.win,
            lose: self.lose,
            message: self.message.clone(),
            turn_limit: self.turn_limit,
            seed: self.seed,
            movement: self.movement,
            objective: self.objective,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_out_of_bounds_positions() {
        let mut snapshot = GridSnapshot::new(3, 2);
        let err = snapshot.add(Position::new(3, 0), Entity::new()).unwrap_err();
        assert_eq!(
            err,
            GridError::PositionOutOfBounds {
                position: Position::new(3, 0),
                width: 3,
                height: 2,
            }
        );
        assert!(snapshot.add(Position::new(0, -1), Entity::new()).is_err());
    }

    #[test]
    fn add_preserves_stack_order() {
        let mut snapshot = GridSnapshot::new(2, 2);
        let pos = Position::new(1, 1);
        let floor = snapshot
            .add(pos, Entity::new().with_appearance(AppearanceName::Floor))
            .unwrap();
        let coin = snapshot
            .add(pos, Entity::new().with_appearance(AppearanceName::Coin))
            .unwrap();
        assert_eq!(snapshot.stack(pos).unwrap(), &[floor, coin]);
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut snapshot = GridSnapshot::new(1, 1);
        let a = snapshot.add(Position::ORIGIN, Entity::new()).unwrap();
        let b = snapshot.add(Position::ORIGIN, Entity::new()).unwrap();
        let c = snapshot.add_detached(Entity::new());
        assert!(a < b && b < c);
    }

    #[test]
    fn link_portals_sets_both_directions() {
        let mut snapshot = GridSnapshot::new(2, 1);
        let a = snapshot
            .add(Position::new(0, 0), Entity::new().with_portal())
            .unwrap();
        let b = snapshot
            .add(Position::new(1, 0), Entity::new().with_portal())
            .unwrap();
        snapshot.link_portals(a, b).unwrap();
        assert_eq!(snapshot.entity(a).unwrap().portal_pair, Some(b));
        assert_eq!(snapshot.entity(b).unwrap().portal_pair, Some(a));
    }

    #[test]
    fn link_portals_rejects_unknown_entities() {
        let mut snapshot = GridSnapshot::new(1, 1);
        let a = snapshot.add(Position::ORIGIN, Entity::new()).unwrap();
        let missing = EntityId(999);
        assert_eq!(
            snapshot.link_portals(a, missing),
            Err(GridError::UnknownEntity { id: missing })
        );
    }

    #[test]
    fn agent_count_only_sees_grid_entities() {
        let mut snapshot = GridSnapshot::new(2, 1);
        snapshot
            .add(
                Position::new(0, 0),
                Entity::new().with_agent(Agent { health: 5 }),
            )
            .unwrap();
        snapshot.add_detached(Entity::new().with_agent(Agent { health: 5 }));
        assert_eq!(snapshot.agent_count(), 1);
    }
}
