//! Entity representation: optional components plus an optional resolved kind.
//!
//! A freshly constructed [`Entity`] is *generic*: it carries whatever
//! components content code attached and `kind == None`. The classifier in
//! [`specialize`](super::specialize) resolves it to exactly one
//! [`EntityKind`]; an entity whose kind is already set passes through the
//! classifier unchanged.

use std::fmt;

/// Unique identifier for any entity tracked in a snapshot.
///
/// Handles are allocated monotonically by [`GridSnapshot`](super::GridSnapshot)
/// and never reused within a snapshot lineage, so a handle observed before a
/// rewrite never aliases an entity created by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// The closed set of concrete entity kinds an entity can resolve to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityKind {
    /// The controllable player character.
    Agent,
    /// Walkable background tile.
    Floor,
    /// Impassable background tile.
    Wall,
    /// Level goal tile.
    Exit,
    /// Optional score pickup.
    Coin,
    /// Required collectible.
    Gem,
    /// Opens the matching locked door.
    Key,
    /// Door that blocks passage until unlocked.
    LockedDoor,
    /// Door that no longer blocks passage.
    UnlockedDoor,
    /// One end of a two-way teleport link.
    Portal,
    /// Pushable obstacle.
    Box,
    /// Obstacle that patrols on its own.
    MovingBox,
    /// Patrolling enemy.
    Robot,
    /// Hazard tile that damages on contact.
    Lava,
    /// Temporary movement-speed boost.
    SpeedPowerUp,
    /// Absorbs a number of hits.
    ShieldPowerUp,
    /// Temporary pass-through-obstacles effect.
    PhasingPowerUp,
}

/// Rendering/classification hint attached to an entity.
///
/// Appearance is weaker evidence than component presence: several kinds share
/// one name (`door` covers locked and unlocked doors, `box` covers static and
/// moving boxes), so the classifier consults it only after the authoritative
/// component checks.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AppearanceName {
    Human,
    Floor,
    Wall,
    Exit,
    Door,
    Key,
    Coin,
    Gem,
    Core,
    Box,
    Lava,
    Monster,
    Robot,
    Portal,
    Boots,
    Shield,
    Ghost,
}

/// Marks an entity as the player-controlled agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub health: u32,
}

/// Marks an entity as the level goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exit;

/// Blocks passage until opened with the matching key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locked {
    pub key_id: String,
}

/// Opens the locked door carrying the same id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    pub key_id: String,
}

/// Marks one end of a teleport link; the mate is tracked via
/// [`Entity::portal_pair`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portal;

/// Can be picked up by the agent for a score reward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collectible {
    pub reward: i64,
}

/// Movement-speed multiplier granted while the effect lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speed {
    pub multiplier: u32,
    /// Remaining duration in turns.
    pub duration: u32,
}

/// Absorbs incoming hits while usages remain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Immunity {
    pub usages: u32,
}

/// Lets the bearer pass through obstacles while the effect lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phasing {
    /// Remaining duration in turns.
    pub duration: u32,
}

/// Marks a collectible as required by the level objective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Requirable;

/// Axis along which a self-moving entity patrols.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveAxis {
    Horizontal,
    Vertical,
}

/// Autonomous patrol movement along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moving {
    pub axis: MoveAxis,
    /// +1 or -1 along the axis.
    pub direction: i32,
    /// Tiles advanced per turn.
    pub speed: u32,
    /// Whether the entity reverses direction at obstacles.
    pub bounce: bool,
}

/// A world object described by optional components.
///
/// Every component is independent: absence means "not applicable", presence
/// carries the component's payload. `kind` is `None` until the classifier has
/// resolved the entity; an unclassifiable entity keeps `None` and is carried
/// through unchanged rather than rejected.
///
/// `inventory` and `status` hold ids of owned sub-entities (carried items and
/// active effects) living in the same snapshot's entity table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub kind: Option<EntityKind>,
    pub appearance: Option<AppearanceName>,

    pub agent: Option<Agent>,
    pub exit: Option<Exit>,
    pub locked: Option<Locked>,
    pub key: Option<Key>,
    pub portal: Option<Portal>,
    pub collectible: Option<Collectible>,
    pub speed: Option<Speed>,
    pub immunity: Option<Immunity>,
    pub phasing: Option<Phasing>,
    pub requirable: Option<Requirable>,
    pub moving: Option<Moving>,

    /// Entity this one is currently pathing toward.
    pub pathfind_target: Option<EntityId>,
    /// The other end of a two-way portal link.
    pub portal_pair: Option<EntityId>,

    /// Carried sub-entities, in pickup order.
    pub inventory: Vec<EntityId>,
    /// Active-effect sub-entities, in application order.
    pub status: Vec<EntityId>,
}

impl Entity {
    /// Creates an empty generic entity (no components, no kind).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the classifier has assigned a concrete kind.
    #[inline]
    pub fn is_specialized(&self) -> bool {
        self.kind.is_some()
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_appearance(mut self, appearance: AppearanceName) -> Self {
        self.appearance = Some(appearance);
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agent = Some(agent);
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = Some(Exit);
        self
    }

    pub fn with_locked(mut self, locked: Locked) -> Self {
        self.locked = Some(locked);
        self
    }

    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_portal(mut self) -> Self {
        self.portal = Some(Portal);
        self
    }

    pub fn with_collectible(mut self, collectible: Collectible) -> Self {
        self.collectible = Some(collectible);
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_immunity(mut self, immunity: Immunity) -> Self {
        self.immunity = Some(immunity);
        self
    }

    pub fn with_phasing(mut self, phasing: Phasing) -> Self {
        self.phasing = Some(phasing);
        self
    }

    pub fn with_requirable(mut self) -> Self {
        self.requirable = Some(Requirable);
        self
    }

    pub fn with_moving(mut self, moving: Moving) -> Self {
        self.moving = Some(moving);
        self
    }

    pub fn with_pathfind_target(mut self, target: EntityId) -> Self {
        self.pathfind_target = Some(target);
        self
    }

    pub fn with_portal_pair(mut self, mate: EntityId) -> Self {
        self.portal_pair = Some(mate);
        self
    }
}
