//! Sprite descriptors - static sprite data.
//!
//! A `SpriteDescriptor` is what the level analyzer knows about one sprite
//! type: its name, its broad category, the engine class it was declared
//! with, and the sprites it produces or refers to.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Broad sprite category assigned by the level analyzer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteCategory {
    /// Player-controlled sprite.
    Avatar,
    /// Collectable resource counted by the avatar.
    Resource,
    /// Autonomously moving object (missiles, random movers).
    Movable,
    /// Non-player character with a behavioral subtype.
    Npc,
    /// Sprite that produces other sprites.
    Spawner,
    /// Static sprite (walls, floors, pickups).
    Immovable,
    /// Door, exit or teleport source.
    Portal,
}

impl std::fmt::Display for SpriteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpriteCategory::Avatar => "avatar",
            SpriteCategory::Resource => "resource",
            SpriteCategory::Movable => "movable",
            SpriteCategory::Npc => "npc",
            SpriteCategory::Spawner => "spawner",
            SpriteCategory::Immovable => "immovable",
            SpriteCategory::Portal => "portal",
        };
        f.write_str(name)
    }
}

/// NPC behavior families the generator distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NpcFamily {
    /// Runs away from its owned sprites.
    Fleeing,
    /// Drops or fires its owned sprites.
    Bomber,
    /// Chases its owned sprites.
    Chaser,
    /// Wanders randomly.
    Random,
}

impl NpcFamily {
    /// Classify an engine subtype tag, case-insensitively.
    #[must_use]
    pub fn from_subtype(subtype: &str) -> Option<Self> {
        match subtype.to_ascii_lowercase().as_str() {
            "fleeing" => Some(Self::Fleeing),
            "bomber" | "randombomber" | "bomberrandommissile" | "spreader" => Some(Self::Bomber),
            "chaser" | "alternatechaser" | "randomaltchaser" => Some(Self::Chaser),
            "randomnpc" => Some(Self::Random),
            _ => None,
        }
    }
}

/// Subtype tag marking a teleport source.
pub const TELEPORT_SUBTYPE: &str = "portal";

/// Subtype tag marking a door exit.
pub const DOOR_SUBTYPE: &str = "door";

/// Static sprite description.
///
/// ## Example
///
/// ```
/// use arcade_rulegen::sprites::{SpriteCategory, SpriteDescriptor};
///
/// let avatar = SpriteDescriptor::new("hero", SpriteCategory::Avatar)
///     .with_subtype("ShootAvatar")
///     .with_child("arrow");
///
/// assert!(avatar.owns("arrow"));
/// assert!(avatar.subtype_is("shootavatar"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Unique sprite name.
    pub name: String,

    /// Broad category.
    pub category: SpriteCategory,

    /// Engine class tag (e.g. "Chaser", "Door"). Compared case-insensitively.
    pub subtype: Option<String>,

    /// Names of sprites this one produces or refers to, in declaration order.
    pub children: SmallVec<[String; 4]>,
}

impl SpriteDescriptor {
    /// Create a descriptor with no subtype and no children.
    pub fn new(name: impl Into<String>, category: SpriteCategory) -> Self {
        Self {
            name: name.into(),
            category,
            subtype: None,
            children: SmallVec::new(),
        }
    }

    /// Set the behavioral subtype.
    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Append an owned child name.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several owned child names.
    #[must_use]
    pub fn with_children<S: Into<String>>(mut self, children: impl IntoIterator<Item = S>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Check the subtype tag, ignoring case.
    #[must_use]
    pub fn subtype_is(&self, tag: &str) -> bool {
        self.subtype
            .as_deref()
            .is_some_and(|subtype| subtype.eq_ignore_ascii_case(tag))
    }

    /// NPC behavior family, if the subtype names one.
    #[must_use]
    pub fn npc_family(&self) -> Option<NpcFamily> {
        self.subtype.as_deref().and_then(NpcFamily::from_subtype)
    }

    /// Does this sprite own (produce or refer to) `name`?
    #[must_use]
    pub fn owns(&self, name: &str) -> bool {
        self.children.iter().any(|child| child == name)
    }

    /// Is this a teleport source rather than an exit?
    #[must_use]
    pub fn is_teleport(&self) -> bool {
        self.category == SpriteCategory::Portal && self.subtype_is(TELEPORT_SUBTYPE)
    }
}
