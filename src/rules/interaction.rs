//! Interaction rules.
//!
//! An interaction fires when an instance of the actor sprite collides with
//! the target (another sprite or the edge of the screen) and applies an
//! effect to the actor. `Display` renders the engine's rule syntax,
//! e.g. `coin avatar > killSprite scoreChange=1`.

use serde::{Deserialize, Serialize};

/// What the actor collides with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionTarget {
    /// Another sprite type.
    Sprite(String),
    /// The level boundary.
    EdgeOfScreen,
}

impl CollisionTarget {
    /// The target's sprite name, if it is a sprite.
    #[must_use]
    pub fn sprite_name(&self) -> Option<&str> {
        match self {
            CollisionTarget::Sprite(name) => Some(name),
            CollisionTarget::EdgeOfScreen => None,
        }
    }
}

impl std::fmt::Display for CollisionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionTarget::Sprite(name) => f.write_str(name),
            CollisionTarget::EdgeOfScreen => f.write_str("EOS"),
        }
    }
}

/// Effect applied to the actor of an interaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionEffect {
    // === Movement ===

    /// Undo the last step.
    StepBack,
    /// Mirror the movement direction.
    FlipDirection,
    /// Reverse the movement direction.
    ReverseDirection,
    /// Turn around and step down.
    TurnAround,
    /// Reappear on the opposite side of the level.
    WrapAround,
    /// Move along with the target.
    PullAlong,
    /// Jump to the portal's exit.
    TeleportToExit,

    // === Destruction ===

    /// Destroy the actor, optionally changing the score.
    Destroy { score_delta: Option<i32> },

    /// Destroy the actor if it holds fewer than `limit` of `resource`.
    DestroyIfHasLess { resource: String, limit: usize },

    // === Other ===

    /// The target picks the actor up as a resource.
    CollectResource,

    /// Turn the actor into another sprite type.
    TransformTo { stype: String },
}

impl InteractionEffect {
    /// Destroy without score change.
    pub fn destroy() -> Self {
        Self::Destroy { score_delta: None }
    }

    /// Destroy and change the score by `delta`.
    pub fn destroy_scoring(delta: i32) -> Self {
        Self::Destroy {
            score_delta: Some(delta),
        }
    }

    /// Is this any kind of destroy effect?
    #[must_use]
    pub fn is_destroy(&self) -> bool {
        matches!(self, Self::Destroy { .. } | Self::DestroyIfHasLess { .. })
    }

    /// Score change attached to a destroy effect.
    #[must_use]
    pub fn score_delta(&self) -> Option<i32> {
        match self {
            Self::Destroy { score_delta } => *score_delta,
            _ => None,
        }
    }
}

impl std::fmt::Display for InteractionEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepBack => f.write_str("stepBack"),
            Self::FlipDirection => f.write_str("flipDirection"),
            Self::ReverseDirection => f.write_str("reverseDirection"),
            Self::TurnAround => f.write_str("turnAround"),
            Self::WrapAround => f.write_str("wrapAround"),
            Self::PullAlong => f.write_str("pullWithIt"),
            Self::TeleportToExit => f.write_str("teleportToExit"),
            Self::Destroy { score_delta: None } => f.write_str("killSprite"),
            Self::Destroy {
                score_delta: Some(delta),
            } => write!(f, "killSprite scoreChange={delta}"),
            Self::DestroyIfHasLess { resource, limit } => {
                write!(f, "killIfHasLess resource={resource} limit={limit}")
            }
            Self::CollectResource => f.write_str("collectResource"),
            Self::TransformTo { stype } => write!(f, "transformTo stype={stype}"),
        }
    }
}

/// A single collision rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interaction {
    /// Sprite the effect applies to.
    pub actor: String,
    /// What the actor collides with.
    pub target: CollisionTarget,
    /// Effect applied to the actor.
    pub effect: InteractionEffect,
}

impl Interaction {
    /// Collision between two sprite types.
    pub fn new(actor: impl Into<String>, target: impl Into<String>, effect: InteractionEffect) -> Self {
        Self {
            actor: actor.into(),
            target: CollisionTarget::Sprite(target.into()),
            effect,
        }
    }

    /// Collision between a sprite type and the edge of the screen.
    pub fn edge(actor: impl Into<String>, effect: InteractionEffect) -> Self {
        Self {
            actor: actor.into(),
            target: CollisionTarget::EdgeOfScreen,
            effect,
        }
    }

    /// Is this rule between `actor` and the sprite `target`?
    #[must_use]
    pub fn is_between(&self, actor: &str, target: &str) -> bool {
        self.actor == actor && self.target.sprite_name() == Some(target)
    }

    /// Does the rule mention `name` on either side?
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        self.actor == name || self.target.sprite_name() == Some(name)
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} > {}", self.actor, self.target, self.effect)
    }
}
