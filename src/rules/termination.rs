//! Termination conditions.
//!
//! A game ends as soon as any termination condition holds; the condition's
//! `win` flag decides the outcome for the player.

use serde::{Deserialize, Serialize};

/// A global end-of-game predicate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// Instances of `stype` drop to `limit`.
    SpriteCounter { stype: String, limit: u32, win: bool },

    /// Combined instances of `stype1` and `stype2` drop to `limit`.
    MultiSpriteCounter {
        stype1: String,
        stype2: String,
        limit: u32,
        win: bool,
    },

    /// `limit` game steps elapse.
    Timeout { limit: u32, win: bool },
}

impl Termination {
    /// All instances of `stype` gone.
    pub fn sprite_counter(stype: impl Into<String>, win: bool) -> Self {
        Self::SpriteCounter {
            stype: stype.into(),
            limit: 0,
            win,
        }
    }

    /// All instances of both `stype1` and `stype2` gone.
    pub fn multi_sprite_counter(stype1: impl Into<String>, stype2: impl Into<String>, win: bool) -> Self {
        Self::MultiSpriteCounter {
            stype1: stype1.into(),
            stype2: stype2.into(),
            limit: 0,
            win,
        }
    }

    pub fn timeout(limit: u32, win: bool) -> Self {
        Self::Timeout { limit, win }
    }

    /// Does this condition end the game in a win?
    #[must_use]
    pub fn is_win(&self) -> bool {
        match self {
            Self::SpriteCounter { win, .. }
            | Self::MultiSpriteCounter { win, .. }
            | Self::Timeout { win, .. } => *win,
        }
    }

    /// Does the condition count instances of `name`?
    #[must_use]
    pub fn counts(&self, name: &str) -> bool {
        match self {
            Self::SpriteCounter { stype, .. } => stype == name,
            Self::MultiSpriteCounter { stype1, stype2, .. } => stype1 == name || stype2 == name,
            Self::Timeout { .. } => false,
        }
    }
}

fn engine_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpriteCounter { stype, limit, win } => write!(
                f,
                "SpriteCounter stype={stype} limit={limit} win={}",
                engine_bool(*win)
            ),
            Self::MultiSpriteCounter {
                stype1,
                stype2,
                limit,
                win,
            } => write!(
                f,
                "MultiSpriteCounter stype1={stype1} stype2={stype2} limit={limit} win={}",
                engine_bool(*win)
            ),
            Self::Timeout { limit, win } => {
                write!(f, "Timeout limit={limit} win={}", engine_bool(*win))
            }
        }
    }
}
