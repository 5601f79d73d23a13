//! Rule model handed to the game engine.
//!
//! - `Interaction`: Collision-triggered effect between two sprites, or a sprite and the screen edge
//! - `Termination`: Win/lose predicate over sprite counts or elapsed steps
//! - `RuleSet`: Both lists plus the sprite groups they refer to
//!
//! Rules are structured values. Rendering to the engine's text syntax is a
//! `Display` concern and never feeds back into generation.

mod interaction;
mod termination;
mod rule_set;

pub use interaction::{CollisionTarget, Interaction, InteractionEffect};
pub use termination::Termination;
pub use rule_set::{RuleSet, SpriteSets};
