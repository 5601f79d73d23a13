//! Sprite inventory: what the generator knows about a level.
//!
//! - `SpriteDescriptor`: Name, category, subtype and owned children of a sprite
//! - `SpriteInventory`: Query trait implemented by level analyzers
//! - `LevelInventory`: In-memory implementation built from counts or an ASCII layout

mod descriptor;
mod inventory;
mod level;

pub use descriptor::{NpcFamily, SpriteCategory, SpriteDescriptor, DOOR_SUBTYPE, TELEPORT_SUBTYPE};
pub use inventory::{Presence, SpriteInventory};
pub use level::{LevelInventory, LevelInventoryBuilder};
