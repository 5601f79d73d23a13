//! Rule synthesis.
//!
//! - `RuleGenerator`: Owns an inventory and produces rule sets on demand
//! - `RoleAssignment`: Wall, score, spike and exits, fixed per inventory
//! - `Classification`: Harmful, fleeing and collectible labels, rebuilt per run
//! - `CriticalEntities`: Live sprites anchoring the win condition
//!
//! A run goes roles → interaction passes → critical entities → terminations.
//! All randomness comes from the generator's `GenRng`, in pass order.

mod catalog;
mod classification;
mod context;
mod critical;
mod engine;
mod passes;
mod roles;
mod terminations;

pub use catalog::SpriteCatalog;
pub use classification::{Classification, NameSet};
pub use critical::{select_with_retry, CriticalEntities};
pub use engine::RuleGenerator;
pub use roles::RoleAssignment;
pub use terminations::{synthesize as synthesize_terminations, TimeoutWindow};
