//! # manor_items - Item Vocabulary
//!
//! The closed vocabulary of item and fixture kinds found in the wizard's
//! house, plus the spell recipes that consume them.
//!
//! Kinds are a fixed enum rather than free-form strings: requesting an
//! unknown tag is a configuration error caught at parse time, never a
//! silently absent prop.

pub mod item;
pub mod spell;

pub use item::*;
pub use spell::*;

/// Prelude
pub mod prelude {
    pub use crate::item::{ItemKind, ItemKindError};
    pub use crate::spell::Spell;
}
