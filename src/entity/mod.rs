// src/entity/mod.rs
//! Output records and the listing rows they're built from.

pub mod enums;
pub mod feat;
pub mod magic_item;
pub mod row;
pub mod spell;

pub use feat::Feat;
pub use magic_item::MagicItem;
pub use row::Row;
pub use spell::Spell;
