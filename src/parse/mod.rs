// src/parse/mod.rs
//! Pure text → typed value transforms. Safe to call from any thread.

pub mod fields;
pub mod units;

pub use fields::{
    parse_cast_time, parse_components, parse_duration, parse_level, parse_name,
    parse_spell_range, LEVEL_UNPARSED,
};
pub use units::{unit_normalize, unit_normalize_prose};
