// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod entity;
pub mod error;
pub mod file;
pub mod logger;
pub mod parse;
pub mod progress;
pub mod runner;
pub mod segment;
pub mod specs;
