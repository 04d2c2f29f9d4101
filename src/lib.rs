//! Prismcat Library
//!
//! A streaming text colorizer: characters go in, the same characters come
//! out wrapped in terminal color escapes that paint a smooth gradient
//! following a chosen pride flag. This crate provides:
//!
//! - `flag`: built-in color themes and their fallback palettes
//! - `color`: phase-angle to RGB interpolation
//! - `phase`: screen position to gradient phase mapping
//! - `escape`: passthrough tracking for escape sequences in the input
//! - `stream`: the per-character colorizing state machine
//! - `input`: pull-style UTF-8 character reading
//! - `config`: settings, config file, validation

pub mod color;
pub mod config;
pub mod escape;
pub mod flag;
pub mod input;
pub mod phase;
pub mod stream;
