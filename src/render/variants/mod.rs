//! Procedural animation generators.
//!
//! Each variant exposes a `SPEED` (time units per frame), a fixed `BACKGROUND`, and a
//! `draw` function appending its shapes after the background fill.

pub(crate) mod basic;
pub(crate) mod bouncing;
pub(crate) mod particles;
pub(crate) mod spiral;
pub(crate) mod waves;
