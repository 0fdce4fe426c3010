//! Configuration schema.

pub mod config;
