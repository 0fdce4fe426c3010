//! Host-facing simulator session.

/// The simulator facade wiring parameters, volume, playback and rendering.
pub mod simulator;
/// Result sinks for textual outputs.
pub mod sink;
