//! Playback pacing: host clock/tick capabilities and the scheduler.

/// Clock and tick-source traits with manual and system implementations.
pub mod clock;
/// Play/pause/reset state machine.
pub mod scheduler;
