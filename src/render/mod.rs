//! Frame rendering: quantization, draw ops, the variant registry, and surfaces.

/// CPU raster surface powered by `vello_cpu`.
pub mod cpu;
/// Per-frame render context.
pub mod frame;
/// Draw operations and the drawing-surface capability.
pub mod ops;
/// Bit-depth quantization shared by every renderer.
pub mod quantize;
/// In-memory surface that records ops.
pub mod recording;
/// Closed registry of animation variants.
pub mod registry;
pub(crate) mod variants;
