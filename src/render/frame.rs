use crate::{
    foundation::core::{Canvas, FrameIndex, Rgb8},
    params::model::{ColorMode, ParameterModel},
    render::quantize::quantize,
};

/// Everything a renderer may depend on. Renderers are pure functions of this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    pub frame: FrameIndex,
    pub canvas: Canvas,
    pub levels: u32,
    pub color_mode: ColorMode,
}

impl FrameCtx {
    pub fn new(frame: FrameIndex, canvas: Canvas, levels: u32, color_mode: ColorMode) -> Self {
        Self {
            frame,
            canvas,
            levels,
            color_mode,
        }
    }

    pub fn from_model(model: &ParameterModel, frame: FrameIndex) -> Self {
        Self::new(
            frame,
            model.canvas(),
            model.quantization_levels(),
            model.color_mode(),
        )
    }

    /// Animation time for a variant advancing `speed` units per frame.
    pub fn time(&self, speed: f64) -> f64 {
        self.frame.0 as f64 * speed
    }

    /// Quantized display color.
    ///
    /// Color mode quantizes each of `rgb`; mono quantizes `gray` once and replicates it.
    pub fn shade(&self, rgb: [f64; 3], gray: f64) -> Rgb8 {
        match self.color_mode {
            ColorMode::Color => Rgb8::new(
                quantize(rgb[0], self.levels),
                quantize(rgb[1], self.levels),
                quantize(rgb[2], self.levels),
            ),
            ColorMode::Mono => Rgb8::gray(quantize(gray, self.levels)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
