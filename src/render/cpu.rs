//! Raster surface backed by `vello_cpu`, used for headless frame output.

use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::core::{Canvas, Point, Rect, Rgb8, Vec2},
    foundation::error::{RawscopeError, RawscopeResult},
    render::ops::DrawSurface,
};

const PATH_TOLERANCE: f64 = 0.1;

/// A rendered frame as straight-alpha RGBA8 pixels, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRgba {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// CPU rasterizer implementing [`DrawSurface`].
///
/// Ops accumulate in a `vello_cpu` render context and are resolved into the
/// backing pixmap on [`DrawSurface::finish_frame`].
pub struct CpuSurface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    opacity: f32,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .field("opacity", &self.opacity)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    pub fn new(canvas: Canvas) -> RawscopeResult<Self> {
        let (w, h) = dims_u16(canvas)?;
        Ok(Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            opacity: 1.0,
        })
    }

    /// The last finished frame, un-premultiplied.
    pub fn frame(&self) -> FrameRgba {
        let mut data = self.pixmap.data_as_u8_slice().to_vec();
        for px in data.chunks_exact_mut(4) {
            unpremultiply_in_place(px);
        }
        FrameRgba {
            width: self.canvas.width,
            height: self.canvas.height,
            data,
        }
    }

    fn paint(&mut self, color: Rgb8) {
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    fn with_opacity(&mut self, draw: impl FnOnce(&mut vello_cpu::RenderContext)) {
        let layered = self.opacity < 1.0;
        if layered {
            self.ctx.push_opacity_layer(self.opacity);
        }
        draw(&mut self.ctx);
        if layered {
            self.ctx.pop_layer();
        }
    }
}

impl DrawSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) -> RawscopeResult<()> {
        if canvas == self.canvas {
            return Ok(());
        }
        *self = Self::new(canvas)?;
        Ok(())
    }

    fn set_opacity(&mut self, opacity: f64) -> RawscopeResult<()> {
        self.opacity = opacity.clamp(0.0, 1.0) as f32;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb8) -> RawscopeResult<()> {
        self.paint(color);
        let r = vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1);
        self.with_opacity(|ctx| ctx.fill_rect(&r));
        Ok(())
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgb8) -> RawscopeResult<()> {
        self.fill_ellipse(center, Vec2::new(radius, radius), color)
    }

    fn fill_ellipse(&mut self, center: Point, radii: Vec2, color: Rgb8) -> RawscopeResult<()> {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return Ok(());
        }
        self.paint(color);
        let path = vello_cpu::kurbo::Ellipse::new((center.x, center.y), (radii.x, radii.y), 0.0)
            .to_path(PATH_TOLERANCE);
        self.with_opacity(|ctx| ctx.fill_path(&path));
        Ok(())
    }

    fn stroke_polyline(
        &mut self,
        points: &[Point],
        color: Rgb8,
        width: f64,
    ) -> RawscopeResult<()> {
        let [first, rest @ ..] = points else {
            return Ok(());
        };
        if rest.is_empty() {
            return Ok(());
        }
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        self.paint(color);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.with_opacity(|ctx| ctx.stroke_path(&path));
        Ok(())
    }

    fn finish_frame(&mut self) -> RawscopeResult<()> {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        self.ctx.reset();
        self.opacity = 1.0;
        Ok(())
    }
}

fn dims_u16(canvas: Canvas) -> RawscopeResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| RawscopeError::render("surface width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| RawscopeError::render("surface height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(RawscopeError::render("surface must be at least 1x1"));
    }
    Ok((w, h))
}

fn unpremultiply_in_place(px: &mut [u8]) {
    let a = u16::from(px[3]);
    if a == 0 || a == 255 {
        return;
    }
    for c in &mut px[..3] {
        *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
