use crate::{
    foundation::core::{Canvas, Point, Rect, Rgb8, Vec2},
    foundation::error::{RawscopeError, RawscopeResult},
    render::ops::{DrawOp, DrawSurface},
};

/// Surface that keeps the ops of every finished frame instead of rasterizing.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    pending: Vec<DrawOp>,
    frames: Vec<Vec<DrawOp>>,
    resizes: usize,
    fail_with: Option<String>,
    reject_resize: Option<String>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            pending: Vec::new(),
            frames: Vec::new(),
            resizes: 0,
            fail_with: None,
            reject_resize: None,
        }
    }

    /// A surface whose draw calls all fail with `msg`.
    pub fn failing(canvas: Canvas, msg: impl Into<String>) -> Self {
        Self {
            fail_with: Some(msg.into()),
            ..Self::new(canvas)
        }
    }

    /// Makes every later resize fail with `msg`; drawing is unaffected.
    pub fn reject_resizes(&mut self, msg: impl Into<String>) {
        self.reject_resize = Some(msg.into());
    }

    pub fn frames(&self) -> &[Vec<DrawOp>] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&[DrawOp]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn resize_count(&self) -> usize {
        self.resizes
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.frames.clear();
    }

    fn record(&mut self, op: DrawOp) -> RawscopeResult<()> {
        if let Some(msg) = &self.fail_with {
            return Err(RawscopeError::render(msg.clone()));
        }
        self.pending.push(op);
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn resize(&mut self, canvas: Canvas) -> RawscopeResult<()> {
        if let Some(msg) = &self.reject_resize {
            return Err(RawscopeError::render(msg.clone()));
        }
        self.canvas = canvas;
        self.resizes += 1;
        Ok(())
    }

    fn set_opacity(&mut self, opacity: f64) -> RawscopeResult<()> {
        self.record(DrawOp::SetOpacity(opacity))
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb8) -> RawscopeResult<()> {
        self.record(DrawOp::FillRect { rect, color })
    }

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgb8) -> RawscopeResult<()> {
        self.record(DrawOp::FillDisc {
            center,
            radius,
            color,
        })
    }

    fn fill_ellipse(&mut self, center: Point, radii: Vec2, color: Rgb8) -> RawscopeResult<()> {
        self.record(DrawOp::FillEllipse {
            center,
            radii,
            color,
        })
    }

    fn stroke_polyline(
        &mut self,
        points: &[Point],
        color: Rgb8,
        width: f64,
    ) -> RawscopeResult<()> {
        self.record(DrawOp::StrokePolyline {
            points: points.to_vec(),
            color,
            width,
        })
    }

    fn finish_frame(&mut self) -> RawscopeResult<()> {
        self.frames.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}
