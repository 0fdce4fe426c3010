use crate::foundation::{
    core::{Canvas, Point, Rect, Rgb8, Vec2},
    error::RawscopeResult,
};

/// Drawing command emitted by a renderer.
///
/// Opacity is surface state: a [`DrawOp::SetOpacity`] applies to every following
/// op until the next one. Renderers always restore it to `1.0` before returning.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    SetOpacity(f64),
    FillRect {
        rect: Rect,
        color: Rgb8,
    },
    FillDisc {
        center: Point,
        radius: f64,
        color: Rgb8,
    },
    FillEllipse {
        center: Point,
        radii: Vec2,
        color: Rgb8,
    },
    StrokePolyline {
        points: Vec<Point>,
        color: Rgb8,
        width: f64,
    },
}

/// Host drawing capability that renderers' output is replayed onto.
pub trait DrawSurface {
    fn canvas(&self) -> Canvas;

    fn resize(&mut self, canvas: Canvas) -> RawscopeResult<()>;

    fn set_opacity(&mut self, opacity: f64) -> RawscopeResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgb8) -> RawscopeResult<()>;

    fn fill_disc(&mut self, center: Point, radius: f64, color: Rgb8) -> RawscopeResult<()>;

    fn fill_ellipse(&mut self, center: Point, radii: Vec2, color: Rgb8) -> RawscopeResult<()>;

    fn stroke_polyline(&mut self, points: &[Point], color: Rgb8, width: f64)
    -> RawscopeResult<()>;

    /// Called once after the last op of a frame.
    fn finish_frame(&mut self) -> RawscopeResult<()> {
        Ok(())
    }
}

/// Replays `ops` onto `surface` in order, then finishes the frame.
///
/// The first failing op aborts the frame and its error is returned unchanged.
pub fn execute_ops<S: DrawSurface + ?Sized>(surface: &mut S, ops: &[DrawOp]) -> RawscopeResult<()> {
    for op in ops {
        match op {
            DrawOp::SetOpacity(a) => surface.set_opacity(*a)?,
            DrawOp::FillRect { rect, color } => surface.fill_rect(*rect, *color)?,
            DrawOp::FillDisc {
                center,
                radius,
                color,
            } => surface.fill_disc(*center, *radius, *color)?,
            DrawOp::FillEllipse {
                center,
                radii,
                color,
            } => surface.fill_ellipse(*center, *radii, *color)?,
            DrawOp::StrokePolyline {
                points,
                color,
                width,
            } => surface.stroke_polyline(points, *color, *width)?,
        }
    }
    surface.finish_frame()
}

#[cfg(test)]
#[path = "../../tests/unit/render/ops.rs"]
mod tests;
