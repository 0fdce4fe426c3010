use super::*;
use crate::{
    foundation::core::{Canvas, FrameIndex},
    params::model::ColorMode,
};

#[test]
fn three_polylines_with_growing_stroke_width() {
    let ctx = FrameCtx::new(FrameIndex(5), Canvas::new(41, 30), 256, ColorMode::Mono);
    let mut ops = Vec::new();
    draw(&ctx, &mut ops);
    assert_eq!(ops.len(), WAVES);
    for (i, op) in ops.iter().enumerate() {
        let DrawOp::StrokePolyline { points, width, .. } = op else {
            panic!("expected polyline");
        };
        assert_eq!(*width, 3.0 + i as f64);
        // x = 0, 2, ..., 40
        assert_eq!(points.len(), 21);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[20].x, 40.0);
    }
}

#[test]
fn single_pixel_surface_still_renders() {
    let ctx = FrameCtx::new(FrameIndex(0), Canvas::new(1, 1), 2, ColorMode::Color);
    let mut ops = Vec::new();
    draw(&ctx, &mut ops);
    assert_eq!(ops.len(), WAVES);
}
