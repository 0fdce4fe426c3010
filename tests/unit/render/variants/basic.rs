use super::*;
use crate::{
    foundation::core::{Canvas, FrameIndex},
    params::model::ColorMode,
};

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Canvas::new(96, 96), 256, ColorMode::Color)
}

#[test]
fn circle_draws_one_disc() {
    let mut ops = Vec::new();
    draw_circle(&ctx(3), &mut ops);
    assert_eq!(ops.len(), 1);
    assert!(matches!(ops[0], DrawOp::FillDisc { radius, .. } if radius == 12.0));
}

#[test]
fn color_wash_covers_the_surface() {
    let mut ops = Vec::new();
    draw_color_wash(&ctx(3), &mut ops);
    assert!(matches!(ops[0], DrawOp::FillRect { rect, .. } if rect == Rect::new(0.0, 0.0, 96.0, 96.0)));
}

#[test]
fn multiple_orbits_squares_around_the_center() {
    let mut ops = Vec::new();
    draw_multiple(&ctx(40), &mut ops);
    assert_eq!(ops.len(), ORBITERS);
    for op in &ops {
        let DrawOp::FillRect { rect, .. } = op else {
            panic!("expected square");
        };
        assert!((rect.width() - rect.height()).abs() < 1e-9);
        let d = rect.center().distance(Point::new(48.0, 48.0));
        assert!((d - 32.0).abs() < 1e-9);
    }
}
