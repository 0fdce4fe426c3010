use super::*;
use crate::{
    foundation::core::{Canvas, FrameIndex},
    params::model::ColorMode,
};

fn render(frame: u64) -> Vec<DrawOp> {
    let ctx = FrameCtx::new(FrameIndex(frame), Canvas::new(100, 80), 256, ColorMode::Color);
    let mut ops = Vec::new();
    draw(&ctx, &mut ops);
    ops
}

#[test]
fn trail_overlay_then_disc_then_shadow() {
    let ops = render(4);
    assert_eq!(ops[0], DrawOp::SetOpacity(TRAIL_OPACITY));
    assert!(matches!(ops[1], DrawOp::FillRect { color, .. } if color == BACKGROUND));
    assert_eq!(ops[2], DrawOp::SetOpacity(1.0));
    assert!(matches!(ops[3], DrawOp::FillDisc { radius, .. } if radius == 8.0));
    assert_eq!(ops[4], DrawOp::SetOpacity(SHADOW_OPACITY));
    assert!(matches!(ops[5], DrawOp::FillEllipse { color, .. } if color == Rgb8::BLACK));
    assert_eq!(ops[6], DrawOp::SetOpacity(1.0));
    assert_eq!(ops.len(), 7);
}

#[test]
fn ball_stays_inside_the_surface() {
    for f in 0..200 {
        let p = ball_center(f as f64 * SPEED, 100.0, 80.0, 8.0);
        assert!(p.x >= 8.0 && p.x <= 92.0, "{p:?}");
        assert!(p.y >= 8.0 && p.y <= 72.0, "{p:?}");
    }
}

#[test]
fn shadow_is_flattened_and_on_the_floor() {
    for f in [0, 3, 8, 15] {
        let ops = render(f);
        let DrawOp::FillEllipse { center, radii, .. } = ops[5] else {
            panic!("expected shadow ellipse");
        };
        assert_eq!(center.y, 75.0);
        assert!(radii.y <= radii.x);
        assert!(radii.x >= 0.0);
    }
}
