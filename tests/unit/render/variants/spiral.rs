use super::*;
use crate::{
    foundation::core::{Canvas, FrameIndex},
    params::model::ColorMode,
};

#[test]
fn arms_stay_inside_a_third_of_the_short_side() {
    let canvas = Canvas::new(90, 60);
    for frame in [0, 7, 93] {
        let ctx = FrameCtx::new(FrameIndex(frame), canvas, 16, ColorMode::Color);
        let mut ops = Vec::new();
        draw(&ctx, &mut ops);
        assert_eq!(ops.len(), ARMS);
        for op in &ops {
            let DrawOp::FillDisc { center, radius, .. } = op else {
                panic!("expected disc");
            };
            assert!((center.distance(canvas.center())) <= 20.0 + 1e-9);
            assert_eq!(*radius, 60.0 / 25.0);
        }
    }
}

#[test]
fn first_arm_starts_on_the_horizontal_axis() {
    let canvas = Canvas::new(90, 60);
    let ctx = FrameCtx::new(FrameIndex(0), canvas, 256, ColorMode::Mono);
    let mut ops = Vec::new();
    draw(&ctx, &mut ops);
    let DrawOp::FillDisc { center, color, .. } = &ops[0] else {
        panic!("expected disc");
    };
    assert_eq!(*center, Point::new(45.0 + 10.0, 30.0));
    assert_eq!(color.r, color.g);
    assert_eq!(color.g, color.b);
}
