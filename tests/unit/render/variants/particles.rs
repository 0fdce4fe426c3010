use super::*;
use crate::{
    foundation::core::{Canvas, FrameIndex},
    params::model::ColorMode,
};

#[test]
fn every_particle_has_a_fading_shrinking_trail() {
    let ctx = FrameCtx::new(FrameIndex(12), Canvas::new(120, 120), 256, ColorMode::Color);
    let mut ops = Vec::new();
    draw(&ctx, &mut ops);
    assert_eq!(ops.len(), PARTICLES * (TRAIL_LEN * 2 + 1));

    for chunk in ops.chunks(TRAIL_LEN * 2 + 1) {
        let mut prev_opacity = f64::INFINITY;
        let mut prev_radius = f64::INFINITY;
        for pair in chunk[..TRAIL_LEN * 2].chunks(2) {
            let DrawOp::SetOpacity(a) = pair[0] else {
                panic!("expected opacity");
            };
            let DrawOp::FillDisc { radius, .. } = pair[1] else {
                panic!("expected disc");
            };
            assert!(a < prev_opacity);
            assert!(radius < prev_radius);
            prev_opacity = a;
            prev_radius = radius;
        }
        assert_eq!(chunk[TRAIL_LEN * 2], DrawOp::SetOpacity(1.0));
    }
}
