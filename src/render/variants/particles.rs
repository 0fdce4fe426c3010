use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, Rgb8},
    render::{frame::FrameCtx, ops::DrawOp},
};

pub(crate) const SPEED: f64 = 0.06;
pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(0x0f, 0x0f, 0x0f);

pub(crate) const PARTICLES: usize = 15;
pub(crate) const TRAIL_LEN: usize = 8;
const TRAIL_ANGLE_STEP: f64 = 0.1;
const TRAIL_PEAK_OPACITY: f64 = 0.6;

pub(crate) fn draw(ctx: &FrameCtx, ops: &mut Vec<DrawOp>) {
    let t = ctx.time(SPEED);
    let center = ctx.canvas.center();
    let min_side = ctx.canvas.min_side();

    for i in 0..PARTICLES {
        let fi = i as f64;
        let angle = (fi / PARTICLES as f64) * TAU + t;
        let radius = ((t * 0.8 + fi).sin() * 0.5 + 0.5) * min_side * 0.4;
        let size = ((t * 2.0 + fi).sin() * 0.5 + 0.5) * min_side / 20.0 + 2.0;

        // Ghost copies trail behind at slightly earlier angles, fading and shrinking.
        for k in 0..TRAIL_LEN {
            let fk = k as f64;
            let fade = 1.0 - fk / TRAIL_LEN as f64;
            let trail_angle = angle - fk * TRAIL_ANGLE_STEP;

            let color = ctx.shade(
                [
                    255.0 - fk * 20.0,
                    128.0 + (angle + fi).sin() * 127.0,
                    100.0 + fk * 15.0,
                ],
                200.0 - fk * 15.0,
            );
            ops.push(DrawOp::SetOpacity(fade * TRAIL_PEAK_OPACITY));
            ops.push(DrawOp::FillDisc {
                center: Point::new(
                    center.x + trail_angle.cos() * radius,
                    center.y + trail_angle.sin() * radius,
                ),
                radius: size * fade,
                color,
            });
        }
        ops.push(DrawOp::SetOpacity(1.0));
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/variants/particles.rs"]
mod tests;
