use std::f64::consts::PI;

use crate::{
    foundation::core::{Point, Rgb8},
    render::{frame::FrameCtx, ops::DrawOp},
};

pub(crate) const SPEED: f64 = 0.05;
pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(0x1a, 0x1a, 0x1a);

pub(crate) const ARMS: usize = 5;

pub(crate) fn draw(ctx: &FrameCtx, ops: &mut Vec<DrawOp>) {
    let t = ctx.time(SPEED);
    let center = ctx.canvas.center();
    let max_radius = ctx.canvas.min_side() / 3.0;
    let size = ctx.canvas.min_side() / 25.0;

    for i in 0..ARMS {
        let fi = i as f64;
        let offset = fi * PI * 0.4;
        let radius = ((t + offset).sin() * 0.5 + 0.5) * max_radius;
        let angle = t * 3.0 + offset;

        let color = ctx.shade(
            [
                128.0 + (angle + fi).sin() * 127.0,
                128.0 + (angle + fi).cos() * 127.0,
                128.0 + (t + fi).sin() * 127.0,
            ],
            100.0 + (radius / max_radius) * 155.0,
        );
        ops.push(DrawOp::FillDisc {
            center: Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            ),
            radius: size,
            color,
        });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/variants/spiral.rs"]
mod tests;
