use crate::{
    foundation::core::{Point, Rgb8, Vec2},
    render::{frame::FrameCtx, ops::DrawOp},
};

pub(crate) const SPEED: f64 = 0.1;
pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(0x2c, 0x3e, 0x50);

const TRAIL_OPACITY: f64 = 0.1;
const SHADOW_OPACITY: f64 = 0.3;
const SHADOW_FLATTEN: f64 = 0.3;
const FLOOR_INSET: f64 = 5.0;

/// Ball position for time `t` on a `w`×`h` surface.
pub(crate) fn ball_center(t: f64, w: f64, h: f64, ball: f64) -> Point {
    let x = ((t * 0.5).sin() * 0.4 + 0.5) * (w - ball * 2.0) + ball;
    let y = (t * 2.0).sin().abs() * (h - ball * 2.0) + ball;
    Point::new(x, y)
}

pub(crate) fn draw(ctx: &FrameCtx, ops: &mut Vec<DrawOp>) {
    let t = ctx.time(SPEED);
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let ball = ctx.canvas.min_side() / 10.0;
    let center = ball_center(t, w, h, ball);

    ops.push(DrawOp::SetOpacity(TRAIL_OPACITY));
    ops.push(DrawOp::FillRect {
        rect: ctx.canvas.bounds(),
        color: BACKGROUND,
    });
    ops.push(DrawOp::SetOpacity(1.0));

    let height_frac = center.y / h;
    let color = ctx.shade(
        [
            255.0 - height_frac * 255.0,
            128.0 + t.sin() * 127.0,
            (center.x / w) * 255.0,
        ],
        255.0 - height_frac * 200.0 + 55.0,
    );
    ops.push(DrawOp::FillDisc {
        center,
        radius: ball,
        color,
    });

    // Shadow shrinks as the ball rises away from the floor.
    let shadow_r = (ball * (1.0 - height_frac)).max(0.0);
    ops.push(DrawOp::SetOpacity(SHADOW_OPACITY));
    ops.push(DrawOp::FillEllipse {
        center: Point::new(center.x, h - FLOOR_INSET),
        radii: Vec2::new(shadow_r, shadow_r * SHADOW_FLATTEN),
        color: Rgb8::BLACK,
    });
    ops.push(DrawOp::SetOpacity(1.0));
}

#[cfg(test)]
#[path = "../../../tests/unit/render/variants/bouncing.rs"]
mod tests;
