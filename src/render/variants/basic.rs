//! Simple presets: a single moving disc, a flat color wash, and orbiting squares.

use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, Rect, Rgb8},
    render::{frame::FrameCtx, ops::DrawOp},
};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::BLACK;

pub(crate) const CIRCLE_SPEED: f64 = 0.05;
pub(crate) const WASH_SPEED: f64 = 0.04;
pub(crate) const MULTIPLE_SPEED: f64 = 0.05;

pub(crate) const ORBITERS: usize = 6;

pub(crate) fn draw_circle(ctx: &FrameCtx, ops: &mut Vec<DrawOp>) {
    let t = ctx.time(CIRCLE_SPEED);
    let c = ctx.canvas.center();
    let orbit = ctx.canvas.min_side() / 4.0;
    let radius = ctx.canvas.min_side() / 8.0;

    let color = ctx.shade(
        [
            128.0 + t.sin() * 127.0,
            128.0 + t.cos() * 127.0,
            200.0,
        ],
        128.0 + t.sin() * 127.0,
    );
    ops.push(DrawOp::FillDisc {
        center: Point::new(c.x + t.cos() * orbit, c.y + t.sin() * orbit),
        radius,
        color,
    });
}

pub(crate) fn draw_color_wash(ctx: &FrameCtx, ops: &mut Vec<DrawOp>) {
    let t = ctx.time(WASH_SPEED);
    let third = TAU / 3.0;
    let color = ctx.shade(
        [
            128.0 + t.sin() * 127.0,
            128.0 + (t + third).sin() * 127.0,
            128.0 + (t + 2.0 * third).sin() * 127.0,
        ],
        128.0 + t.sin() * 127.0,
    );
    ops.push(DrawOp::FillRect {
        rect: ctx.canvas.bounds(),
        color,
    });
}

pub(crate) fn draw_multiple(ctx: &FrameCtx, ops: &mut Vec<DrawOp>) {
    let t = ctx.time(MULTIPLE_SPEED);
    let c = ctx.canvas.center();
    let orbit = ctx.canvas.min_side() / 3.0;
    let half = ctx.canvas.min_side() / 24.0;

    for i in 0..ORBITERS {
        let fi = i as f64;
        let angle = t + fi * TAU / ORBITERS as f64;
        let p = Point::new(c.x + angle.cos() * orbit, c.y + angle.sin() * orbit);
        let color = ctx.shade(
            [
                128.0 + angle.sin() * 127.0,
                128.0 + (angle + 2.0).sin() * 127.0,
                128.0 + (angle + 4.0).sin() * 127.0,
            ],
            80.0 + fi * 35.0,
        );
        ops.push(DrawOp::FillRect {
            rect: Rect::new(p.x - half, p.y - half, p.x + half, p.y + half),
            color,
        });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/variants/basic.rs"]
mod tests;
