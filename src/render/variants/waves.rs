use std::f64::consts::PI;

use crate::{
    foundation::core::{Point, Rgb8},
    render::{frame::FrameCtx, ops::DrawOp},
};

pub(crate) const SPEED: f64 = 0.08;
pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(0x34, 0x49, 0x5e);

pub(crate) const WAVES: usize = 3;
const FREQ: f64 = 4.0;
const SAMPLE_STEP_PX: usize = 2;

pub(crate) fn draw(ctx: &FrameCtx, ops: &mut Vec<DrawOp>) {
    let t = ctx.time(SPEED);
    let (w, h) = (ctx.canvas.w(), ctx.canvas.h());
    let wave_height = h / 4.0;

    for wave in 0..WAVES {
        let fw = wave as f64;
        let phase = fw * PI * 0.6;
        let amplitude = wave_height * (0.5 + fw * 0.3);

        let points = (0..=ctx.canvas.width as usize)
            .step_by(SAMPLE_STEP_PX)
            .map(|x| {
                let u = x as f64 / w;
                let y = h / 2.0
                    + (u * PI * FREQ + t + phase).sin() * amplitude
                    + (u * PI * FREQ * 2.0 + t * 1.5 + phase).sin() * amplitude * 0.3;
                Point::new(x as f64, y)
            })
            .collect();

        let color = ctx.shade(
            [
                100.0 + fw * 50.0,
                150.0 + (t + phase).sin() * 100.0,
                200.0 + (t + phase).cos() * 55.0,
            ],
            120.0 + fw * 40.0 + t.sin() * 60.0,
        );
        ops.push(DrawOp::StrokePolyline {
            points,
            color,
            width: 3.0 + fw,
        });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/render/variants/waves.rs"]
mod tests;
