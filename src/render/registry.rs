use std::str::FromStr;

use crate::{
    foundation::core::Rgb8,
    foundation::error::RawscopeError,
    render::{
        frame::FrameCtx,
        ops::DrawOp,
        variants::{basic, bouncing, particles, spiral, waves},
    },
};

/// Grouping used by hosts when laying out variant buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantFamily {
    Showcase,
    Basic,
}

/// Closed set of selectable animations.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationVariant {
    #[default]
    Bouncing,
    Spiral,
    Waves,
    Particles,
    Circle,
    ColorWash,
    Multiple,
}

impl AnimationVariant {
    pub const ALL: [Self; 7] = [
        Self::Bouncing,
        Self::Spiral,
        Self::Waves,
        Self::Particles,
        Self::Circle,
        Self::ColorWash,
        Self::Multiple,
    ];

    /// Stable key used in configuration and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bouncing => "bouncing",
            Self::Spiral => "spiral",
            Self::Waves => "waves",
            Self::Particles => "particles",
            Self::Circle => "circle",
            Self::ColorWash => "color-wash",
            Self::Multiple => "multiple",
        }
    }

    pub fn family(self) -> VariantFamily {
        match self {
            Self::Bouncing | Self::Spiral | Self::Waves | Self::Particles => {
                VariantFamily::Showcase
            }
            Self::Circle | Self::ColorWash | Self::Multiple => VariantFamily::Basic,
        }
    }

    /// Fixed background color, also usable to tint the host container.
    pub fn background(self) -> Rgb8 {
        match self {
            Self::Bouncing => bouncing::BACKGROUND,
            Self::Spiral => spiral::BACKGROUND,
            Self::Waves => waves::BACKGROUND,
            Self::Particles => particles::BACKGROUND,
            Self::Circle | Self::ColorWash | Self::Multiple => basic::BACKGROUND,
        }
    }

    /// Time units advanced per frame.
    pub fn speed(self) -> f64 {
        match self {
            Self::Bouncing => bouncing::SPEED,
            Self::Spiral => spiral::SPEED,
            Self::Waves => waves::SPEED,
            Self::Particles => particles::SPEED,
            Self::Circle => basic::CIRCLE_SPEED,
            Self::ColorWash => basic::WASH_SPEED,
            Self::Multiple => basic::MULTIPLE_SPEED,
        }
    }

    /// Draw operations for one frame, starting with an opaque background fill.
    #[tracing::instrument(level = "trace", skip(ctx), fields(frame = ctx.frame.0))]
    pub fn render(self, ctx: &FrameCtx) -> Vec<DrawOp> {
        let mut ops = vec![
            DrawOp::SetOpacity(1.0),
            DrawOp::FillRect {
                rect: ctx.canvas.bounds(),
                color: self.background(),
            },
        ];
        match self {
            Self::Bouncing => bouncing::draw(ctx, &mut ops),
            Self::Spiral => spiral::draw(ctx, &mut ops),
            Self::Waves => waves::draw(ctx, &mut ops),
            Self::Particles => particles::draw(ctx, &mut ops),
            Self::Circle => basic::draw_circle(ctx, &mut ops),
            Self::ColorWash => basic::draw_color_wash(ctx, &mut ops),
            Self::Multiple => basic::draw_multiple(ctx, &mut ops),
        }
        ops
    }
}

impl std::fmt::Display for AnimationVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationVariant {
    type Err = RawscopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|v| v.name() == s).ok_or_else(|| {
            RawscopeError::configuration(format!("unknown animation variant '{s}'"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/registry.rs"]
mod tests;
