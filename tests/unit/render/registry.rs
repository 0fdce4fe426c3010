use super::*;
use crate::{
    foundation::core::{Canvas, FrameIndex},
    params::model::ColorMode,
};

fn ctx(frame: u64, levels: u32, mode: ColorMode) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Canvas::new(64, 48), levels, mode)
}

fn colors(ops: &[DrawOp]) -> Vec<Rgb8> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::FillRect { color, .. }
            | DrawOp::FillDisc { color, .. }
            | DrawOp::FillEllipse { color, .. }
            | DrawOp::StrokePolyline { color, .. } => Some(*color),
            DrawOp::SetOpacity(_) => None,
        })
        .collect()
}

#[test]
fn keys_roundtrip_and_unknown_is_configuration_error() {
    for v in AnimationVariant::ALL {
        assert_eq!(v.name().parse::<AnimationVariant>().unwrap(), v);
        assert_eq!(v.to_string(), v.name());
    }
    let err = "plasma".parse::<AnimationVariant>().unwrap_err();
    assert!(matches!(err, RawscopeError::Configuration(_)));
}

#[test]
fn serde_keys_match_names() {
    for v in AnimationVariant::ALL {
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, format!("\"{}\"", v.name()));
    }
}

#[test]
fn every_frame_starts_with_opaque_background() {
    for v in AnimationVariant::ALL {
        let ops = v.render(&ctx(3, 256, ColorMode::Color));
        assert_eq!(ops[0], DrawOp::SetOpacity(1.0));
        assert_eq!(
            ops[1],
            DrawOp::FillRect {
                rect: Canvas::new(64, 48).bounds(),
                color: v.background(),
            }
        );
    }
}

#[test]
fn rendering_is_a_pure_function_of_the_frame_index() {
    for v in AnimationVariant::ALL {
        for f in [0, 1, 17, 10_000] {
            let c = ctx(f, 16, ColorMode::Color);
            assert_eq!(v.render(&c), v.render(&c), "{v} frame {f}");
        }
    }
}

#[test]
fn frames_change_over_time() {
    for v in AnimationVariant::ALL {
        let a = v.render(&ctx(0, 256, ColorMode::Color));
        let b = v.render(&ctx(25, 256, ColorMode::Color));
        assert_ne!(a, b, "{v} is static");
    }
}

#[test]
fn opacity_is_restored_at_the_end_of_every_frame() {
    for v in AnimationVariant::ALL {
        let ops = v.render(&ctx(9, 256, ColorMode::Mono));
        let last_opacity = ops
            .iter()
            .rev()
            .find_map(|op| match op {
                DrawOp::SetOpacity(a) => Some(*a),
                _ => None,
            })
            .unwrap();
        assert_eq!(last_opacity, 1.0, "{v}");
    }
}

#[test]
fn mono_frames_are_gray() {
    for v in AnimationVariant::ALL {
        let ops = v.render(&ctx(7, 256, ColorMode::Mono));
        for c in colors(&ops[2..]).into_iter().filter(|c| *c != v.background()) {
            assert!(c.r == c.g && c.g == c.b, "{v}: {c:?}");
        }
    }
}

#[test]
fn one_bit_frames_only_use_extreme_values() {
    for v in AnimationVariant::ALL {
        let ops = v.render(&ctx(11, 2, ColorMode::Color));
        for c in colors(&ops[2..]).into_iter().filter(|c| *c != v.background()) {
            for ch in [c.r, c.g, c.b] {
                assert!(ch == 0 || ch == 255, "{v}: {c:?}");
            }
        }
    }
}

#[test]
fn families_split_showcase_from_basic() {
    assert_eq!(AnimationVariant::Particles.family(), VariantFamily::Showcase);
    assert_eq!(AnimationVariant::ColorWash.family(), VariantFamily::Basic);
}
