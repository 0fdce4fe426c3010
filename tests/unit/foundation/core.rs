use super::*;

#[test]
fn frame_index_next_saturates() {
    assert_eq!(FrameIndex(3).next(), FrameIndex(4));
    assert_eq!(FrameIndex(u64::MAX).next(), FrameIndex(u64::MAX));
}

#[test]
fn canvas_geometry_helpers() {
    let c = Canvas::new(64, 32);
    assert_eq!(c.min_side(), 32.0);
    assert_eq!(c.center(), Point::new(32.0, 16.0));
    assert_eq!(c.bounds(), Rect::new(0.0, 0.0, 64.0, 32.0));
}

#[test]
fn premul_rgba_scales_channels_by_alpha() {
    let c = Rgb8::new(255, 128, 0);
    assert_eq!(c.premul_rgba(1.0), [255, 128, 0, 255]);
    assert_eq!(c.premul_rgba(0.0), [0, 0, 0, 0]);
    let half = c.premul_rgba(0.5);
    assert_eq!(half[3], 128);
    assert_eq!(half[0], 128);
}

#[test]
fn hex_notation_is_lowercase_and_padded() {
    assert_eq!(Rgb8::new(0x2c, 0x3e, 0x50).to_hex(), "#2c3e50");
    assert_eq!(Rgb8::gray(1).to_hex(), "#010101");
}
