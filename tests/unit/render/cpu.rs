use super::*;
use crate::render::ops::{DrawOp, execute_ops};

#[test]
fn full_rect_fill_covers_every_pixel() {
    let mut s = CpuSurface::new(Canvas::new(4, 3)).unwrap();
    execute_ops(
        &mut s,
        &[DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 4.0, 3.0),
            color: Rgb8::new(200, 10, 30),
        }],
    )
    .unwrap();
    let frame = s.frame();
    assert_eq!(frame.data.len(), 4 * 3 * 4);
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(frame.pixel(x, y), Some([200, 10, 30, 255]));
        }
    }
    assert_eq!(frame.pixel(4, 0), None);
}

#[test]
fn disc_center_takes_the_disc_color() {
    let mut s = CpuSurface::new(Canvas::new(32, 32)).unwrap();
    execute_ops(
        &mut s,
        &[
            DrawOp::FillRect {
                rect: Rect::new(0.0, 0.0, 32.0, 32.0),
                color: Rgb8::BLACK,
            },
            DrawOp::FillDisc {
                center: Point::new(16.0, 16.0),
                radius: 8.0,
                color: Rgb8::gray(255),
            },
        ],
    )
    .unwrap();
    let frame = s.frame();
    assert_eq!(frame.pixel(16, 16), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn oversized_surfaces_are_render_errors() {
    let err = CpuSurface::new(Canvas::new(70_000, 10)).unwrap_err();
    assert!(matches!(err, RawscopeError::Render(_)));
}

#[test]
fn resize_replaces_the_backing_pixmap() {
    let mut s = CpuSurface::new(Canvas::new(4, 4)).unwrap();
    s.resize(Canvas::new(8, 2)).unwrap();
    s.finish_frame().unwrap();
    let frame = s.frame();
    assert_eq!((frame.width, frame.height), (8, 2));
    assert_eq!(frame.data.len(), 8 * 2 * 4);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut px = Rgb8::new(200, 100, 0).premul_rgba(0.5).to_vec();
    unpremultiply_in_place(&mut px);
    assert!((i32::from(px[0]) - 200).abs() <= 1);
    assert!((i32::from(px[1]) - 100).abs() <= 1);
    assert_eq!(px[2], 0);
}
