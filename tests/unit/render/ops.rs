use super::*;
use crate::{foundation::error::RawscopeError, render::recording::RecordingSurface};

fn sample_ops() -> Vec<DrawOp> {
    vec![
        DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 8.0, 8.0),
            color: Rgb8::BLACK,
        },
        DrawOp::SetOpacity(0.5),
        DrawOp::FillDisc {
            center: Point::new(4.0, 4.0),
            radius: 2.0,
            color: Rgb8::gray(255),
        },
        DrawOp::SetOpacity(1.0),
        DrawOp::StrokePolyline {
            points: vec![Point::new(0.0, 0.0), Point::new(8.0, 8.0)],
            color: Rgb8::new(255, 0, 0),
            width: 3.0,
        },
    ]
}

#[test]
fn execute_replays_ops_in_order_as_one_frame() {
    let mut surface = RecordingSurface::new(Canvas::new(8, 8));
    let ops = sample_ops();
    execute_ops(&mut surface, &ops).unwrap();
    assert_eq!(surface.frame_count(), 1);
    assert_eq!(surface.last_frame().unwrap(), ops.as_slice());
}

#[test]
fn surface_errors_propagate_unchanged() {
    let mut surface = RecordingSurface::failing(Canvas::new(8, 8), "device lost");
    let err = execute_ops(&mut surface, &sample_ops()).unwrap_err();
    assert!(matches!(err, RawscopeError::Render(ref m) if m == "device lost"));
    assert_eq!(surface.frame_count(), 0);
}

#[test]
fn execute_works_through_trait_objects() {
    let mut surface = RecordingSurface::new(Canvas::new(8, 8));
    let dyn_surface: &mut dyn DrawSurface = &mut surface;
    execute_ops(dyn_surface, &[]).unwrap();
    assert_eq!(surface.frame_count(), 1);
    assert!(surface.last_frame().unwrap().is_empty());
}

#[test]
fn rejected_resize_keeps_the_old_canvas() {
    let mut surface = RecordingSurface::new(Canvas::new(8, 8));
    surface.reject_resizes("no memory");
    let err = surface.resize(Canvas::new(16, 16)).unwrap_err();
    assert!(matches!(err, RawscopeError::Render(_)));
    assert_eq!(surface.canvas(), Canvas::new(8, 8));
    assert_eq!(surface.resize_count(), 0);
    execute_ops(&mut surface, &sample_ops()).unwrap();
    assert_eq!(surface.frame_count(), 1);
}
