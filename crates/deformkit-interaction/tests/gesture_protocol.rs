//! Gesture protocol driven through the interaction engine.

use std::sync::{Arc, Mutex};

use deformkit_contour::{
    Contour, ContourShape, CornerIndex, IrregularPolygon, Quadrilateral, RegularPolygon, Side,
};
use deformkit_core::{DevicePoint, FramePoint, Vector};
use deformkit_interaction::{
    DeformerConfig, DeformerEvent, DeformerListener, EditorEvent, Interaction,
    MultiFrameSnapshot, PathRenderer,
};

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<DeformerEvent>>,
}

impl Recorder {
    fn take(&self) -> Vec<DeformerEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl DeformerListener for Recorder {
    fn on_event(&self, event: DeformerEvent, _contour: &Contour) {
        self.events.lock().unwrap().push(event);
    }
}

fn pointer(x: f64, y: f64) -> [MultiFrameSnapshot; 1] {
    [MultiFrameSnapshot::from_offset(DevicePoint::new(x, y))]
}

/// Event for a drag that started at `from` and has moved by `(dx, dy)` so far.
fn drag(from: (f64, f64), dx: f64, dy: f64) -> EditorEvent {
    EditorEvent::at(
        DevicePoint::new(from.0 + dx, from.1 + dy),
        Vector::new(dx, dy),
    )
}

fn attached(contour: Contour) -> Interaction {
    let mut interaction = Interaction::with_default_controllers(contour, DeformerConfig::default());
    interaction.attach().unwrap();
    interaction
}

fn quad(interaction: &Interaction) -> &Quadrilateral {
    interaction.contour().as_quadrilateral().unwrap()
}

#[test]
fn test_right_handle_drag_then_swap() {
    let mut interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 200.0, 200.0).into());

    // Widen by 100.
    let grab = (200.0, 100.0);
    assert!(interaction.pointer_move(&pointer(grab.0, grab.1)));
    assert_eq!(interaction.cursor(), Some("ew-resize"));
    assert!(interaction.pan_start(&drag(grab, 0.0, 0.0)).unwrap());
    assert!(interaction.pan_move(&drag(grab, 50.0, 0.0)).unwrap());
    assert!(interaction.pan_end(&drag(grab, 100.0, 0.0)).unwrap());

    assert!((interaction.contour().width() - 300.0).abs() < 1e-2);
    let left = interaction.contour().get_point_by_side(Side::Left).unwrap();
    assert!(left.approx_eq(&DevicePoint::new(0.0, 100.0), 1e-2));
    assert_eq!(quad(&interaction).corner_index(), CornerIndex::IDENTITY);
    assert_eq!(interaction.contour().depth(), 0);

    // Pull the right edge 500 to the left, past the left edge.
    let grab = (300.0, 100.0);
    let old_right_top = quad(&interaction).corner_index().right_top;
    assert!(interaction.pointer_move(&pointer(grab.0, grab.1)));
    assert!(interaction.pan_start(&drag(grab, 0.0, 0.0)).unwrap());
    assert!(interaction.pan_end(&drag(grab, -500.0, 0.0)).unwrap());

    assert_eq!(quad(&interaction).corner_index().left_top, old_right_top);
    let left = interaction.contour().get_point_by_side(Side::Left).unwrap();
    assert!(left.approx_eq(&DevicePoint::new(-200.0, 100.0), 1e-2));
    let right = interaction.contour().get_point_by_side(Side::Right).unwrap();
    assert!(right.approx_eq(&DevicePoint::new(0.0, 100.0), 1e-2));
}

#[test]
fn test_every_step_rolls_back_to_gesture_start() {
    let mut interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 100.0, 100.0).into());
    let grab = (50.0, 50.0);
    assert!(interaction.pointer_move(&pointer(grab.0, grab.1)));
    interaction.pan_start(&drag(grab, 0.0, 0.0)).unwrap();

    interaction.pan_move(&drag(grab, 0.0, 0.0)).unwrap();
    assert_eq!(interaction.contour().depth(), 1);
    interaction.pan_move(&drag(grab, 40.0, 30.0)).unwrap();
    interaction.pan_move(&drag(grab, 0.0, 0.0)).unwrap();
    assert_eq!(interaction.contour().depth(), 1);
    let center = interaction.contour().center();
    assert!(center.approx_eq(&DevicePoint::new(50.0, 50.0), 1e-3));
}

#[test]
fn test_steps_are_cumulative_from_gesture_start() {
    let mut interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 100.0, 100.0).into());
    let grab = (50.0, 50.0);
    assert!(interaction.pointer_move(&pointer(grab.0, grab.1)));
    interaction.pan_start(&drag(grab, 0.0, 0.0)).unwrap();

    for step in 1..=5 {
        let dx = step as f64 * 10.0;
        interaction.pan_move(&drag(grab, dx, 0.0)).unwrap();
        assert_eq!(interaction.contour().depth(), 1);
        let center = interaction.contour().center();
        assert!(center.approx_eq(&DevicePoint::new(50.0 + dx, 50.0), 1e-3));
    }

    interaction.pan_end(&drag(grab, 20.0, -10.0)).unwrap();
    assert_eq!(interaction.contour().depth(), 0);
    let center = interaction.contour().center();
    assert!(center.approx_eq(&DevicePoint::new(70.0, 40.0), 1e-3));
}

#[test]
fn test_listener_sees_every_phase() {
    let mut interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 100.0, 100.0).into());
    let recorder = Arc::new(Recorder::default());
    let handle = interaction.subscribe(recorder.clone());

    let grab = (50.0, 50.0);
    interaction.pointer_move(&pointer(grab.0, grab.1));
    interaction.pan_start(&drag(grab, 0.0, 0.0)).unwrap();
    interaction.pan_move(&drag(grab, 5.0, 5.0)).unwrap();
    interaction.pan_end(&drag(grab, 10.0, 5.0)).unwrap();
    assert_eq!(
        recorder.take(),
        vec![
            DeformerEvent::GestureStarted,
            DeformerEvent::GeometryUpdated,
            DeformerEvent::GeometryUpdated,
            DeformerEvent::GestureEnded,
        ]
    );

    assert!(interaction.unsubscribe(&handle));
    assert!(!interaction.unsubscribe(&handle));
    interaction.pointer_move(&pointer(60.0, 55.0));
    interaction.pan_start(&drag((60.0, 55.0), 0.0, 0.0)).unwrap();
    interaction.pan_end(&drag((60.0, 55.0), 1.0, 0.0)).unwrap();
    assert!(recorder.take().is_empty());
}

#[test]
fn test_cancel_keeps_geometry_and_flushes() {
    let mut interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 100.0, 100.0).into());
    let recorder = Arc::new(Recorder::default());
    interaction.subscribe(recorder.clone());

    let grab = (50.0, 50.0);
    interaction.pointer_move(&pointer(grab.0, grab.1));
    interaction.pan_start(&drag(grab, 0.0, 0.0)).unwrap();
    interaction.pan_move(&drag(grab, 30.0, 0.0)).unwrap();
    assert!(interaction.cancel());
    assert!(!interaction.cancel());

    assert_eq!(interaction.contour().depth(), 0);
    assert!(!interaction.is_gesture_active());
    let center = interaction.contour().center();
    assert!(center.approx_eq(&DevicePoint::new(80.0, 50.0), 1e-3));
    assert_eq!(recorder.take().last(), Some(&DeformerEvent::GestureEnded));

    // Further moves without a new pan_start are ignored.
    assert!(!interaction.pan_move(&drag(grab, 60.0, 0.0)).unwrap());
}

#[test]
fn test_detach_ends_gesture() {
    let mut interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 100.0, 100.0).into());
    let grab = (50.0, 50.0);
    interaction.pointer_move(&pointer(grab.0, grab.1));
    interaction.pan_start(&drag(grab, 0.0, 0.0)).unwrap();
    interaction.detach().unwrap();

    assert_eq!(interaction.contour().depth(), 0);
    assert_eq!(interaction.hovered_id(), None);
    assert!(!interaction.pan_move(&drag(grab, 10.0, 0.0)).unwrap());
}

#[test]
fn test_pointer_moves_ignored_during_gesture() {
    let mut interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 100.0, 100.0).into());
    interaction.pointer_move(&pointer(50.0, 50.0));
    let hovered = interaction.hovered_id().map(str::to_string);
    interaction.pan_start(&drag((50.0, 50.0), 0.0, 0.0)).unwrap();

    assert!(!interaction.pointer_move(&pointer(0.0, 0.0)));
    assert_eq!(interaction.hovered_id().map(str::to_string), hovered);
}

#[test]
fn test_multi_touch_any_pointer_hits() {
    let mut interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 100.0, 100.0).into());
    let pointers = [
        MultiFrameSnapshot::from_offset(DevicePoint::new(900.0, 900.0)),
        MultiFrameSnapshot::from_offset(DevicePoint::new(100.0, 100.0)),
    ];
    assert!(interaction.pointer_move(&pointers));
    assert_eq!(interaction.cursor(), Some("nwse-resize"));
}

#[test]
fn test_rotate_regular_polygon() {
    let hexagon = RegularPolygon::new(DevicePoint::new(0.0, 0.0), 50.0, 6).unwrap();
    let mut interaction = attached(hexagon.into());

    // Rotation handle sits 30 above the top vertex.
    let grab = (0.0, -80.0);
    assert!(interaction.pointer_move(&pointer(grab.0, grab.1)));
    assert_eq!(interaction.cursor(), Some("grab"));
    interaction.pan_start(&drag(grab, 0.0, 0.0)).unwrap();
    // Swing to the left of the center: a quarter turn counter-clockwise.
    interaction.pan_end(&drag(grab, -80.0, 80.0)).unwrap();

    assert!((interaction.contour().radian() - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn test_vertex_drag_on_irregular_polygon() {
    let triangle = IrregularPolygon::new(vec![
        DevicePoint::new(0.0, 0.0),
        DevicePoint::new(100.0, 0.0),
        DevicePoint::new(0.0, 100.0),
    ])
    .unwrap();
    let mut interaction = attached(triangle.into());

    let grab = (100.0, 0.0);
    assert!(interaction.pointer_move(&pointer(grab.0, grab.1)));
    assert_eq!(interaction.cursor(), Some("crosshair"));
    interaction.pan_start(&drag(grab, 0.0, 0.0)).unwrap();
    interaction.pan_end(&drag(grab, 20.0, 30.0)).unwrap();

    let moved = interaction.contour().get_point(1).unwrap();
    assert!(moved.approx_eq(&DevicePoint::new(120.0, 30.0), 1e-3));
}

#[test]
fn test_render_every_controller() {
    let interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 100.0, 100.0).into());
    let mut renderer = PathRenderer::new();
    interaction.render(&mut renderer);

    assert_eq!(renderer.outlines.len(), 1);
    // Four edges, four corners and the rotation handle.
    assert_eq!(renderer.handles.len(), 9);
    assert_eq!(renderer.guides.len(), 1);
    assert_eq!(renderer.hovered_handles().count(), 0);
}

#[test]
fn test_removed_controller_is_no_longer_hit() {
    let mut interaction = attached(Quadrilateral::from_rect(0.0, 0.0, 100.0, 100.0).into());
    interaction.pointer_move(&pointer(0.0, 0.0));
    let corner = interaction.hovered_id().unwrap().to_string();

    interaction.remove_controller(&corner).unwrap();
    assert_eq!(interaction.hovered_id(), None);
    interaction.pointer_move(&pointer(0.0, 0.0));
    // The left and top edges now claim the corner point.
    assert_ne!(interaction.hovered_id(), Some(corner.as_str()));
    assert!(interaction.hovered_id().is_some());
}
