//! Quadrilateral edits: translation, side swap and transactional rollback.

use deformkit_contour::{ContourShape, Quadrilateral, Side};
use deformkit_core::{DevicePoint, FramePoint, Vector};
use proptest::prelude::*;

fn square() -> Quadrilateral {
    Quadrilateral::from_rect(0.0, 0.0, 200.0, 200.0)
}

fn corners(q: &Quadrilateral) -> [DevicePoint; 4] {
    [q.left_top(), q.right_top(), q.right_bottom(), q.left_bottom()]
}

proptest! {
    #[test]
    fn translation_moves_every_corner(dx in -1000.0..1000.0f64, dy in -1000.0..1000.0f64) {
        let mut q = Quadrilateral::from_rect(-40.0, 25.0, 160.0, 90.0);
        let before = corners(&q);
        let (width, height) = (q.width(), q.height());
        let v = Vector::new(dx, dy);

        let result = q.add_vector(&v, Side::All).unwrap();

        prop_assert!(!result.switched_side);
        for (old, new) in before.iter().zip(corners(&q).iter()) {
            prop_assert!(new.approx_eq(&old.add_vector(&v), 1e-6 + 1e-3));
        }
        prop_assert!((q.width() - width).abs() < 1e-9);
        prop_assert!((q.height() - height).abs() < 1e-9);
    }

    #[test]
    fn drag_shorter_than_width_never_swaps(dx in -199.0..199.0f64) {
        let mut q = square();
        let result = q.add_vector(&Vector::new(dx, 0.0), Side::Left).unwrap();
        prop_assert!(!result.switched_side);
    }
}

#[test]
fn test_pulling_left_through_right_swaps() {
    let mut q = square();
    let right_top = q.right_top();

    let result = q.add_vector(&Vector::new(250.0, 0.0), Side::Left).unwrap();

    assert!(result.switched_side, "left edge pulled past the right edge should swap");
    assert_eq!(q.left_top(), right_top);
    assert!(
        (q.width() - 50.0).abs() < 1e-3,
        "width should be 50, got {}",
        q.width()
    );
}

#[test]
fn test_pushing_left_outward_never_swaps() {
    let mut q = square();
    let left_top = q.left_top();

    let result = q.add_vector(&Vector::new(-250.0, 0.0), Side::Left).unwrap();

    assert!(!result.switched_side);
    assert!(q
        .left_top()
        .approx_eq(&left_top.add_vector(&Vector::new(-250.0, 0.0)), 1e-3));
    assert!((q.width() - 450.0).abs() < 1e-3);
}

#[test]
fn test_right_handle_scenario() {
    let mut q = square();

    let result = q.add_vector(&Vector::new(100.0, 0.0), Side::Right).unwrap();
    assert!(!result.switched_side);
    assert!((q.width() - 300.0).abs() < 1e-3, "width should be 300, got {}", q.width());
    assert!(q.left_top().approx_eq(&DevicePoint::new(0.0, 0.0), 1e-3));
    assert!(q.left_bottom().approx_eq(&DevicePoint::new(0.0, 200.0), 1e-3));

    let index = q.corner_index();
    let result = q.add_vector(&Vector::new(-500.0, 0.0), Side::Right).unwrap();
    assert!(result.switched_side);
    // The corner that belonged to the right edge now opens the left edge.
    assert_eq!(q.corner_index().left_top, index.right_top);
    assert!(q.left_top().approx_eq(&DevicePoint::new(-200.0, 0.0), 1e-3));
    assert!((q.width() - 200.0).abs() < 1e-3);
}

#[test]
fn test_corner_drag_through_both_axes() {
    let mut q = square();
    let result = q
        .add_vector(&Vector::new(300.0, 300.0), Side::LeftTop)
        .unwrap();
    assert!(result.switched_side);
    assert!(q.corner_index().is_permutation());
    // The dragged corner ends up as the right-bottom one.
    assert!(q
        .right_bottom()
        .approx_eq(&DevicePoint::new(300.0, 300.0), 1e-3));
}

#[test]
fn test_restore_is_bit_identical() {
    let mut q = square();
    q.rotate(0.3).unwrap();
    let before = corners(&q);
    let index = q.corner_index();

    q.save();
    q.add_vector(&Vector::new(400.0, 12.0), Side::Left).unwrap();
    q.rotate(1.0).unwrap();
    assert!(q.restore());

    assert_eq!(corners(&q), before);
    assert_eq!(q.corner_index(), index);
    assert_eq!(q.depth(), 0);
}

#[test]
fn test_pop_commits_nested_edit() {
    let mut q = square();
    q.save();
    q.save();
    q.add_vector(&Vector::new(10.0, 0.0), Side::Right).unwrap();
    let edited = corners(&q);

    assert!(q.pop());
    assert_eq!(q.depth(), 1);
    assert_eq!(corners(&q), edited);

    // The remaining restore point predates the edit.
    assert!(q.restore());
    assert_eq!(q.right_top(), DevicePoint::new(200.0, 0.0));
    assert!(!q.restore());
}

#[test]
fn test_apply_flushes_stack() {
    let mut q = square();
    q.save();
    q.save();
    q.add_vector(&Vector::new(0.0, 30.0), Side::Bottom).unwrap();
    q.apply();
    assert_eq!(q.depth(), 0);
    assert!(!q.restore());
    assert!((q.height() - 230.0).abs() < 1e-3);
}
