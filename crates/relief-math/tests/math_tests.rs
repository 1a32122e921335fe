//! Integration tests for relief-math.

use relief_math::{DomainBounds, FaultLine, Vec2};
use relief_types::ReliefError;

// ─── DomainBounds Tests ───────────────────────────────────────

#[test]
fn centered_bounds_extents() {
    let b = DomainBounds::centered(1.0);
    assert_eq!(b.width(), 2.0);
    assert_eq!(b.height(), 2.0);
    assert!(b.validate().is_ok());
}

#[test]
fn default_bounds_span_reference_scene() {
    let b = DomainBounds::default();
    assert_eq!(b, DomainBounds::new(-50.0, 50.0, -50.0, 50.0));
}

#[test]
fn contains_is_inclusive() {
    let b = DomainBounds::new(0.0, 4.0, -1.0, 1.0);
    assert!(b.contains(0.0, -1.0));
    assert!(b.contains(4.0, 1.0));
    assert!(!b.contains(4.1, 0.0));
}

#[test]
fn inverted_x_rejected() {
    let b = DomainBounds::new(1.0, -1.0, -1.0, 1.0);
    assert!(matches!(b.validate(), Err(ReliefError::InvalidDomain(_))));
}

#[test]
fn empty_y_rejected() {
    let b = DomainBounds::new(-1.0, 1.0, 3.0, 3.0);
    assert!(matches!(b.validate(), Err(ReliefError::InvalidDomain(_))));
}

#[test]
fn nan_bounds_rejected() {
    let b = DomainBounds::new(f32::NAN, 1.0, -1.0, 1.0);
    assert!(b.validate().is_err());
}

#[test]
fn overflowing_width_rejected() {
    let b = DomainBounds::new(-3.0e38, 3.0e38, -1.0, 1.0);
    assert!(b.width().is_infinite());
    assert!(matches!(b.validate(), Err(ReliefError::InvalidDomain(_))));
}

#[test]
fn overflowing_height_rejected() {
    let b = DomainBounds::new(-1.0, 1.0, -f32::MAX, f32::MAX);
    assert!(matches!(b.validate(), Err(ReliefError::InvalidDomain(_))));
}

// ─── FaultLine Tests ──────────────────────────────────────────

#[test]
fn side_sign_follows_normal() {
    let line = FaultLine::new(Vec2::ZERO, Vec2::X);
    assert!(line.side(1.0, 5.0) > 0.0);
    assert!(line.side(-1.0, 5.0) < 0.0);
    assert_eq!(line.side(0.0, 5.0), 0.0);
}

#[test]
fn distance_to_axis_aligned_line() {
    let line = FaultLine::new(Vec2::new(2.0, 0.0), Vec2::X);
    assert!((line.distance(5.0, 9.0) - 3.0).abs() < 1e-6);
    assert!((line.distance(-1.0, -4.0) - 3.0).abs() < 1e-6);
}

#[test]
fn distance_to_diagonal_line() {
    let line = FaultLine::from_angle(Vec2::ZERO, std::f32::consts::FRAC_PI_4);
    // (1, 1) lies sqrt(2) along the normal.
    assert!((line.distance(1.0, 1.0) - 2.0f32.sqrt()).abs() < 1e-5);
    // (1, -1) lies on the line.
    assert!(line.distance(1.0, -1.0) < 1e-6);
}

#[test]
fn distance_ignores_normal_length() {
    let unit = FaultLine::new(Vec2::new(0.5, 0.5), Vec2::new(0.6, 0.8));
    let scaled = FaultLine::new(Vec2::new(0.5, 0.5), Vec2::new(3.0, 4.0));
    let d_unit = unit.distance(-2.0, 1.0);
    let d_scaled = scaled.distance(-2.0, 1.0);
    assert!((d_unit - d_scaled).abs() < 1e-5);
}

#[test]
fn from_angle_is_unit() {
    for k in 0..16 {
        let line = FaultLine::from_angle(Vec2::ZERO, k as f32 * 0.4);
        assert!((line.normal.length() - 1.0).abs() < 1e-6);
    }
}
