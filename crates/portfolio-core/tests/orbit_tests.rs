// Host-side tests for the rotate-only orbit control.

use glam::Vec3;
use portfolio_core::{Camera, OrbitControls};
use std::f32::consts::{FRAC_PI_2, PI};

fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

/// Run frames until the damped rotation has been fully applied.
fn settle(orbit: &mut OrbitControls) {
    for _ in 0..1_000 {
        if !orbit.update() {
            return;
        }
    }
    panic!("orbit did not settle");
}

#[test]
fn starts_at_camera_eye() {
    let camera = Camera::default();
    let orbit = OrbitControls::for_camera(&camera);
    assert!(approx_vec(orbit.eye(), Vec3::new(0.0, 0.0, 5.0)));
    assert!((orbit.radius() - 5.0).abs() < 1e-6);
    assert!((orbit.polar() - FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn move_without_press_does_nothing() {
    let mut orbit = OrbitControls::for_camera(&Camera::default());
    assert!(!orbit.pointer_move(100.0, 0.0, 300.0));
    assert!(approx_vec(orbit.eye(), Vec3::new(0.0, 0.0, 5.0)));
}

#[test]
fn quarter_height_drag_turns_quarter_circle() {
    let mut orbit = OrbitControls::for_camera(&Camera::default());
    orbit.pointer_down(0.0, 0.0);
    // 75px over a 300px viewport is a quarter turn to the left.
    assert!(orbit.pointer_move(75.0, 0.0, 300.0));
    orbit.pointer_up();
    settle(&mut orbit);
    assert!(approx_vec(orbit.eye(), Vec3::new(-5.0, 0.0, 0.0)));
    assert!((orbit.radius() - 5.0).abs() < 1e-6);
}

#[test]
fn polar_angle_is_clamped() {
    let mut orbit = OrbitControls::for_camera(&Camera::default());
    orbit.pointer_down(0.0, 0.0);
    orbit.pointer_move(0.0, 10_000.0, 300.0);
    settle(&mut orbit);
    assert!(orbit.polar() > 0.0);
    assert!(orbit.polar() < PI);
    assert!(orbit.eye().is_finite());
    assert!((orbit.eye().length() - 5.0).abs() < 1e-3);
}

#[test]
fn release_ends_drag() {
    let mut orbit = OrbitControls::for_camera(&Camera::default());
    orbit.pointer_down(10.0, 10.0);
    assert!(orbit.is_dragging());
    orbit.pointer_up();
    assert!(!orbit.is_dragging());
    assert!(!orbit.pointer_move(200.0, 200.0, 300.0));
}

#[test]
fn zoom_and_pan_are_disabled() {
    let mut orbit = OrbitControls::for_camera(&Camera::default());
    assert!(!orbit.wheel(120.0));
    assert!(!orbit.pan(Vec3::new(1.0, 0.0, 0.0)));
    assert!((orbit.radius() - 5.0).abs() < 1e-6);
    assert!(approx_vec(orbit.eye(), Vec3::new(0.0, 0.0, 5.0)));
}

#[test]
fn apply_moves_camera_but_keeps_target() {
    let mut camera = Camera::default();
    let mut orbit = OrbitControls::for_camera(&camera);
    orbit.pointer_down(0.0, 0.0);
    orbit.pointer_move(-75.0, 0.0, 300.0);
    settle(&mut orbit);
    orbit.apply(&mut camera);
    assert!(approx_vec(camera.eye, Vec3::new(5.0, 0.0, 0.0)));
    assert_eq!(camera.target, Vec3::ZERO);
}

#[test]
fn drag_eases_out_over_frames() {
    let mut orbit = OrbitControls::for_camera(&Camera::default());
    assert!(orbit.enable_damping);
    orbit.pointer_down(0.0, 0.0);
    orbit.pointer_move(75.0, 0.0, 300.0);
    orbit.pointer_up();

    // Nothing moves until a frame runs.
    assert!(approx_vec(orbit.eye(), Vec3::new(0.0, 0.0, 5.0)));
    assert!(!orbit.is_settled());

    // The first frame applies only the damping share of a quarter turn.
    assert!(orbit.update());
    let first = (orbit.azimuth() - 2.0 * PI).abs();
    assert!((first - FRAC_PI_2 * orbit.damping_factor).abs() < 1e-5);

    // Later frames keep turning after release, then stop.
    assert!(orbit.update());
    assert!((orbit.azimuth() - 2.0 * PI).abs() > first);
    settle(&mut orbit);
    assert!(orbit.is_settled());
    assert!(!orbit.update());
    assert!(approx_vec(orbit.eye(), Vec3::new(-5.0, 0.0, 0.0)));
}

#[test]
fn undamped_rotation_lands_in_one_frame() {
    let mut orbit = OrbitControls::for_camera(&Camera::default());
    orbit.enable_damping = false;
    orbit.pointer_down(0.0, 0.0);
    orbit.pointer_move(75.0, 0.0, 300.0);
    assert!(orbit.update());
    assert!(orbit.is_settled());
    assert!(approx_vec(orbit.eye(), Vec3::new(-5.0, 0.0, 0.0)));
}
