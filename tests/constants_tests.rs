// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../crates/portfolio-core/src/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_ids_are_distinct() {
    let ids = [
        MOUNT_ID,
        CONTENT_SCRIPT_ID,
        portfolio_core::view::BACKGROUND_LAYER_ID,
        portfolio_core::view::SCENE_CANVAS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn index_html_provides_mount_point() {
    let html = include_str!("../index.html");
    assert!(html.contains(&format!("id=\"{}\"", MOUNT_ID)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn background_constants_are_sane() {
    assert_eq!(GRADIENT_RADIUS_PX, 600);
    assert!(GRADIENT_FADE_STOP_PCT > 0 && GRADIENT_FADE_STOP_PCT <= 100);
    assert!(BACKGROUND_TWEEN_SEC > 0.0 && BACKGROUND_TWEEN_SEC < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_have_logical_relationships() {
    // The cube sits between the clip planes
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_EYE.z + CUBE_SIZE);
    assert!(CAMERA_EYE.z - CUBE_SIZE > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_amplitudes_are_small() {
    // Bobbing never pushes the cube out of a 300px-high hero view
    assert!(BOB_AMPLITUDE < CUBE_SIZE as f64);
    assert!(ROTATION_AMPLITUDE <= 0.5);
    assert!(ROTATION_X_PERIOD_DIV > ROTATION_Y_PERIOD_DIV);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_damping_is_a_fraction() {
    assert!(ORBIT_DAMPING_FACTOR > 0.0 && ORBIT_DAMPING_FACTOR <= 1.0);
}

#[test]
fn web_package_parses_json_only_through_core() {
    let manifest = include_str!("../Cargo.toml");
    let deps = manifest
        .split("\n[dependencies]")
        .nth(1)
        .and_then(|rest| rest.split("\n[").next())
        .expect("root [dependencies] table");
    assert!(deps.contains("portfolio-core"));
    assert!(!deps.contains("serde_json"));
}
