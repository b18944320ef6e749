//! Rotate-only orbit control for the scene camera.
//!
//! Dragging spins the camera around a fixed target on a sphere of fixed
//! radius. Zoom and pan are disabled: wheel and pan gestures are reported as
//! unhandled so the page keeps scrolling normally.
//!
//! Drags only queue rotation. [`OrbitControls::update`] runs once per frame
//! and, with damping on, applies a fixed share of what is still pending, so
//! the camera eases out after the pointer stops.

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

use crate::constants::{ORBIT_DAMPING_FACTOR, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED};
use crate::state::Camera;

#[derive(Clone, Debug)]
pub struct OrbitControls {
    target: Vec3,
    radius: f32,
    /// Angle around the up axis, 0 looking down -Z.
    azimuth: f32,
    /// Angle from the up axis.
    polar: f32,
    pub rotate_speed: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub enable_damping: bool,
    pub damping_factor: f32,
    /// Rotation queued by drags and not yet applied: (azimuth, polar).
    pending: Vec2,
    drag_from: Option<Vec2>,
}

/// Pending rotation below this is dropped.
const SETTLE_EPSILON: f32 = 1e-6;

impl OrbitControls {
    /// Controls that keep `camera`'s current eye as the starting orbit point.
    pub fn for_camera(camera: &Camera) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target: camera.target,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            rotate_speed: ORBIT_ROTATE_SPEED,
            enable_zoom: false,
            enable_pan: false,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            pending: Vec2::ZERO,
            drag_from: None,
        }
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Whether no queued rotation is left to apply.
    pub fn is_settled(&self) -> bool {
        self.pending == Vec2::ZERO
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.drag_from = Some(Vec2::new(x, y));
    }

    /// Queue rotation for the drag delta. A full viewport height of travel is
    /// one turn. Returns whether any rotation was queued.
    pub fn pointer_move(&mut self, x: f32, y: f32, viewport_height: f32) -> bool {
        let Some(from) = self.drag_from else {
            return false;
        };
        let to = Vec2::new(x, y);
        let delta = to - from;
        self.drag_from = Some(to);
        if !delta.is_finite() || delta == Vec2::ZERO {
            return false;
        }
        let h = viewport_height.max(1.0);
        self.rotate(
            TAU * delta.x / h * self.rotate_speed,
            TAU * delta.y / h * self.rotate_speed,
        );
        true
    }

    pub fn pointer_up(&mut self) {
        self.drag_from = None;
    }

    /// Zoom request. Ignored while zoom is disabled.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        if !self.enable_zoom || !delta_y.is_finite() || delta_y == 0.0 {
            return false;
        }
        let scale = if delta_y > 0.0 { 1.05 } else { 1.0 / 1.05 };
        self.radius = (self.radius * scale).max(f32::EPSILON);
        true
    }

    /// Pan request. Ignored while pan is disabled.
    pub fn pan(&mut self, offset: Vec3) -> bool {
        if !self.enable_pan || !offset.is_finite() {
            return false;
        }
        self.target += offset;
        true
    }

    fn rotate(&mut self, left: f32, up: f32) {
        self.pending -= Vec2::new(left, up);
    }

    /// Apply queued rotation for one frame. Returns whether the camera moved.
    pub fn update(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        let step = if self.enable_damping {
            self.pending * self.damping_factor.clamp(0.0, 1.0)
        } else {
            self.pending
        };
        self.azimuth = (self.azimuth + step.x).rem_euclid(TAU);
        self.polar = (self.polar + step.y).clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);

        self.pending -= step;
        if self.pending.abs().max_element() < SETTLE_EPSILON {
            self.pending = Vec2::ZERO;
        }
        true
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.radius * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    /// Write the orbit position into `camera`.
    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.eye();
        camera.target = self.target;
    }
}
