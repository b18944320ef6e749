//! Animated cube and the scene that owns it.
//!
//! The mesh motion is a pure function of elapsed time (see
//! [`MeshTransform::at`]); nothing is accumulated between frames, so any
//! frame can be reproduced from its timestamp alone.

use glam::{Mat4, Quat, Vec3};
use instant::Instant;

use crate::constants::{
    BOB_AMPLITUDE, CUBE_SIZE, ROTATION_AMPLITUDE, ROTATION_X_PERIOD_DIV, ROTATION_Y_PERIOD_DIV,
};
use crate::state::{Camera, SceneLights};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshTransform {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub position_y: f32,
}

impl MeshTransform {
    /// `rotation_x = sin(t/4)/2`, `rotation_y = sin(t/2)/2`, `position_y = sin(t)/10`.
    ///
    /// Evaluated in f64: an f32 clock stops resolving single frames after a
    /// day or so of uptime.
    #[inline]
    pub fn at(elapsed_sec: f64) -> Self {
        let t = elapsed_sec;
        Self {
            rotation_x: ((t / ROTATION_X_PERIOD_DIV).sin() * ROTATION_AMPLITUDE) as f32,
            rotation_y: ((t / ROTATION_Y_PERIOD_DIV).sin() * ROTATION_AMPLITUDE) as f32,
            position_y: (t.sin() * BOB_AMPLITUDE) as f32,
        }
    }

    /// Model matrix with Euler order XYZ, matching a default scene-graph node.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(glam::EulerRot::XYZ, self.rotation_x, self.rotation_y, 0.0);
        Mat4::from_rotation_translation(rotation, Vec3::new(0.0, self.position_y, 0.0))
    }
}

/// Axis-aligned box centred on its origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for BoxGeometry {
    fn default() -> Self {
        Self {
            width: CUBE_SIZE,
            height: CUBE_SIZE,
            depth: CUBE_SIZE,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub geometry: BoxGeometry,
    pub transform: MeshTransform,
}

/// Wall-clock seconds since the scene started.
#[derive(Clone, Copy, Debug)]
pub struct SceneClock {
    started: Instant,
}

impl SceneClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// The 3D scene: one cube, two lights and a camera.
///
/// The mesh slot is empty until the renderer has built its GPU resources;
/// frames that arrive before then are skipped.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    mesh: Option<Mesh>,
    pub lights: SceneLights,
    pub camera: Camera,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach_mesh(&mut self, mesh: Mesh) {
        self.mesh = Some(mesh);
    }

    pub fn detach_mesh(&mut self) -> Option<Mesh> {
        self.mesh.take()
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Apply the transform for `elapsed_sec` to the mesh. Returns `None`
    /// without touching anything when no mesh is attached yet.
    pub fn advance(&mut self, elapsed_sec: f64) -> Option<MeshTransform> {
        let Some(mesh) = self.mesh.as_mut() else {
            log::trace!("[scene] mesh not ready, frame skipped");
            return None;
        };
        mesh.transform = MeshTransform::at(elapsed_sec);
        Some(mesh.transform)
    }
}
