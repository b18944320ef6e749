use glam::Vec3;

// Shared visual tuning constants used by the web frontend.

// Background gradient
pub const GRADIENT_RADIUS_PX: u32 = 600; // radius of the pointer-following glow
pub const GRADIENT_ACCENT: &str = "rgba(29, 78, 216, 0.15)"; // translucent blue at the centre
pub const GRADIENT_FADE_STOP_PCT: u32 = 80; // transparent from this share of the radius

// Background transition
pub const BACKGROUND_TWEEN_SEC: f64 = 0.2; // linear tween towards the latest pointer

// Mesh motion (elapsed seconds are divided by these before taking the sine)
pub const ROTATION_X_PERIOD_DIV: f64 = 4.0;
pub const ROTATION_Y_PERIOD_DIV: f64 = 2.0;
pub const ROTATION_AMPLITUDE: f64 = 0.5;
pub const BOB_AMPLITUDE: f64 = 0.1;

// Mesh geometry
pub const CUBE_SIZE: f32 = 1.0;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit control
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6; // keeps the camera off the poles
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05; // share of the pending rotation applied per frame

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;

// Skill tags fade in one after another
pub const SKILL_STAGGER_SEC: f32 = 0.1;
