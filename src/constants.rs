/// Web frontend wiring and rendering constants.
///
/// DOM ids live here so `index.html`, the composer and the event wiring
/// agree on them.
// Element the page tree is mounted into
pub const MOUNT_ID: &str = "app";

// Optional runtime override for the embedded content payload
pub const CONTENT_SCRIPT_ID: &str = "portfolio-content";

// Pointer event names
pub const POINTER_MOVE: &str = "pointermove";
pub const POINTER_DOWN: &str = "pointerdown";
pub const POINTER_UP: &str = "pointerup";
pub const POINTER_CANCEL: &str = "pointercancel";
pub const RESIZE: &str = "resize";

// Upper bound for the canvas backing store scale
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
