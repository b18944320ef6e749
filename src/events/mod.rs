pub mod listener;
pub mod pointer;

pub use listener::EventListener;
pub use pointer::{wire_orbit_handlers, OrbitWiring, WindowPointerSource};
