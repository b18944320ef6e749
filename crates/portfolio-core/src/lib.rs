//! Platform-independent half of the portfolio: content model, pointer
//! tracking, background tween, scene animation and the page tree.
//!
//! Nothing here touches `web-sys`, so all of it is testable on the host.

pub mod background;
pub mod constants;
pub mod content;
pub mod error;
pub mod mesh;
pub mod orbit;
pub mod pointer;
pub mod signal;
pub mod state;
pub mod view;

pub use background::*;
pub use content::*;
pub use error::*;
pub use mesh::*;
pub use orbit::*;
pub use pointer::*;
pub use signal::*;
pub use state::*;
