//! Global pointer tracking.
//!
//! [`PointerTracker`] registers a handler with a [`PointerSource`] for as
//! long as it lives and mirrors every accepted event into a
//! [`Signal<PointerPosition>`]. The web frontend implements the source on top
//! of `window` pointer events; tests drive a fake one.

use crate::signal::Signal;

/// Latest pointer location in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Linear interpolation, `t` in \[0, 1\].
    #[inline]
    pub fn lerp(self, to: PointerPosition, t: f64) -> PointerPosition {
        PointerPosition {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

/// Something that can deliver pointer-move events `(client_x, client_y)`.
pub trait PointerSource {
    /// Handle that keeps a listener registered until passed to `unlisten`.
    type Registration;

    fn listen(&self, handler: Box<dyn FnMut(f64, f64)>) -> Self::Registration;
    fn unlisten(&self, registration: Self::Registration);
}

pub struct PointerTracker<S: PointerSource> {
    source: S,
    registration: Option<S::Registration>,
    position: Signal<PointerPosition>,
}

impl<S: PointerSource> PointerTracker<S> {
    /// Attach to `source`; the position starts at the origin.
    pub fn attach(source: S) -> Self {
        let position = Signal::new(PointerPosition::default());
        let sink = position.clone();
        let registration = source.listen(Box::new(move |x, y| {
            let next = PointerPosition::new(x, y);
            if !next.is_finite() {
                log::debug!("[pointer] dropped non-finite event ({x}, {y})");
                return;
            }
            sink.set(next);
        }));
        log::debug!("[pointer] tracker attached");
        Self {
            source,
            registration: Some(registration),
            position,
        }
    }

    pub fn position(&self) -> Signal<PointerPosition> {
        self.position.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.registration.is_some()
    }

    /// Deregister the listener. Safe to call more than once.
    pub fn detach(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.source.unlisten(registration);
            log::debug!("[pointer] tracker detached");
        }
    }
}

impl<S: PointerSource> Drop for PointerTracker<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
