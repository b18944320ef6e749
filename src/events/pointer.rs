use crate::constants::{POINTER_CANCEL, POINTER_DOWN, POINTER_MOVE, POINTER_UP};
use crate::core::{OrbitControls, PointerSource};
use crate::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `pointermove` on the window, reported in client (viewport) coordinates.
pub struct WindowPointerSource {
    window: web::Window,
}

impl WindowPointerSource {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl PointerSource for WindowPointerSource {
    type Registration = EventListener<web::PointerEvent>;

    fn listen(&self, mut handler: Box<dyn FnMut(f64, f64)>) -> Self::Registration {
        EventListener::new(&self.window, POINTER_MOVE, move |ev: web::PointerEvent| {
            handler(ev.client_x() as f64, ev.client_y() as f64);
        })
    }

    fn unlisten(&self, mut registration: Self::Registration) {
        registration.remove();
    }
}

/// Canvas listeners driving the orbit control. Dropping this removes them.
pub struct OrbitWiring {
    _listeners: Vec<EventListener<web::PointerEvent>>,
}

pub fn wire_orbit_handlers(
    canvas: &web::HtmlCanvasElement,
    orbit: Rc<RefCell<OrbitControls>>,
) -> OrbitWiring {
    let down = {
        let orbit = orbit.clone();
        let canvas_capture = canvas.clone();
        EventListener::new(canvas, POINTER_DOWN, move |ev: web::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            orbit
                .borrow_mut()
                .pointer_down(ev.client_x() as f32, ev.client_y() as f32);
            _ = canvas_capture.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        })
    };

    let moved = {
        let orbit = orbit.clone();
        let canvas_rect = canvas.clone();
        EventListener::new(canvas, POINTER_MOVE, move |ev: web::PointerEvent| {
            let mut controls = orbit.borrow_mut();
            if !controls.is_dragging() {
                return;
            }
            let height = canvas_rect.get_bounding_client_rect().height() as f32;
            controls.pointer_move(ev.client_x() as f32, ev.client_y() as f32, height);
        })
    };

    let release = |event: &'static str| {
        let orbit = orbit.clone();
        let canvas_capture = canvas.clone();
        EventListener::new(canvas, event, move |ev: web::PointerEvent| {
            orbit.borrow_mut().pointer_up();
            _ = canvas_capture.release_pointer_capture(ev.pointer_id());
        })
    };
    let up = release(POINTER_UP);
    let cancel = release(POINTER_CANCEL);

    log::info!("[orbit] wired (zoom and pan disabled)");
    OrbitWiring {
        _listeners: vec![down, moved, up, cancel],
    }
}
