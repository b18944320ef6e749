#![cfg(target_arch = "wasm32")]
use crate::core::view::{self, BACKGROUND_LAYER_ID, SCENE_CANVAS_ID};
use crate::core::{BackgroundStyle, Camera, OrbitControls, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod constants;
mod content;
mod core;
mod dom;
mod events;
mod frame;
mod render;

use constants::MOUNT_ID;

/// Everything attached while the page is mounted. Dropping it tears the page
/// down: listeners come off, the frame loop stops and the DOM is cleared.
struct App {
    mount: web::Element,
    // Field order is drop order: stop frames before releasing what they use.
    _frames: frame::FrameLoop,
    _orbit: events::OrbitWiring,
    _resize: Option<events::EventListener<web::Event>>,
    _pointer: PointerTracker<events::WindowPointerSource>,
}

impl Drop for App {
    fn drop(&mut self) {
        dom::clear(&self.mount);
        log::info!("portfolio-web unmounted");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = mount() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Tear the page down. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount() {
    // Take first so App::drop runs without the slot borrowed.
    let app = APP.with(|slot| slot.borrow_mut().take());
    drop(app);
}

/// Mount the page unless it already is.
#[wasm_bindgen]
pub fn remount() {
    if let Err(e) = mount() {
        log::error!("init error: {:?}", e);
    }
}

fn mount() -> anyhow::Result<()> {
    if APP.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }
    let app = init()?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mount = document
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MOUNT_ID))?;

    let content = content::load(&document)?;

    // Pointer tracking starts before the first paint so the initial tree
    // already carries the current background.
    let pointer = PointerTracker::attach(events::WindowPointerSource::new(window.clone()));
    let position = pointer.position();
    let tree = view::compose(&content, &BackgroundStyle::for_pointer(position.get()));
    dom::mount(&document, &mount, &tree).map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let layer = document
        .get_element_by_id(BACKGROUND_LAYER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", BACKGROUND_LAYER_ID))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(SCENE_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SCENE_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let resize = dom::wire_canvas_resize(&canvas);

    let orbit = Rc::new(RefCell::new(OrbitControls::for_camera(&Camera::default())));
    let orbit_wiring = events::wire_orbit_handlers(&canvas, orbit.clone());

    let background = background::BackgroundAnimator::new(layer, &position);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        canvas,
        background,
        orbit,
    )));

    // Frames run right away; the cube joins once WebGPU is up.
    spawn_local(frame::init_gpu(Rc::downgrade(&frame_ctx)));
    let frames = frame::start_loop(frame_ctx);

    log::info!("portfolio-web mounted");
    Ok(App {
        mount,
        _frames: frames,
        _orbit: orbit_wiring,
        _resize: resize,
        _pointer: pointer,
    })
}
