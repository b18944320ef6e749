use crate::background::BackgroundAnimator;
use crate::core::{Mesh, OrbitControls, Scene, SceneClock};
use crate::dom;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame reads or writes.
///
/// The background and the cube are independent: the background follows the
/// pointer, the cube only follows its own clock.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub background: BackgroundAnimator,
    pub scene: Scene,
    pub clock: SceneClock,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        background: BackgroundAnimator,
        orbit: Rc<RefCell<OrbitControls>>,
    ) -> Self {
        Self {
            canvas,
            background,
            scene: Scene::new(),
            clock: SceneClock::start(),
            orbit,
            gpu: None,
        }
    }

    /// Hand over the renderer; the cube exists from the next frame on.
    pub fn attach_gpu(&mut self, gpu: render::GpuState, mesh: Mesh) {
        self.gpu = Some(gpu);
        self.scene.attach_mesh(mesh);
        log::info!("[frame] mesh attached");
    }

    pub fn frame(&mut self) {
        self.background.frame();
        // Damping runs on frame time even while the cube is still loading.
        self.orbit.borrow_mut().update();

        let Some(transform) = self.scene.advance(self.clock.elapsed_secs()) else {
            return;
        };
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        self.orbit.borrow().apply(&mut self.scene.camera);
        let w = self.canvas.width();
        let h = self.canvas.height();
        gpu.resize_if_needed(w, h);
        self.scene.camera.set_viewport(w, h);

        if let Err(e) = gpu.render(&self.scene.camera, &self.scene.lights, &transform) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Initialise WebGPU and hand it to the frame context if that is still alive.
pub async fn init_gpu(frame_ctx: Weak<RefCell<FrameContext>>) {
    let Some(ctx) = frame_ctx.upgrade() else {
        return;
    };
    let canvas = ctx.borrow().canvas.clone();
    drop(ctx);

    dom::sync_canvas_backing_size(&canvas);
    let mesh = Mesh::default();
    match render::GpuState::new(&canvas, &mesh.geometry).await {
        Ok(gpu) => match frame_ctx.upgrade() {
            Some(ctx) => {
                ctx.borrow_mut().attach_gpu(gpu, mesh);
            }
            None => log::info!("[frame] unmounted before WebGPU was ready"),
        },
        Err(e) => log::error!("WebGPU init error: {:?}", e),
    }
}

type TickClosure = Closure<dyn FnMut(f64)>;

/// A running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and frees the callback.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<TickClosure>>>,
    pending: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &RefCell<Option<TickClosure>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_next = tick.clone();
    let pending_next = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        pending_next.set(None);
        frame_ctx.borrow_mut().frame();
        pending_next.set(request_frame(&tick_next));
    }) as Box<dyn FnMut(f64)>));

    pending.set(request_frame(&tick));
    FrameLoop { tick, pending }
}

impl FrameLoop {
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
