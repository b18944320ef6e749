use crate::core::view::background_layer_style;
use crate::core::{BackgroundTween, PointerPosition, Signal, Subscription};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Drives the fixed background layer towards the latest pointer position.
///
/// Pointer updates only retarget the tween; the layer itself is repainted
/// from the frame loop, at most once per frame and only when the rendered
/// style string changed.
pub struct BackgroundAnimator {
    layer: web::Element,
    tween: Rc<RefCell<BackgroundTween>>,
    clock: Instant,
    last_style: String,
    _subscription: Subscription,
}

impl BackgroundAnimator {
    pub fn new(layer: web::Element, position: &Signal<PointerPosition>) -> Self {
        let clock = Instant::now();
        let initial = BackgroundTween::new(position.get());
        let last_style = background_layer_style(&initial.sample(0.0));
        let tween = Rc::new(RefCell::new(initial));

        let tween_sub = tween.clone();
        let subscription = position.subscribe(move |pos| {
            tween_sub
                .borrow_mut()
                .retarget(*pos, clock.elapsed().as_secs_f64());
        });

        Self {
            layer,
            tween,
            clock,
            last_style,
            _subscription: subscription,
        }
    }

    pub fn frame(&mut self) {
        let now = self.clock.elapsed().as_secs_f64();
        let style = background_layer_style(&self.tween.borrow().sample(now));
        if style == self.last_style {
            return;
        }
        if let Err(e) = self.layer.set_attribute("style", &style) {
            log::warn!("[background] style update failed: {:?}", e);
            return;
        }
        self.last_style = style;
    }
}
