use crate::constants::{MAX_DEVICE_PIXEL_RATIO, RESIZE};
use crate::core::view::Node;
use crate::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Build live DOM nodes for a page tree.
pub fn materialize(document: &web::Document, node: &Node) -> Result<web::Node, JsValue> {
    match node {
        Node::Text(text) => Ok(document.create_text_node(text).into()),
        Node::Element(el) => {
            let dom_el = document.create_element(el.tag)?;
            for (name, value) in &el.attrs {
                dom_el.set_attribute(name, value)?;
            }
            for child in &el.children {
                dom_el.append_child(&materialize(document, child)?)?;
            }
            Ok(dom_el.into())
        }
    }
}

/// Replace everything under `mount` with the materialised tree.
pub fn mount(document: &web::Document, mount: &web::Element, node: &Node) -> Result<(), JsValue> {
    let dom = materialize(document, node)?;
    clear(mount);
    mount.append_child(&dom)?;
    Ok(())
}

pub fn clear(mount: &web::Element) {
    mount.set_text_content(None);
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing store in step with its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> Option<EventListener<web::Event>> {
    sync_canvas_backing_size(canvas);
    let window = web::window()?;
    let canvas_resize = canvas.clone();
    Some(EventListener::new(&window, RESIZE, move |_: web::Event| {
        sync_canvas_backing_size(&canvas_resize);
    }))
}
