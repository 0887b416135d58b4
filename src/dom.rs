use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Viewport size in CSS pixels, the same coordinate space pointer events
/// report in.
pub fn viewport_size() -> Vec2 {
    match web::window() {
        Some(w) => {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Vec2::new(width as f32, height as f32)
        }
        None => Vec2::ZERO,
    }
}

/// Detach `el` from the document after `delay_ms`. Removing an
/// already-detached node is a no-op, so overlapping removals are harmless.
pub fn remove_after(el: web::Element, delay_ms: i32) {
    if let Some(w) = web::window() {
        let cb = wasm_bindgen::closure::Closure::once_into_js(move || el.remove());
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms,
        );
    }
}
