use crate::core::confetti::confetti_burst;
use crate::core::dodge::PointerState;
use crate::dom;
use crate::view;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub pointer: Rc<RefCell<PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_yes_click(&w);
}

// Track the pointer at the window level; the handler only overwrites the
// shared cell, the frame loop does everything else.
fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut p = w.pointer.borrow_mut();
        p.x = ev.client_x() as f32;
        p.y = ev.client_y() as f32;
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_yes_click(w: &InputWiring) {
    if w.document.get_element_by_id("btn-yes").is_none() {
        log::warn!("[view] no #btn-yes on this page; celebration disabled");
        return;
    }
    let doc = w.document.clone();

    dom::add_click_listener(&w.document, "btn-yes", move || {
        log::info!("[celebrate] yes clicked; swapping cards and throwing confetti");
        view::swap_to_success(&doc);

        let mut rng = StdRng::from_entropy();
        let pieces = confetti_burst(&mut rng);
        view::spawn_confetti(&doc, &pieces);
    });
}
