#![cfg(target_arch = "wasm32")]
use crate::core::dodge::{DodgeEngine, DodgeParams, PointerState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod core;
mod dom;
mod events;
mod frame;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shoo-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let pointer = Rc::new(RefCell::new(PointerState::default()));

    // Document-level wiring works regardless of which cards this page has.
    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        pointer: pointer.clone(),
    });

    // Without the dodge target the celebration path above still runs.
    let button = match document.get_element_by_id("btn-no") {
        Some(el) => el,
        None => {
            log::warn!("[dodge] no #btn-no on this page; dodge loop disabled");
            return Ok(());
        }
    };

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let engine = Rc::new(RefCell::new(DodgeEngine::new(DodgeParams::default(), seed)));
    log::info!(
        "[dodge] engine ready; {} phrases in the pool",
        engine.borrow().params.phrases.len()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine: engine.clone(),
        pointer: pointer.clone(),
        document,
        button,
        started: Instant::now(),
        events: Vec::new(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
