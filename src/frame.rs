use crate::core::dodge::{DodgeEngine, DodgeEvent, FrameSample, PointerState, PHRASE_LIFETIME_MS};
use crate::dom;
use crate::view;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<DodgeEngine>>,
    pub pointer: Rc<RefCell<PointerState>>,

    pub document: web::Document,
    pub button: web::Element,

    pub started: Instant,
    pub events: Vec<DodgeEvent>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Re-measure every frame; layout and resize changes feed straight
        // into the next tick.
        let rect = self.button.get_bounding_client_rect();
        let sample = FrameSample {
            pointer: self.pointer.borrow().as_vec2(),
            layout_origin: Vec2::new(rect.left() as f32, rect.top() as f32),
            size: Vec2::new(rect.width() as f32, rect.height() as f32),
            viewport: dom::viewport_size(),
            now_ms: self.started.elapsed().as_secs_f64() * 1000.0,
        };

        self.events.clear();
        self.engine.borrow_mut().tick(&sample, &mut self.events);

        for ev in &self.events {
            match ev {
                DodgeEvent::Detached => {
                    log::info!("[dodge] pointer got close; button leaves layout flow");
                }
                DodgeEvent::Phrase { text, origin } => {
                    view::spawn_phrase(&self.document, text, *origin, PHRASE_LIFETIME_MS);
                }
            }
        }

        let engine = self.engine.borrow();
        if engine.is_floating() {
            let pos = engine.position();
            // The whole style attribute is rewritten each frame, so the size
            // measured above has to come along with the position.
            _ = self.button.set_attribute(
                "style",
                &format!(
                    "position:fixed;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;margin:0",
                    pos.x, pos.y, sample.size.x, sample.size.y
                ),
            );
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
