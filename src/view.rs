use crate::core::confetti::{ConfettiPiece, CONFETTI_LIFETIME_MS};
use crate::dom;
use glam::Vec2;
use web_sys as web;

/// Swap the question card for the success card. Both class flips are
/// idempotent and the swap is never reversed.
#[inline]
pub fn swap_to_success(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("question-box") {
        _ = el.class_list().add_1("hidden");
    }
    if let Some(el) = document.get_element_by_id("success-box") {
        _ = el.class_list().remove_1("hidden");
    }
}

/// Drop a floating phrase on the page at `origin` (viewport coordinates) and
/// schedule its removal after `lifetime_ms`. The float-up motion itself is
/// CSS, keyed off the `shoo-text` class.
pub fn spawn_phrase(document: &web::Document, text: &str, origin: Vec2, lifetime_ms: f64) {
    let el = match document.create_element("span") {
        Ok(el) => el,
        Err(_) => return,
    };
    el.set_text_content(Some(text));
    _ = el.class_list().add_1("shoo-text");
    _ = el.set_attribute("style", &format!("left:{:.1}px;top:{:.1}px", origin.x, origin.y));
    if let Some(body) = document.body() {
        _ = body.append_child(&el);
        dom::remove_after(el, lifetime_ms as i32);
    }
}

/// Materialize a whole confetti burst. Each piece gets its roll baked into an
/// inline style; the fall animation comes from the `confetti` class.
pub fn spawn_confetti(document: &web::Document, pieces: &[ConfettiPiece]) {
    let body = match document.body() {
        Some(b) => b,
        None => return,
    };
    for piece in pieces {
        let el = match document.create_element("div") {
            Ok(el) => el,
            Err(_) => continue,
        };
        _ = el.class_list().add_1("confetti");
        _ = el.set_attribute(
            "style",
            &format!(
                "background-color:{};left:{:.2}vw;animation-duration:{:.2}s;opacity:{:.2};transform:scale({:.2})",
                piece.color, piece.left_vw, piece.fall_secs, piece.opacity, piece.scale
            ),
        );
        _ = body.append_child(&el);
        dom::remove_after(el, CONFETTI_LIFETIME_MS as i32);
    }
}
