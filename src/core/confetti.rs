use rand::prelude::*;

pub const CONFETTI_COUNT: usize = 100;
pub const CONFETTI_LIFETIME_MS: f64 = 5000.0;
pub const CONFETTI_FALL_MIN_SECS: f32 = 3.0;
pub const CONFETTI_FALL_SPAN_SECS: f32 = 2.0;

pub const CONFETTI_COLORS: &[&str] = &["#f43f5e", "#ec4899", "#d946ef", "#a855f7", "#ffffff"];

/// One particle of a celebration burst, described in CSS-ready units: a
/// horizontal drop position in `vw`, a fall duration in seconds, and uniform
/// opacity/scale jitter.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub color: &'static str,
    pub left_vw: f32,
    pub fall_secs: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// Roll one full burst. Fall durations land in [3, 5) seconds, so every
/// piece finishes falling before the `CONFETTI_LIFETIME_MS` removal sweep.
pub fn confetti_burst(rng: &mut StdRng) -> Vec<ConfettiPiece> {
    (0..CONFETTI_COUNT)
        .map(|_| ConfettiPiece {
            color: CONFETTI_COLORS.choose(rng).copied().unwrap_or("#ffffff"),
            left_vw: rng.gen::<f32>() * 100.0,
            fall_secs: CONFETTI_FALL_MIN_SECS + rng.gen::<f32>() * CONFETTI_FALL_SPAN_SECS,
            opacity: rng.gen(),
            scale: rng.gen(),
        })
        .collect()
}
