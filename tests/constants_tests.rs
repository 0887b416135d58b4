// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod dodge {
    include!("../src/core/dodge.rs");
}
mod confetti {
    include!("../src/core/confetti.rs");
}

use confetti::*;
use dodge::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Distances and speeds should be positive
    assert!(ACTIVATION_RADIUS > 0.0);
    assert!(PHRASE_RADIUS > 0.0);
    assert!(REPEL_SPEED > 0.0);
    assert!(CORNER_MARGIN > 0.0);
    assert!(EDGE_PADDING >= 0.0);

    // Damping factors should keep motion bounded
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(BOUNCE_DAMPING > 0.0 && BOUNCE_DAMPING <= 1.0);
    assert!(CORNER_PULL > 0.0 && CORNER_PULL < 1.0);

    // Timers should be positive
    assert!(PHRASE_COOLDOWN_MS > 0.0);
    assert!(PHRASE_LIFETIME_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The phrase band sits strictly inside the activation band
    assert!(PHRASE_RADIUS < ACTIVATION_RADIUS);

    // The corner zone is deeper than the edge keep-out band
    assert!(CORNER_MARGIN > EDGE_PADDING);

    // The phrase pool outnumbers the no-repeat window
    assert!(PHRASES.len() > PHRASE_HISTORY_MAX);
    assert!(PHRASE_HISTORY_MAX > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn confetti_constants_are_consistent() {
    assert!(CONFETTI_COUNT > 0);
    assert!(!CONFETTI_COLORS.is_empty());

    // The slowest possible fall still finishes before the removal sweep
    let slowest_ms = (CONFETTI_FALL_MIN_SECS + CONFETTI_FALL_SPAN_SECS) as f64 * 1000.0;
    assert!(slowest_ms <= CONFETTI_LIFETIME_MS);
}

#[test]
fn default_params_mirror_the_constants() {
    let params = DodgeParams::default();
    assert_eq!(params.activation_radius, ACTIVATION_RADIUS);
    assert_eq!(params.repel_speed, REPEL_SPEED);
    assert_eq!(params.phrase_radius, PHRASE_RADIUS);
    assert_eq!(params.phrase_cooldown_ms, PHRASE_COOLDOWN_MS);
    assert_eq!(params.corner_margin, CORNER_MARGIN);
    assert_eq!(params.corner_pull, CORNER_PULL);
    assert_eq!(params.friction, FRICTION);
    assert_eq!(params.edge_padding, EDGE_PADDING);
    assert_eq!(params.bounce_damping, BOUNCE_DAMPING);
    assert_eq!(params.phrases.len(), PHRASES.len());
}
