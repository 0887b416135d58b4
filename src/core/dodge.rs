// Repulsion engine for the "No" button: per-frame physics that shove the
// button away from the pointer, plus the floating-phrase picker.
//
// Pure Rust, no platform APIs, and no crate:: imports: the host-side tests
// include! this file directly, so it has to stay self-contained and free of
// inner attributes.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

// Repulsion tuning
pub const ACTIVATION_RADIUS: f32 = 200.0; // pointer distance at which the button starts fleeing
pub const REPEL_SPEED: f32 = 15.0; // impulse scale at zero distance
pub const FRICTION: f32 = 0.9; // per-frame velocity retention
pub const EDGE_PADDING: f32 = 20.0; // keep-out band along the viewport edges
pub const BOUNCE_DAMPING: f32 = 0.5; // velocity kept (sign-flipped) on an edge hit

// Corner escape
pub const CORNER_MARGIN: f32 = 100.0; // corner zone depth along each edge
pub const CORNER_PULL: f32 = 0.02; // pull-to-screen-center strength inside a corner

// Floating phrases
pub const PHRASE_RADIUS: f32 = 80.0; // pointer distance that triggers a phrase
pub const PHRASE_COOLDOWN_MS: f64 = 500.0;
pub const PHRASE_LIFETIME_MS: f64 = 1000.0;
pub const PHRASE_HISTORY_MAX: usize = 4;

pub const PHRASES: &[&str] = &[
    "shoooo shoooo",
    "waaaa nuuuuu",
    "staaaaahpp",
    "meee loaaaf stop joking",
    "nuuuuuu shoooo shoooo",
    "hmpf",
    "kadate mo ba si purple?",
    "may ka data kang opps? hmpf!",
];

// The pool must outnumber the history window or the draw below could run out
// of candidates.
const _: () = assert!(PHRASES.len() > PHRASE_HISTORY_MAX);

/// Latest pointer position in viewport coordinates. Overwritten on every move
/// notification; the frame loop reads whatever was written last.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Lifecycle of the animated button. `Docked` mirrors normal layout;
/// `Floating` is entered on the first close pointer approach and is terminal
/// for the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DodgePhase {
    Docked,
    Floating,
}

#[derive(Clone, Debug)]
pub struct DodgeParams {
    pub activation_radius: f32,
    pub repel_speed: f32,
    pub phrase_radius: f32,
    pub phrase_cooldown_ms: f64,
    pub corner_margin: f32,
    pub corner_pull: f32,
    pub friction: f32,
    pub edge_padding: f32,
    pub bounce_damping: f32,
    pub phrases: &'static [&'static str],
}

impl Default for DodgeParams {
    fn default() -> Self {
        Self {
            activation_radius: ACTIVATION_RADIUS,
            repel_speed: REPEL_SPEED,
            phrase_radius: PHRASE_RADIUS,
            phrase_cooldown_ms: PHRASE_COOLDOWN_MS,
            corner_margin: CORNER_MARGIN,
            corner_pull: CORNER_PULL,
            friction: FRICTION,
            edge_padding: EDGE_PADDING,
            bounce_damping: BOUNCE_DAMPING,
            phrases: PHRASES,
        }
    }
}

/// Everything the engine reads from the page for one frame. Layout origin and
/// size are re-measured every frame so layout and resize changes between
/// frames are picked up.
#[derive(Clone, Copy, Debug)]
pub struct FrameSample {
    pub pointer: Vec2,
    pub layout_origin: Vec2,
    pub size: Vec2,
    pub viewport: Vec2,
    pub now_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DodgeEvent {
    /// First close approach; the button leaves layout flow for good.
    Detached,
    /// Show `text` at the button's current top-left corner for
    /// `PHRASE_LIFETIME_MS`.
    Phrase { text: &'static str, origin: Vec2 },
}

/// Velocity impulse a pointer adds to an element centered at `center`. Zero
/// at and beyond `radius`, growing linearly toward `speed` at zero distance.
/// Direction follows `atan2`, so a pointer dead on the center pushes along
/// +x.
#[inline]
pub fn repel_impulse(center: Vec2, pointer: Vec2, radius: f32, speed: f32) -> Vec2 {
    let delta = center - pointer;
    let distance = delta.length();
    if distance >= radius {
        return Vec2::ZERO;
    }
    let force = (radius - distance) / radius;
    let angle = delta.y.atan2(delta.x);
    Vec2::new(angle.cos(), angle.sin()) * (force * speed)
}

/// True when the element sits within `margin` of a horizontal edge and a
/// vertical edge at once. Right and bottom margins account for element size.
#[inline]
pub fn in_corner_zone(origin: Vec2, size: Vec2, viewport: Vec2, margin: f32) -> bool {
    let near_left = origin.x < margin;
    let near_right = origin.x > viewport.x - size.x - margin;
    let near_top = origin.y < margin;
    let near_bottom = origin.y > viewport.y - size.y - margin;
    (near_left || near_right) && (near_top || near_bottom)
}

/// Velocity nudge toward the middle of the screen for a cornered element,
/// zero anywhere else. Keeps the button escapable no matter how it is herded.
#[inline]
pub fn corner_pull(origin: Vec2, size: Vec2, viewport: Vec2, margin: f32, pull: f32) -> Vec2 {
    if !in_corner_zone(origin, size, viewport, margin) {
        return Vec2::ZERO;
    }
    let center = origin + size * 0.5;
    (viewport * 0.5 - center) * pull
}

/// Clamp `pos` so the element stays `padding` inside the viewport on every
/// side. Each clamped axis flips its velocity component and scales it by
/// `bounce` (an inelastic bounce).
pub fn apply_bounds(
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
    viewport: Vec2,
    padding: f32,
    bounce: f32,
) {
    if pos.x < padding {
        pos.x = padding;
        vel.x *= -bounce;
    }
    if pos.y < padding {
        pos.y = padding;
        vel.y *= -bounce;
    }
    if pos.x + size.x > viewport.x - padding {
        pos.x = viewport.x - size.x - padding;
        vel.x *= -bounce;
    }
    if pos.y + size.y > viewport.y - padding {
        pos.y = viewport.y - size.y - padding;
        vel.y *= -bounce;
    }
}

// Effective history bound: always short of the pool so the complement the
// next pick draws from stays non-empty, whatever pool a variant configures.
#[inline]
pub fn history_cap(pool_len: usize) -> usize {
    PHRASE_HISTORY_MAX.min(pool_len.saturating_sub(1))
}

pub struct DodgeEngine {
    pub params: DodgeParams,
    phase: DodgePhase,
    pos: Vec2,
    vel: Vec2,
    recent: SmallVec<[usize; PHRASE_HISTORY_MAX]>,
    last_phrase_ms: Option<f64>,
    rng: StdRng,
}

impl DodgeEngine {
    pub fn new(params: DodgeParams, seed: u64) -> Self {
        Self {
            params,
            phase: DodgePhase::Docked,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            recent: SmallVec::new(),
            last_phrase_ms: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> DodgePhase {
        self.phase
    }

    pub fn is_floating(&self) -> bool {
        self.phase == DodgePhase::Floating
    }

    /// Top-left corner of the element in viewport coordinates.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Recently shown phrases, oldest first.
    pub fn recent_phrases(&self) -> Vec<&'static str> {
        self.recent
            .iter()
            .map(|&i| self.params.phrases[i])
            .collect()
    }

    /// Advance the simulation by one displayed frame.
    ///
    /// While `Docked` the position tracks the measured layout origin; the
    /// first pointer approach inside the activation radius flips the phase to
    /// `Floating` (emitting `Detached` exactly once) and from then on the
    /// position belongs to the physics. Velocity accumulates across frames,
    /// decays under friction, and bounces inelastically off the padded
    /// viewport bounds.
    pub fn tick(&mut self, sample: &FrameSample, out_events: &mut Vec<DodgeEvent>) {
        if self.phase == DodgePhase::Docked {
            self.pos = sample.layout_origin;
        }

        let center = self.pos + sample.size * 0.5;
        let distance = center.distance(sample.pointer);

        if distance < self.params.activation_radius {
            if self.phase == DodgePhase::Docked {
                self.phase = DodgePhase::Floating;
                out_events.push(DodgeEvent::Detached);
            }
            self.vel += repel_impulse(
                center,
                sample.pointer,
                self.params.activation_radius,
                self.params.repel_speed,
            );
            if distance < self.params.phrase_radius {
                self.try_spawn_phrase(sample.now_ms, out_events);
            }
        }

        // Independent of the pointer: a cornered button gets a steady shove
        // back toward the middle of the screen.
        self.vel += corner_pull(
            self.pos,
            sample.size,
            sample.viewport,
            self.params.corner_margin,
            self.params.corner_pull,
        );

        self.vel *= self.params.friction;
        self.pos += self.vel;
        apply_bounds(
            &mut self.pos,
            &mut self.vel,
            sample.size,
            sample.viewport,
            self.params.edge_padding,
            self.params.bounce_damping,
        );
    }

    // Rate-limited by the sampled wall clock; attempts inside the cooldown
    // window are dropped, not queued. The first qualifying approach always
    // spawns.
    fn try_spawn_phrase(&mut self, now_ms: f64, out_events: &mut Vec<DodgeEvent>) {
        if self.params.phrases.is_empty() {
            return;
        }
        if let Some(last) = self.last_phrase_ms {
            if now_ms - last < self.params.phrase_cooldown_ms {
                return;
            }
        }
        self.last_phrase_ms = Some(now_ms);

        let candidates: SmallVec<[usize; 8]> = (0..self.params.phrases.len())
            .filter(|i| !self.recent.contains(i))
            .collect();
        let idx = candidates.choose(&mut self.rng).copied().unwrap_or(0);

        self.recent.push(idx);
        if self.recent.len() > history_cap(self.params.phrases.len()) {
            self.recent.remove(0);
        }

        out_events.push(DodgeEvent::Phrase {
            text: self.params.phrases[idx],
            origin: self.pos,
        });
    }
}
