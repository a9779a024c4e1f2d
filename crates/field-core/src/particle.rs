use crate::constants::*;
use crate::state::Viewport;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Two-colour palette: every particle is either warm or cool for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hue {
    Warm,
    Cool,
}

impl Hue {
    #[inline]
    pub fn degrees(self) -> f32 {
        match self {
            Hue::Warm => WARM_HUE,
            Hue::Cool => COOL_HUE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub base: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    /// Latent base alpha; the renderer derives intensity from motion instead.
    pub opacity: f32,
    pub hue: Hue,
    pub pulse_phase: f32,
    pub pulse_rate: f32,
    /// Pointer distance measured before the last tick moved the particle.
    /// Rendering reads this so the glow matches the force that was applied.
    pub pointer_distance: Option<f32>,
}

impl Particle {
    /// Spawn a particle uniformly inside `viewport`, anchored where it starts.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let size = viewport.size();
        let position = Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * INITIAL_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * INITIAL_SPEED_SPAN,
        );
        Self {
            position,
            base: position,
            velocity,
            size: SIZE_MIN + rng.gen::<f32>() * SIZE_SPAN,
            opacity: OPACITY_MIN + rng.gen::<f32>() * OPACITY_SPAN,
            hue: if rng.gen_bool(0.5) { Hue::Warm } else { Hue::Cool },
            pulse_rate: PULSE_RATE_MIN + rng.gen::<f32>() * PULSE_RATE_SPAN,
            pulse_phase: rng.gen::<f32>() * TAU,
            pointer_distance: None,
        }
    }

    /// A particle resting at `at` with no velocity. Handy for hosts that lay
    /// out particles themselves and for tests.
    pub fn resting(at: Vec2, hue: Hue) -> Self {
        Self {
            position: at,
            base: at,
            velocity: Vec2::ZERO,
            size: SIZE_MIN,
            opacity: OPACITY_MIN,
            hue,
            pulse_phase: 0.0,
            pulse_rate: PULSE_RATE_MIN,
            pointer_distance: None,
        }
    }

    /// Brightness/size oscillation in [-1, 1] at `frame`.
    #[inline]
    pub fn pulse(&self, frame: u64) -> f32 {
        (frame as f64 * self.pulse_rate as f64 + self.pulse_phase as f64).sin() as f32
    }
}
