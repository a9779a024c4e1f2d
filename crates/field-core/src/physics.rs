//! Per-tick integration.
//!
//! `integrate` is a pure function of the particle slice, the pointer and the
//! frame counter. The colour scheme never enters here, so the same inputs
//! always produce the same motion regardless of theme.

use crate::constants::{DRIFT_FREQ_X, DRIFT_FREQ_Y, DRIFT_INDEX_SKEW_Y};
use crate::params::FieldParams;
use crate::particle::Particle;
use crate::state::Pointer;
use glam::Vec2;

/// Advance every particle by one tick.
///
/// Force order per particle: pointer impulse, spring toward base, ambient
/// drift, then damping of the summed velocity and an explicit Euler step.
/// Damping must see the sum of this tick's contributions. The pre-move
/// pointer distance is kept on each particle for the renderer.
pub fn integrate(particles: &mut [Particle], params: &FieldParams, pointer: Pointer, frame: u64) {
    for (i, p) in particles.iter_mut().enumerate() {
        p.pointer_distance = pointer.distance_to(p.position);
        p.velocity += pointer_impulse(p.position, i, params, pointer);
        p.velocity += (p.base - p.position) * params.return_speed;
        p.velocity += ambient_drift(i, frame, params.drift_amplitude);
        p.velocity *= params.damping;
        p.position += p.velocity;
    }
}

/// Impulse from the pointer on the particle at `index`; zero outside the
/// radius, when the pointer is away, or at exactly zero distance.
#[inline]
pub fn pointer_impulse(position: Vec2, index: usize, params: &FieldParams, pointer: Pointer) -> Vec2 {
    let Pointer::At(target) = pointer else {
        return Vec2::ZERO;
    };
    let delta = target - position;
    let dist = delta.length();
    if dist <= 0.0 || !dist.is_finite() {
        return Vec2::ZERO;
    }
    match params.proximity(dist) {
        Some(force) => delta / dist * force * params.mouse_force * params.direction_for(index),
        None => Vec2::ZERO,
    }
}

#[inline]
pub fn ambient_drift(index: usize, frame: u64, amplitude: f32) -> Vec2 {
    // f64 phase so the drift stays smooth past 2^24 ticks
    let t = frame as f64;
    let i = index as f64;
    Vec2::new(
        (t * DRIFT_FREQ_X as f64 + i).sin() as f32 * amplitude,
        (t * DRIFT_FREQ_Y as f64 + i * DRIFT_INDEX_SKEW_Y as f64).cos() as f32 * amplitude,
    )
}
