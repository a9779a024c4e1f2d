use crate::params::FieldParams;
use crate::particle::Particle;
use crate::physics;
use crate::render::{self, FrameStats, Surface};
use crate::state::{ColorScheme, Pointer, Viewport};
use rand::Rng;

/// Owns the particle population and the frame counter.
pub struct ParticleField {
    pub params: FieldParams,
    particles: Vec<Particle>,
    frame: u64,
}

impl ParticleField {
    pub fn new(params: FieldParams) -> Self {
        Self {
            params,
            particles: Vec::new(),
            frame: 0,
        }
    }

    /// Populate the field the first time a non-empty viewport is seen.
    /// Returns `true` only when particles were created by this call.
    pub fn seed<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> bool {
        if self.is_seeded() || viewport.is_empty() {
            return false;
        }
        self.particles = (0..self.params.particle_count)
            .map(|_| Particle::spawn(rng, viewport))
            .collect();
        log::info!(
            "[field] seeded {} particles over {}x{}",
            self.particles.len(),
            viewport.width,
            viewport.height
        );
        true
    }

    #[inline]
    pub fn is_seeded(&self) -> bool {
        !self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the frame counter and integrate one tick.
    pub fn step(&mut self, pointer: Pointer) {
        self.frame += 1;
        physics::integrate(&mut self.particles, &self.params, pointer, self.frame);
    }

    /// Paint the current state at the current frame.
    pub fn paint<S: Surface + ?Sized>(&self, scheme: ColorScheme, surface: &mut S) -> FrameStats {
        render::paint(&self.particles, &self.params, self.frame, scheme, surface)
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(FieldParams::default())
    }
}
