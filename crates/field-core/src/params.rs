use crate::constants::*;

/// Tunables for the simulation. Hosts never supply these; `Default` carries
/// the values the field ships with.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    pub mouse_radius: f32,
    pub mouse_force: f32,
    pub repel_every: usize,
    pub repel_direction: f32,
    pub attract_direction: f32,
    pub return_speed: f32,
    pub damping: f32,
    pub drift_amplitude: f32,
    pub connection_distance: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            mouse_radius: MOUSE_RADIUS,
            mouse_force: MOUSE_FORCE,
            repel_every: REPEL_EVERY,
            repel_direction: REPEL_DIRECTION,
            attract_direction: ATTRACT_DIRECTION,
            return_speed: RETURN_SPEED,
            damping: DAMPING,
            drift_amplitude: DRIFT_AMPLITUDE,
            connection_distance: CONNECTION_DISTANCE,
        }
    }
}

impl FieldParams {
    /// Impulse direction multiplier for the particle at `index`.
    #[inline]
    pub fn direction_for(&self, index: usize) -> f32 {
        if self.repel_every > 0 && index % self.repel_every == 0 {
            self.repel_direction
        } else {
            self.attract_direction
        }
    }

    /// Linear falloff in (0, 1] for distances strictly inside the mouse radius.
    #[inline]
    pub fn proximity(&self, distance: f32) -> Option<f32> {
        (distance < self.mouse_radius).then(|| (self.mouse_radius - distance) / self.mouse_radius)
    }
}
