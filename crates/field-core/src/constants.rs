// Shared simulation and styling constants used by both web and native frontends.

// Population
pub const PARTICLE_COUNT: usize = 80;

// Pointer interaction
pub const MOUSE_RADIUS: f32 = 200.0; // px; proximity force and glow boost only inside this
pub const MOUSE_FORCE: f32 = 0.08; // impulse scale at zero distance
pub const REPEL_EVERY: usize = 3; // every n-th particle is pushed away instead of pulled
pub const REPEL_DIRECTION: f32 = -1.0;
pub const ATTRACT_DIRECTION: f32 = 0.6;

// Relaxation
pub const RETURN_SPEED: f32 = 0.015; // spring rate toward the base position
pub const DAMPING: f32 = 0.96; // per-tick velocity retention

// Ambient drift keeps the field from ever settling completely
pub const DRIFT_AMPLITUDE: f32 = 0.01;
pub const DRIFT_FREQ_X: f32 = 0.005;
pub const DRIFT_FREQ_Y: f32 = 0.004;
pub const DRIFT_INDEX_SKEW_Y: f32 = 0.7;

// Connections
pub const CONNECTION_DISTANCE: f32 = 150.0;
pub const CONNECTION_WIDTH: f32 = 0.5;
pub const CONNECTION_SATURATION: f32 = 60.0;

// Spawn ranges
pub const SIZE_MIN: f32 = 1.5;
pub const SIZE_SPAN: f32 = 3.0;
pub const OPACITY_MIN: f32 = 0.2;
pub const OPACITY_SPAN: f32 = 0.5;
pub const PULSE_RATE_MIN: f32 = 0.01;
pub const PULSE_RATE_SPAN: f32 = 0.02;
pub const INITIAL_SPEED_SPAN: f32 = 0.3; // initial velocity per axis in [-span/2, span/2)

// Hues (degrees)
pub const WARM_HUE: f32 = 24.0; // orange
pub const COOL_HUE: f32 = 172.0; // teal

// Glow and pulse shaping
pub const GLOW_RADIUS_SCALE: f32 = 6.0; // glow radius relative to the visible core
pub const GLOW_MID_STOP: f32 = 0.4; // gradient offset (and alpha factor) of the middle stop
pub const PULSE_SIZE_SWING: f32 = 0.8;
pub const IDLE_GLOW: f32 = 0.3;
pub const IDLE_GLOW_SWING: f32 = 0.15;
pub const NEAR_GLOW_BASE: f32 = 0.6;
pub const NEAR_GLOW_SPAN: f32 = 0.4;
