use thiserror::Error;

/// Errors raised while validating host measurements.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("viewport {width}x{height} has zero area")]
    EmptyViewport { width: u32, height: u32 },
    #[error("viewport dimensions are not finite ({width} x {height})")]
    NonFiniteViewport { width: f64, height: f64 },
}
