/// Contract violations reported by the simulator. Nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FlockError {
    #[error("speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),

    #[error("neighbor radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),

    #[error("area size must be finite and non-negative, got {width}x{height}")]
    InvalidAreaSize { width: f32, height: f32 },

    #[error("margin must be finite and non-negative, got {0}")]
    InvalidMargin(f32),

    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f32),

    #[cfg(feature = "std")]
    #[error("could not seed the random source: {0}")]
    Entropy(getrandom::Error),
}
