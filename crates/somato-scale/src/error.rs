use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScaleError {
    #[error("inverted reference band: minimum {min} exceeds maximum {max}")]
    InvertedBand { min: f64, max: f64 },

    #[error("non-finite reference band bound: [{min}, {max}]")]
    NonFiniteBand { min: f64, max: f64 },

    #[error("reference range is missing a bound")]
    IncompleteRange,
}
