use contagion_solvers::transient::euler;

/// Errors returned when a simulation cannot be run.
///
/// Every variant except [`Error::Integration`] is a rejected input, detected
/// before any stepping happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("step size must be finite and positive, got {step}")]
    InvalidStepSize { step: f64 },

    #[error("simulation horizon must be finite and positive, got {days} days")]
    InvalidHorizon { days: f64 },

    #[error(
        "initial fractions must be non-negative and sum to at most 1, \
         got exposed = {exposed}, infectious = {infectious}"
    )]
    InvalidInitialFractions { exposed: f64, infectious: f64 },

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("population must be positive")]
    InvalidPopulation,

    #[error("integration failed")]
    Integration(#[from] euler::Error),
}
