/// Errors that can occur before Euler integration starts.
///
/// The stepping loop itself never fails; every variant is a rejected
/// precondition.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("step size must be finite and positive, got {h}")]
    InvalidStepSize { h: f64 },

    #[error("integration bounds must be finite, got t0 = {t0}, t1 = {t1}")]
    NonFiniteTime { t0: f64, t1: f64 },

    #[error("integration would take {steps} steps, more than the limit of {limit}")]
    TooManySteps { steps: f64, limit: usize },
}
