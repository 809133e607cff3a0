use crate::{Compartments, Error, Rates};

/// Integration step used when none is given, in days.
pub const DEFAULT_STEP: f64 = 0.1;

/// Inputs of a single SEIR simulation run.
///
/// Fractions are proportions of the whole population. The run starts at day 0
/// with `1 - exposed - infectious` susceptible and nobody recovered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub rates: Rates,

    /// Initial exposed fraction.
    pub exposed: f64,

    /// Initial infectious fraction.
    pub infectious: f64,

    /// Simulation horizon in days.
    pub days: f64,

    /// Integration step in days.
    #[cfg_attr(feature = "serde", serde(default = "default_step"))]
    pub step: f64,
}

#[cfg(feature = "serde")]
fn default_step() -> f64 {
    DEFAULT_STEP
}

impl Scenario {
    /// Creates a scenario that integrates with [`DEFAULT_STEP`].
    #[must_use]
    pub fn new(rates: Rates, exposed: f64, infectious: f64, days: f64) -> Self {
        Self {
            rates,
            exposed,
            infectious,
            days,
            step: DEFAULT_STEP,
        }
    }

    /// Returns the scenario with a different integration step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Returns the state at day 0.
    #[must_use]
    pub fn initial_state(&self) -> Compartments {
        Compartments::seeded(self.exposed, self.infectious)
    }

    /// Checks the scenario before it is simulated.
    ///
    /// Checks run in order: step size, horizon, initial fractions, rates.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition:
    /// - [`Error::InvalidStepSize`] if `step` is not finite and positive.
    /// - [`Error::InvalidHorizon`] if `days` is not finite and positive.
    /// - [`Error::InvalidInitialFractions`] if either fraction is negative or
    ///   not finite, or the initial susceptible fraction would be negative.
    /// - [`Error::InvalidRate`] if any rate is negative or not finite.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::InvalidStepSize { step: self.step });
        }

        if !self.days.is_finite() || self.days <= 0.0 {
            return Err(Error::InvalidHorizon { days: self.days });
        }

        let fraction_ok = |f: f64| f.is_finite() && f >= 0.0;
        if !fraction_ok(self.exposed)
            || !fraction_ok(self.infectious)
            || self.initial_state().susceptible < 0.0
        {
            return Err(Error::InvalidInitialFractions {
                exposed: self.exposed,
                infectious: self.infectious,
            });
        }

        self.rates.validate()
    }
}
