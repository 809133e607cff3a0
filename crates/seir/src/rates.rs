use contagion_core::OdeSystem;

use crate::{Compartments, Error, Flows};

/// Rate constants of the SEIR model, each per unit time.
///
/// `Rates` is the model's derivative function: it implements [`OdeSystem`]
/// for [`Compartments`] and holds no other state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rates {
    /// Transmission rate.
    pub beta: f64,

    /// Rate at which exposed individuals become infectious (1 / incubation period).
    pub alpha: f64,

    /// Recovery rate (1 / infectious period).
    pub gamma: f64,
}

impl Rates {
    /// Creates rates from their raw values.
    #[must_use]
    pub fn new(beta: f64, alpha: f64, gamma: f64) -> Self {
        Self { beta, alpha, gamma }
    }

    /// Creates rates from a basic reproduction number, with `beta = r0 * gamma`.
    #[must_use]
    pub fn from_reproduction_number(r0: f64, alpha: f64, gamma: f64) -> Self {
        Self::new(r0 * gamma, alpha, gamma)
    }

    /// Returns `beta / gamma`.
    ///
    /// The result is infinite or NaN when `gamma` is zero.
    #[must_use]
    pub fn basic_reproduction_number(&self) -> f64 {
        self.beta / self.gamma
    }

    /// Evaluates the flow between compartments for the given state.
    ///
    /// Each transfer term leaves one compartment and enters the next, so the
    /// returned flows cancel exactly in exact arithmetic.
    #[must_use]
    pub fn flows(&self, state: &Compartments) -> Flows {
        let infection = self.beta * state.susceptible * state.infectious;
        let onset = self.alpha * state.exposed;
        let recovery = self.gamma * state.infectious;

        Flows {
            susceptible: -infection,
            exposed: infection - onset,
            infectious: onset - recovery,
            recovered: recovery,
        }
    }

    /// Checks that every rate is finite and non-negative.
    ///
    /// Zero is accepted, which freezes the corresponding transfer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRate`] naming the first offending rate.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [("beta", self.beta), ("alpha", self.alpha), ("gamma", self.gamma)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

impl OdeSystem<Compartments> for Rates {
    fn derivative(&self, _time: f64, state: &Compartments) -> Flows {
        self.flows(state)
    }
}
