use contagion_core::StepIntegrable;

/// Population proportions in each compartment.
///
/// The four fields sum to one. Stepping with [`Flows`] only moves mass between
/// compartments, so the sum is preserved up to rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compartments {
    pub susceptible: f64,
    pub exposed: f64,
    pub infectious: f64,
    pub recovered: f64,
}

impl Compartments {
    /// Creates the initial state for the given exposed and infectious fractions.
    ///
    /// Everyone else is susceptible and nobody has recovered yet.
    #[must_use]
    pub fn seeded(exposed: f64, infectious: f64) -> Self {
        Self {
            susceptible: 1.0 - exposed - infectious,
            exposed,
            infectious,
            recovered: 0.0,
        }
    }

    /// Returns the sum of all four compartments.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.susceptible + self.exposed + self.infectious + self.recovered
    }
}

/// Rate of change of each compartment per unit time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flows {
    pub susceptible: f64,
    pub exposed: f64,
    pub infectious: f64,
    pub recovered: f64,
}

impl Flows {
    /// Returns the net flow across all compartments, zero up to rounding.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.susceptible + self.exposed + self.infectious + self.recovered
    }
}

impl StepIntegrable<f64> for Compartments {
    type Derivative = Flows;

    fn step(&self, derivative: Flows, dt: f64) -> Self {
        Self {
            susceptible: self.susceptible + dt * derivative.susceptible,
            exposed: self.exposed + dt * derivative.exposed,
            infectious: self.infectious + dt * derivative.infectious,
            recovered: self.recovered + dt * derivative.recovered,
        }
    }
}
