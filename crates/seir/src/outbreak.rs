use crate::{Curves, Error, Rates, Scenario, simulate};

/// An outbreak described in head counts, as a user would enter it.
///
/// Counts are converted to population fractions and the transmission rate is
/// derived from the basic reproduction number as `beta = R0 * gamma`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outbreak {
    /// Total population size.
    pub population: u64,

    /// Initially exposed individuals.
    pub exposed: u64,

    /// Initially infectious individuals.
    pub infectious: u64,

    /// Number of days to simulate.
    pub days: u32,

    /// Rate at which exposed individuals become infectious.
    pub alpha: f64,

    /// Recovery rate.
    pub gamma: f64,

    /// Basic reproduction number, `R0`.
    pub reproduction_number: f64,
}

impl Default for Outbreak {
    /// Ten million people with ten thousand exposed and two thousand
    /// infectious, a 5.5 day incubation, a 3 day infectious period, and `R0 = 1`.
    fn default() -> Self {
        Self {
            population: 10_000_000,
            exposed: 10_000,
            infectious: 2_000,
            days: 140,
            alpha: 1.0 / 5.5,
            gamma: 1.0 / 3.0,
            reproduction_number: 1.0,
        }
    }
}

impl Outbreak {
    /// Converts the outbreak into a validated [`Scenario`] with the default step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPopulation`] for an empty population, or any
    /// error from [`Scenario::validate`] (for example, more exposed and
    /// infectious individuals than people).
    #[allow(clippy::cast_precision_loss)]
    pub fn scenario(&self) -> Result<Scenario, Error> {
        if self.population == 0 {
            return Err(Error::InvalidPopulation);
        }

        let population = self.population as f64;
        let rates =
            Rates::from_reproduction_number(self.reproduction_number, self.alpha, self.gamma);
        let scenario = Scenario::new(
            rates,
            self.exposed as f64 / population,
            self.infectious as f64 / population,
            f64::from(self.days),
        );

        scenario.validate()?;
        Ok(scenario)
    }

    /// Converts and simulates the outbreak.
    ///
    /// # Errors
    ///
    /// Returns an error if [`Outbreak::scenario`] fails.
    pub fn simulate(&self) -> Result<Curves, Error> {
        simulate(&self.scenario()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_matches_reference_setup() {
        let scenario = Outbreak::default().scenario().unwrap();

        assert_eq!(scenario.exposed, 0.001);
        assert_eq!(scenario.infectious, 0.0002);
        assert_eq!(scenario.days, 140.0);
        assert_eq!(scenario.step, 0.1);
        assert_relative_eq!(scenario.rates.beta, 1.0 / 3.0);
        assert_relative_eq!(scenario.rates.basic_reproduction_number(), 1.0);
    }

    #[test]
    fn beta_scales_with_reproduction_number() {
        let outbreak = Outbreak {
            reproduction_number: 1.8,
            ..Outbreak::default()
        };

        let scenario = outbreak.scenario().unwrap();
        assert_relative_eq!(scenario.rates.beta, 0.6);
        assert_relative_eq!(scenario.rates.alpha, 1.0 / 5.5);
    }

    #[test]
    fn rejects_empty_population() {
        let outbreak = Outbreak {
            population: 0,
            ..Outbreak::default()
        };
        assert_eq!(outbreak.scenario(), Err(Error::InvalidPopulation));
    }

    #[test]
    fn rejects_more_cases_than_people() {
        let outbreak = Outbreak {
            population: 100,
            exposed: 80,
            infectious: 30,
            ..Outbreak::default()
        };
        assert_eq!(
            outbreak.scenario(),
            Err(Error::InvalidInitialFractions {
                exposed: 0.8,
                infectious: 0.3
            })
        );
    }

    #[test]
    fn rejects_zero_days() {
        let outbreak = Outbreak {
            days: 0,
            ..Outbreak::default()
        };
        assert_eq!(
            outbreak.simulate(),
            Err(Error::InvalidHorizon { days: 0.0 })
        );
    }

    #[test]
    fn simulates_whole_horizon() {
        let curves = Outbreak::default().simulate().unwrap();

        assert_eq!(curves.len(), 1402);
        assert_eq!(curves.time[0], 0.0);
        assert_relative_eq!(*curves.time.last().unwrap(), 140.1, epsilon = 1e-9);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_json() {
        let json = r#"{
            "population": 1000,
            "exposed": 10,
            "infectious": 5,
            "days": 60,
            "alpha": 0.2,
            "gamma": 0.25,
            "reproduction_number": 2.0
        }"#;

        let outbreak: Outbreak = serde_json::from_str(json).unwrap();
        let scenario = outbreak.scenario().unwrap();

        assert_eq!(scenario.exposed, 0.01);
        assert_eq!(scenario.infectious, 0.005);
        assert_eq!(scenario.rates.beta, 0.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn scenario_step_defaults_when_missing() {
        let json = r#"{
            "rates": { "beta": 0.6, "alpha": 0.2, "gamma": 0.25 },
            "exposed": 0.001,
            "infectious": 0.0,
            "days": 30
        }"#;

        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.step, crate::DEFAULT_STEP);

        let round_trip: Scenario =
            serde_json::from_str(&serde_json::to_string(&scenario).unwrap()).unwrap();
        assert_eq!(round_trip, scenario);
    }
}
