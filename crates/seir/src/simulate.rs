use contagion_solvers::transient::euler::{self, Solution};
use tracing::debug;

use crate::{Compartments, Curves, Error, Scenario};

/// Runs a scenario from day 0 to `days` and returns one series per compartment.
///
/// The final sample lands on `days` or up to one step past it.
///
/// # Errors
///
/// Returns an error if the scenario fails [`Scenario::validate`], or
/// [`Error::Integration`] if it would take more than [`euler::MAX_STEPS`] steps.
pub fn simulate(scenario: &Scenario) -> Result<Curves, Error> {
    let solution = trajectory(scenario)?;
    Ok(Curves::from(&solution))
}

/// Runs a scenario and returns the raw trajectory of states.
///
/// # Errors
///
/// Returns an error if the scenario fails [`Scenario::validate`], or
/// [`Error::Integration`] if it would take more than [`euler::MAX_STEPS`] steps.
pub fn trajectory(scenario: &Scenario) -> Result<Solution<Compartments>, Error> {
    if let Err(err) = scenario.validate() {
        debug!(%err, "rejected SEIR scenario");
        return Err(err);
    }

    debug!(
        r0 = scenario.rates.basic_reproduction_number(),
        days = scenario.days,
        step = scenario.step,
        "simulating SEIR scenario"
    );

    let solution = euler::integrate(
        &scenario.rates,
        0.0,
        scenario.initial_state(),
        scenario.days,
        scenario.step,
    )?;

    Ok(solution)
}
