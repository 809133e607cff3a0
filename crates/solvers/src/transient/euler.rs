//! Forward Euler solver for first-order ODE systems.
//!
//! This module provides a minimal fixed-step explicit Euler integrator for
//! `dx/dt = f(t, x)`:
//!
//! ```text
//! x_{k+1} = x_k + h * f(t_k, x_k),    t_k = t0 + k * h
//! ```
//!
//! The solver takes `1 + floor((t1 - t0) / h)` steps. The final sample
//! therefore lands on `t1` or past it by less than `h`; it is never clipped.
//! There is no error control or adaptivity, so truncation error is `O(h)`.
//!
//! # Example
//!
//! ```
//! use contagion_solvers::transient::euler;
//!
//! let decay = |_t: f64, x: &f64| -x;
//! let solution = euler::integrate(&decay, 0.0, 1.0, 1.0, 0.5)?;
//!
//! let times: Vec<f64> = solution.times().collect();
//! assert_eq!(times, vec![0.0, 0.5, 1.0, 1.5]);
//! # Ok::<(), euler::Error>(())
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Sample, Solution, Status};

use contagion_core::{Observer, OdeSystem, StepIntegrable};
use tracing::{debug, trace};

/// Largest number of steps a single run may take.
pub const MAX_STEPS: usize = 100_000_000;

/// Upper bound on history slots reserved up front.
const MAX_PREALLOCATED: usize = 1 << 20;

/// Returns the number of steps taken when integrating from `t0` to `t1`.
///
/// This is `1 + floor((t1 - t0) / h)`, or zero when `t1` precedes `t0` by
/// more than a full step.
///
/// # Errors
///
/// Returns [`Error::InvalidStepSize`] if `h` is not finite and positive,
/// [`Error::NonFiniteTime`] if either bound is not finite, and
/// [`Error::TooManySteps`] if the run would exceed [`MAX_STEPS`].
pub fn step_count(t0: f64, t1: f64, h: f64) -> Result<usize, Error> {
    if !h.is_finite() || h <= 0.0 {
        return Err(Error::InvalidStepSize { h });
    }
    if !t0.is_finite() || !t1.is_finite() {
        return Err(Error::NonFiniteTime { t0, t1 });
    }

    let whole_steps = ((t1 - t0) / h).floor();
    if whole_steps < 0.0 {
        return Ok(0);
    }

    // Also catches a span/step ratio that overflowed to infinity.
    #[allow(clippy::cast_precision_loss)]
    let limit = MAX_STEPS as f64;
    if whole_steps >= limit {
        return Err(Error::TooManySteps {
            steps: whole_steps + 1.0,
            limit: MAX_STEPS,
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole_steps = whole_steps as usize;
    Ok(whole_steps + 1)
}

/// Integrates an ODE system using forward Euler.
///
/// # Algorithm
///
/// 1. Validate the step size and bounds, and compute the step count.
/// 2. Record the seed sample `(t0, x0)` and emit it as step 0.
/// 3. For each step `k = 1..=steps`:
///    - Evaluate the derivative at the previous sample.
///    - Step the state forward: `state + derivative * h`.
///    - Stamp the new sample with `t0 + k * h`.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 4. Return the solution with the full history.
///
/// # Observer
///
/// The observer receives an [`Event`] for the seed and after each integration
/// step, and may return [`Action::StopEarly`] to terminate early.
///
/// # Errors
///
/// Returns an error if the step size or bounds are rejected by
/// [`step_count`]. Nothing fails once stepping begins.
pub fn solve<S, F, Obs>(
    system: &F,
    t0: f64,
    x0: S,
    t1: f64,
    h: f64,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: StepIntegrable<f64> + Clone,
    F: OdeSystem<S>,
    Obs: Observer<Event<S>, Action>,
{
    let steps = step_count(t0, t1, h)?;
    debug!(t0, t1, h, steps, "starting forward Euler integration");

    let mut history = Vec::with_capacity(steps.saturating_add(1).min(MAX_PREALLOCATED));

    // Emit initial event.
    let initial = Sample::new(t0, x0);
    history.push(initial.clone());
    let event = Event {
        step: 0,
        sample: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        debug!(steps = 0, "observer stopped integration");
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = event.sample;

    for step in 1..=steps {
        let derivative = system.derivative(current.time, &current.state);
        let state = current.state.step(derivative, h);

        #[allow(clippy::cast_precision_loss)]
        let time = t0 + step as f64 * h;
        trace!(step, time, "advanced state");

        let next = Sample::new(time, state);
        history.push(next.clone());

        let event = Event { step, sample: next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(steps = step, "observer stopped integration");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = event.sample;
    }

    debug!(steps, "forward Euler integration complete");
    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE system using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the step size or bounds are rejected by
/// [`step_count`].
pub fn integrate<S, F>(system: &F, t0: f64, x0: S, t1: f64, h: f64) -> Result<Solution<S>, Error>
where
    S: StepIntegrable<f64> + Clone,
    F: OdeSystem<S>,
{
    solve(system, t0, x0, t1, h, ())
}
