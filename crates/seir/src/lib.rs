//! SEIR epidemic model integrated with fixed-step explicit Euler.
//!
//! A population is split into four proportions, Susceptible, Exposed,
//! Infectious, and Recovered, that always sum to one:
//!
//! ```text
//! dS/dt = -beta * S * I
//! dE/dt =  beta * S * I - alpha * E
//! dI/dt =  alpha * E - gamma * I
//! dR/dt =  gamma * I
//! ```
//!
//! - [`Rates`] — the three rate constants and the derivative they define
//! - [`Compartments`] — the state vector, stepped by [`Flows`]
//! - [`Scenario`] — inputs of one run: rates, initial fractions, horizon, step
//! - [`simulate`] — runs a scenario and returns per-compartment [`Curves`]
//! - [`Outbreak`] — builds a scenario from population counts and `R0`
//!
//! # Example
//!
//! ```
//! use contagion_seir::{Rates, Scenario, simulate};
//!
//! let rates = Rates::new(0.6, 1.0 / 5.5, 1.0 / 3.0);
//! let curves = simulate(&Scenario::new(rates, 0.001, 0.0002, 140.0))?;
//!
//! let peak = curves.peak_infectious().expect("curves are never empty");
//! assert!(peak.time > 0.0 && peak.time < 140.0);
//! # Ok::<(), contagion_seir::Error>(())
//! ```

mod compartments;
mod curves;
mod error;
mod outbreak;
mod rates;
mod scenario;
mod simulate;

pub use compartments::{Compartments, Flows};
pub use curves::{Curves, Peak};
pub use error::Error;
pub use outbreak::Outbreak;
pub use rates::Rates;
pub use scenario::{DEFAULT_STEP, Scenario};
pub use simulate::{simulate, trajectory};
