//! Core traits for the Contagion workspace.
//!
//! This crate defines the shared abstractions that solvers and models build on:
//!
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * delta`
//! - [`OdeSystem`] — the right-hand side `f(t, x)` of a first-order ODE
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod step;
mod system;

pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
pub use system::OdeSystem;
