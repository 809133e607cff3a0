//! Numerical integrators for the Contagion workspace.
//!
//! - [`transient::euler`] — fixed-step explicit (forward) Euler for systems
//!   implementing [`OdeSystem`]
//!
//! [`OdeSystem`]: contagion_core::OdeSystem

pub mod transient;
