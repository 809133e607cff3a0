use crate::{DerivativeOf, StepIntegrable};

/// The right-hand side of a first-order ODE, `dx/dt = f(t, x)`.
///
/// A system maps the current time and state to the derivative of the state.
/// It must be pure: generic solvers may call it any number of times and in any
/// order, and expect the same answer for the same arguments.
///
/// Closures of the form `Fn(f64, &S) -> DerivativeOf<S, f64>` implement this
/// trait automatically, so ad hoc systems need no named type.
pub trait OdeSystem<S>
where
    S: StepIntegrable<f64>,
{
    /// Evaluates the derivative of `state` at `time`.
    fn derivative(&self, time: f64, state: &S) -> DerivativeOf<S, f64>;
}

impl<S, F> OdeSystem<S> for F
where
    S: StepIntegrable<f64>,
    F: Fn(f64, &S) -> DerivativeOf<S, f64>,
{
    fn derivative(&self, time: f64, state: &S) -> DerivativeOf<S, f64> {
        self(time, state)
    }
}
