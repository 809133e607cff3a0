/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// A state paired with the time it was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<S> {
    pub time: f64,
    pub state: S,
}

impl<S> Sample<S> {
    /// Creates a new sample from a time and state.
    pub fn new(time: f64, state: S) -> Self {
        Self { time, state }
    }
}

/// The result of an Euler integration.
///
/// `history` is the trajectory: the seed sample followed by one sample per
/// completed step, in step order.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// History of samples from each step (including initial state).
    pub history: Vec<Sample<S>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Returns an iterator over the sample times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().map(|sample| sample.time)
    }

    /// Returns an iterator over the sampled states.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.history.iter().map(|sample| &sample.state)
    }

    /// Returns the final sample.
    ///
    /// The history always holds at least the seed, so this is `None` only for
    /// a hand-built empty solution.
    pub fn last(&self) -> Option<&Sample<S>> {
        self.history.last()
    }
}
