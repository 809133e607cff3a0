/// Observes solver events and optionally returns a control action.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer for unobserved runs.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn drive<Obs: Observer<usize, Stop>>(mut observer: Obs, events: usize) -> Option<usize> {
        (0..events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let stop_at_three = |event: &usize| (*event == 3).then_some(Stop::Now);
        assert_eq!(drive(stop_at_three, 10), Some(3));
    }

    #[test]
    fn closure_observer_can_record() {
        let mut seen = Vec::new();
        drive(
            |event: &usize| {
                seen.push(*event);
                None
            },
            4,
        );
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
