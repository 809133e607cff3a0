use contagion_solvers::transient::euler::Solution;

use crate::Compartments;

/// Per-compartment time series of one simulation run.
///
/// All five vectors have the same length and share indices: entry `k` of each
/// compartment is the proportion at `time[k]`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curves {
    pub time: Vec<f64>,
    pub susceptible: Vec<f64>,
    pub exposed: Vec<f64>,
    pub infectious: Vec<f64>,
    pub recovered: Vec<f64>,
}

/// The largest infectious proportion and when it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peak {
    pub index: usize,
    pub time: f64,
    pub value: f64,
}

impl Curves {
    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Returns the state at sample `index`, if it exists.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<Compartments> {
        Some(Compartments {
            susceptible: *self.susceptible.get(index)?,
            exposed: *self.exposed.get(index)?,
            infectious: *self.infectious.get(index)?,
            recovered: *self.recovered.get(index)?,
        })
    }

    /// Returns the state at the last sample.
    #[must_use]
    pub fn final_state(&self) -> Option<Compartments> {
        self.state(self.len().checked_sub(1)?)
    }

    /// Returns the first sample with the largest infectious proportion.
    #[must_use]
    pub fn peak_infectious(&self) -> Option<Peak> {
        let (index, &value) = self
            .infectious
            .iter()
            .enumerate()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })?;

        Some(Peak {
            index,
            time: *self.time.get(index)?,
            value,
        })
    }
}

impl From<&Solution<Compartments>> for Curves {
    /// Transposes a trajectory of states into one series per compartment.
    fn from(solution: &Solution<Compartments>) -> Self {
        let len = solution.history.len();
        let mut curves = Self {
            time: Vec::with_capacity(len),
            susceptible: Vec::with_capacity(len),
            exposed: Vec::with_capacity(len),
            infectious: Vec::with_capacity(len),
            recovered: Vec::with_capacity(len),
        };

        for sample in &solution.history {
            curves.time.push(sample.time);
            curves.susceptible.push(sample.state.susceptible);
            curves.exposed.push(sample.state.exposed);
            curves.infectious.push(sample.state.infectious);
            curves.recovered.push(sample.state.recovered);
        }

        curves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use contagion_solvers::transient::euler::{Sample, Status};

    fn solution() -> Solution<Compartments> {
        let states = [
            Compartments::seeded(0.1, 0.1),
            Compartments {
                susceptible: 0.7,
                exposed: 0.1,
                infectious: 0.15,
                recovered: 0.05,
            },
            Compartments {
                susceptible: 0.6,
                exposed: 0.1,
                infectious: 0.15,
                recovered: 0.15,
            },
        ];

        Solution {
            status: Status::Complete,
            history: states
                .into_iter()
                .zip([0.0, 0.5, 1.0])
                .map(|(state, time)| Sample::new(time, state))
                .collect(),
            steps: 2,
        }
    }

    #[test]
    fn transposes_trajectory() {
        let curves = Curves::from(&solution());

        assert_eq!(curves.len(), 3);
        assert_eq!(curves.time, vec![0.0, 0.5, 1.0]);
        assert_eq!(curves.susceptible, vec![0.8, 0.7, 0.6]);
        assert_eq!(curves.exposed, vec![0.1, 0.1, 0.1]);
        assert_eq!(curves.infectious, vec![0.1, 0.15, 0.15]);
        assert_eq!(curves.recovered, vec![0.0, 0.05, 0.15]);
    }

    #[test]
    fn state_reassembles_a_sample() {
        let solution = solution();
        let curves = Curves::from(&solution);

        assert_eq!(curves.state(1), Some(solution.history[1].state));
        assert_eq!(curves.final_state(), Some(solution.history[2].state));
        assert_eq!(curves.state(3), None);
    }

    #[test]
    fn peak_takes_first_maximum() {
        let peak = Curves::from(&solution()).peak_infectious().unwrap();

        assert_eq!(
            peak,
            Peak {
                index: 1,
                time: 0.5,
                value: 0.15
            }
        );
    }

    #[test]
    fn peak_without_matching_time_is_none() {
        let curves = Curves {
            time: vec![0.0],
            infectious: vec![0.1, 0.2],
            ..Curves::default()
        };

        assert_eq!(curves.peak_infectious(), None);
    }

    #[test]
    fn empty_curves_have_no_peak() {
        let curves = Curves::default();

        assert!(curves.is_empty());
        assert_eq!(curves.peak_infectious(), None);
        assert_eq!(curves.final_state(), None);
    }
}
