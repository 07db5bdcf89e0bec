/// The three stocks of the SIR model at one sample point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompartmentState {
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
}

impl CompartmentState {
    pub fn total(&self) -> f64 {
        self.susceptible + self.infected + self.recovered
    }
}

/// Location and height of the infection peak on the sample grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub index: usize,
    pub infected: f64,
}

/// The time-indexed output of one simulation run. Immutable once built;
/// every parameter change produces a fresh trajectory.
#[derive(Debug, Clone)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<CompartmentState>,
}

impl Trajectory {
    pub(crate) fn new(times: Vec<f64>, states: Vec<CompartmentState>) -> Trajectory {
        debug_assert_eq!(times.len(), states.len());
        Trajectory { times, states }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn states(&self) -> &[CompartmentState] {
        &self.states
    }

    pub fn infected(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|state| state.infected)
    }

    /// Maximum of I over the grid; the first sample wins ties, matching
    /// argmax over the column.
    pub fn peak_infected(&self) -> Peak {
        let mut peak = Peak {
            index: 0,
            infected: f64::NEG_INFINITY,
        };
        for (index, state) in self.states.iter().enumerate() {
            if state.infected > peak.infected {
                peak = Peak {
                    index,
                    infected: state.infected,
                };
            }
        }
        peak
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn state(infected: f64) -> CompartmentState {
        CompartmentState {
            susceptible: 100.0 - infected,
            infected,
            recovered: 0.0,
        }
    }

    #[test]
    fn peak_is_first_maximum() {
        let infected = [1.0, 4.0, 9.0, 9.0, 3.0];
        let trajectory = Trajectory::new(
            (0..infected.len()).map(|i| i as f64).collect(),
            infected.iter().copied().map(state).collect(),
        );
        let peak = trajectory.peak_infected();
        assert_eq!(peak.index, 2);
        assert_eq!(peak.infected, 9.0);
    }

    #[test]
    fn infected_column() {
        let trajectory = Trajectory::new(vec![0.0, 1.0], vec![state(1.0), state(2.0)]);
        let column: Vec<f64> = trajectory.infected().collect();
        assert_eq!(column, vec![1.0, 2.0]);
        assert_eq!(trajectory.len(), 2);
    }
}
