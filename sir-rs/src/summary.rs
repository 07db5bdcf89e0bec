use crate::trajectory::{Peak, Trajectory};

const SUFFIXES: [&str; 6] = ["", "K", "M", "G", "T", "P"];

/// Render a count with one decimal and a magnitude suffix at 1000x
/// thresholds: 750000 -> "750.0K".
pub fn human_format(value: f64) -> String {
    let mut value = value;
    let mut magnitude = 0;
    while value.abs() >= 1000.0 && magnitude + 1 < SUFFIXES.len() {
        magnitude += 1;
        value /= 1000.0;
    }
    format!("{value:.1}{}", SUFFIXES[magnitude])
}

/// The derived quantities comparing the baseline against the interactive
/// scenario: how much lower and how much later the infection peak is.
#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub baseline_peak: Peak,
    pub scenario_peak: Peak,
}

impl Comparison {
    /// Both trajectories must share the same time grid.
    pub fn between(baseline: &Trajectory, scenario: &Trajectory) -> Comparison {
        Comparison {
            baseline_peak: baseline.peak_infected(),
            scenario_peak: scenario.peak_infected(),
        }
    }

    /// Baseline peak minus scenario peak.
    pub fn averted_infections(&self) -> f64 {
        self.baseline_peak.infected - self.scenario_peak.infected
    }

    /// Days between the two peaks, positive when the intervention delays
    /// the peak.
    pub fn peak_delay_days(&self) -> i64 {
        self.scenario_peak.index as i64 - self.baseline_peak.index as i64
    }

    /// The one-line takeaway shown under the chart.
    pub fn report(&self, r0: f64) -> String {
        format!(
            "An R0 of {r0:.1} renders {} less infections and the peak is delayed by {} days \
             with respect to the scenario with no safety measures.",
            human_format(self.averted_infections()),
            self.peak_delay_days()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trajectory::CompartmentState;

    #[test]
    fn human_format_suffixes() {
        assert_eq!(human_format(750_000.0), "750.0K");
        assert_eq!(human_format(999.0), "999.0");
        assert_eq!(human_format(1_200_000.0), "1.2M");
        assert_eq!(human_format(3.0e9), "3.0G");
        assert_eq!(human_format(4.5e12), "4.5T");
        assert_eq!(human_format(6.0e15), "6.0P");
        assert_eq!(human_format(-2_500.0), "-2.5K");
        assert_eq!(human_format(0.0), "0.0");
    }

    fn trajectory_with_peak(index: usize, infected: f64, len: usize) -> Trajectory {
        let states = (0..len)
            .map(|i| CompartmentState {
                susceptible: 0.0,
                infected: if i == index { infected } else { 0.0 },
                recovered: 0.0,
            })
            .collect();
        Trajectory::new((0..len).map(|i| i as f64).collect(), states)
    }

    #[test]
    fn comparison_deltas() {
        let baseline = trajectory_with_peak(40, 1_200_000.0, 100);
        let scenario = trajectory_with_peak(63, 450_000.0, 100);
        let comparison = Comparison::between(&baseline, &scenario);
        assert_eq!(comparison.averted_infections(), 750_000.0);
        assert_eq!(comparison.peak_delay_days(), 23);
    }

    #[test]
    fn report_line() {
        let baseline = trajectory_with_peak(40, 1_200_000.0, 100);
        let scenario = trajectory_with_peak(63, 450_000.0, 100);
        let report = Comparison::between(&baseline, &scenario).report(4.2);
        assert!(report.contains("750.0K"));
        assert!(report.contains("23 days"));
        assert!(report.contains("An R0 of 4.2"));
    }
}
