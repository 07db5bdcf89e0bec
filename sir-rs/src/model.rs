use log::info;
use nalgebra::Vector3;

use crate::error::SirError;
use crate::parameters::{Parameters, TimeGrid};
use crate::solver::{self, StepControl};
use crate::trajectory::{CompartmentState, Trajectory};

pub struct SirModel {}

impl SirModel {
    /// Integrate the SIR rate equations
    ///
    /// ```text
    /// dS/dt = -β·S·I/N
    /// dI/dt =  β·S·I/N - γ·I
    /// dR/dt =  γ·I
    /// ```
    ///
    /// from (S₀, I₀, R₀) over the grid. Pure and stateless: identical
    /// inputs produce identical trajectories, and each call builds a
    /// fresh trajectory.
    pub fn simulate(parameters: &Parameters, grid: &TimeGrid) -> Result<Trajectory, SirError> {
        parameters.validate()?;
        grid.validate()?;

        let n = parameters.population;
        let beta = parameters.beta;
        let gamma = parameters.gamma;
        let deriv = move |_t: f64, y: &Vector3<f64>| {
            let infection = beta * y.x * y.y / n;
            let recovery = gamma * y.y;
            Vector3::new(-infection, infection - recovery, recovery)
        };

        let y0 = Vector3::new(
            parameters.initial_susceptible(),
            parameters.initial_infected,
            parameters.initial_recovered,
        );
        let times = grid.points();
        let states: Vec<CompartmentState> =
            solver::integrate(deriv, y0, &times, StepControl::default())
                .into_iter()
                .map(|y| CompartmentState {
                    susceptible: y.x,
                    infected: y.y,
                    recovered: y.z,
                })
                .collect();
        let trajectory = Trajectory::new(times, states);

        let peak = trajectory.peak_infected();
        info!(
            "simulated R0={:.2} over {:.0} days: peak {:.0} infected at sample {}",
            parameters.r0(),
            grid.horizon_days,
            peak.infected,
            peak.index
        );
        Ok(trajectory)
    }
}
