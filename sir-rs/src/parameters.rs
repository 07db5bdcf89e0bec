use serde::Deserialize;

use crate::error::SirError;

/// Community of Madrid population, the fixed N of both scenarios.
pub const MADRID_POPULATION: f64 = 6_662_000.0;

/// Recovery rate γ: inverse of the 14-day quarantine period.
pub const RECOVERY_RATE: f64 = 1.0 / 14.0;

/// Contact rate β fitted to the first two weeks of case growth in Madrid;
/// the "no safety measures" baseline.
pub const BASELINE_CONTACT_RATE: f64 = 0.55;

/// The interactive R₀ control: the source slider's β range 0.2..0.4 step
/// 0.05 default 0.4, scaled by the 14-day infectious period.
pub const R0_SLIDER: SliderSpec = SliderSpec {
    min: 2.8,
    max: 5.6,
    step: 0.7,
    default: 5.6,
};

/// Fixed inputs for one simulation run. Rates are per day.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameters {
    pub population: f64,
    pub initial_infected: f64,
    pub initial_recovered: f64,
    /// Contact rate β: effective per-capita transmission rate.
    pub beta: f64,
    /// Recovery rate γ: inverse of the infectious period.
    pub gamma: f64,
}

impl Parameters {
    /// The baseline Madrid scenario: one seed infection, no safety measures.
    pub fn madrid() -> Parameters {
        Parameters {
            population: MADRID_POPULATION,
            initial_infected: 1.0,
            initial_recovered: 0.0,
            beta: BASELINE_CONTACT_RATE,
            gamma: RECOVERY_RATE,
        }
    }

    /// Replace the contact rate so that β/γ equals the given R₀.
    pub fn with_r0(mut self, r0: f64) -> Parameters {
        self.beta = r0 * self.gamma;
        self
    }

    /// Basic reproduction number R₀ = β/γ.
    pub fn r0(&self) -> f64 {
        self.beta / self.gamma
    }

    /// Everyone not initially infected or recovered is susceptible.
    pub fn initial_susceptible(&self) -> f64 {
        self.population - self.initial_infected - self.initial_recovered
    }

    /// Checked once at the start of a run; the rate equations divide by N
    /// and assume strictly positive rates.
    pub fn validate(&self) -> Result<(), SirError> {
        if !(self.population > 0.0) {
            return Err(SirError::Parameter(format!(
                "population must be positive, got {}",
                self.population
            )));
        }
        if !(self.beta > 0.0) {
            return Err(SirError::Parameter(format!(
                "contact rate must be positive, got {}",
                self.beta
            )));
        }
        if !(self.gamma > 0.0) {
            return Err(SirError::Parameter(format!(
                "recovery rate must be positive, got {}",
                self.gamma
            )));
        }
        if self.initial_infected < 0.0 || self.initial_recovered < 0.0 {
            return Err(SirError::Parameter(
                "initial compartments must be non-negative".to_string(),
            ));
        }
        if self.initial_infected + self.initial_recovered > self.population {
            return Err(SirError::Parameter(
                "initial infected + recovered exceed the population".to_string(),
            ));
        }
        Ok(())
    }
}

/// Equally spaced sample points over `[0, horizon_days]`, both endpoints
/// included.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeGrid {
    pub horizon_days: f64,
    pub samples: usize,
}

impl TimeGrid {
    pub fn new(horizon_days: f64, samples: usize) -> TimeGrid {
        TimeGrid {
            horizon_days,
            samples,
        }
    }

    /// The 365-sample one-year grid both scenarios are plotted on.
    pub fn year() -> TimeGrid {
        TimeGrid::new(365.0, 365)
    }

    pub fn spacing(&self) -> f64 {
        self.horizon_days / (self.samples - 1) as f64
    }

    pub fn points(&self) -> Vec<f64> {
        (0..self.samples).map(|i| i as f64 * self.spacing()).collect()
    }

    pub fn validate(&self) -> Result<(), SirError> {
        if self.samples < 2 {
            return Err(SirError::Parameter(format!(
                "time grid needs at least 2 samples, got {}",
                self.samples
            )));
        }
        if !(self.horizon_days > 0.0) {
            return Err(SirError::Parameter(format!(
                "time horizon must be positive, got {}",
                self.horizon_days
            )));
        }
        Ok(())
    }
}

/// Bounds, granularity, and initial value of the interactive control.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderSpec {
    /// Clamp an incoming value to the slider bounds and round it onto the
    /// step lattice.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }
}
