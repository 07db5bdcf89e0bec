//! SIR epidemic scenario model.
//!
//! Integrates the Susceptible-Infected-Recovered rate equations for the
//! Community of Madrid COVID-19 scenario and compares an interactive
//! contact-rate scenario against the fixed no-safety-measures baseline.
//! The host UI supplies one R₀ value per interaction through the
//! [`host::Environment`] protocol and receives two infection curves plus
//! a one-line summary.

pub mod error;
pub mod host;
pub mod model;
pub mod parameters;
pub mod solver;
pub mod summary;
pub mod trajectory;

pub use error::SirError;
pub use host::Environment;
pub use model::SirModel;
pub use parameters::{Parameters, R0_SLIDER, SliderSpec, TimeGrid};
pub use summary::{Comparison, human_format};
pub use trajectory::{CompartmentState, Peak, Trajectory};
