pub mod output;

use log::error;
use sir_rs::{Comparison, Environment, Parameters, R0_SLIDER, SirError, SirModel, TimeGrid};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

/// One interaction: read the slider position, simulate the baseline and
/// the chosen scenario over the same grid, emit the curves and the
/// summary line.
fn run() -> Result<(), SirError> {
    let env = Environment::from_stdin()?;
    let r0 = R0_SLIDER.snap(env.r0().unwrap_or(R0_SLIDER.default));

    let grid = TimeGrid::year();
    let baseline = SirModel::simulate(&Parameters::madrid(), &grid)?;
    let scenario = SirModel::simulate(&Parameters::madrid().with_r0(r0), &grid)?;

    env.write_csv(
        "sir_curves.csv",
        &["date", "day", "baseline_infected", "scenario_infected"],
        &output::curve_rows(&baseline, &scenario),
    )?;

    let comparison = Comparison::between(&baseline, &scenario);
    println!("{}", comparison.report(r0));
    Ok(())
}
