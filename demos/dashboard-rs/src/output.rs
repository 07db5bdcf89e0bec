use chrono::{Days, NaiveDate};
use sir_rs::Trajectory;

/// First day of the fitted Madrid data; the date axis of the chart.
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 2, 25).expect("valid chart start date")
}

/// One CSV row per sample: calendar date, day index, and the two infected
/// counts to plot as filled area curves.
pub fn curve_rows(baseline: &Trajectory, scenario: &Trajectory) -> Vec<Vec<String>> {
    let start = start_date();
    baseline
        .states()
        .iter()
        .zip(scenario.states())
        .enumerate()
        .map(|(day, (base, alt))| {
            let date = start
                .checked_add_days(Days::new(day as u64))
                .expect("date within chrono range");
            vec![
                date.to_string(),
                day.to_string(),
                format!("{:.2}", base.infected),
                format!("{:.2}", alt.infected),
            ]
        })
        .collect()
}

#[cfg(test)]
mod test {
    use sir_rs::{Parameters, SirModel, TimeGrid};

    use super::*;

    #[test]
    fn rows_cover_the_grid_with_dates() {
        let grid = TimeGrid::new(10.0, 11);
        let baseline = SirModel::simulate(&Parameters::madrid(), &grid).unwrap();
        let scenario = SirModel::simulate(&Parameters::madrid().with_r0(2.8), &grid).unwrap();
        let rows = curve_rows(&baseline, &scenario);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0][0], "2020-02-25");
        assert_eq!(rows[1][0], "2020-02-26");
        assert_eq!(rows[10][1], "10");
        // both scenarios start from the single seed infection
        assert_eq!(rows[0][2], "1.00");
        assert_eq!(rows[0][3], "1.00");
    }
}
