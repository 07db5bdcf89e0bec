//! Embedded Cash-Karp 4(5) Runge-Kutta integration with automatic
//! step-size control, evaluated at caller-supplied output times.

use log::debug;
use nalgebra::Vector3;

/// Tolerances and step bounds for the adaptive integrator.
#[derive(Debug, Clone, Copy)]
pub struct StepControl {
    pub rel_tol: f64,
    pub abs_tol: f64,
    pub initial_step: f64,
    pub min_step: f64,
}

impl Default for StepControl {
    fn default() -> StepControl {
        StepControl {
            rel_tol: 1e-6,
            abs_tol: 1e-6,
            initial_step: 1e-2,
            min_step: 1e-9,
        }
    }
}

// Cash-Karp tableau: nodes, stage couplings, 5th-order weights, and the
// (5th - 4th)-order weight differences used for the error estimate.
const C: [f64; 6] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 3.0 / 5.0, 1.0, 7.0 / 8.0];
const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 3.0 / 10.0;
const A42: f64 = -9.0 / 10.0;
const A43: f64 = 6.0 / 5.0;
const A51: f64 = -11.0 / 54.0;
const A52: f64 = 5.0 / 2.0;
const A53: f64 = -70.0 / 27.0;
const A54: f64 = 35.0 / 27.0;
const A61: f64 = 1631.0 / 55296.0;
const A62: f64 = 175.0 / 512.0;
const A63: f64 = 575.0 / 13824.0;
const A64: f64 = 44275.0 / 110592.0;
const A65: f64 = 253.0 / 4096.0;
const B1: f64 = 37.0 / 378.0;
const B3: f64 = 250.0 / 621.0;
const B4: f64 = 125.0 / 594.0;
const B6: f64 = 512.0 / 1771.0;
const E1: f64 = B1 - 2825.0 / 27648.0;
const E3: f64 = B3 - 18575.0 / 48384.0;
const E4: f64 = B4 - 13525.0 / 55296.0;
const E5: f64 = -277.0 / 14336.0;
const E6: f64 = B6 - 1.0 / 4.0;

/// Integrate `dy/dt = deriv(t, y)` from `grid[0]`, returning the solution
/// at every grid point. The first grid point carries `y0` unchanged.
pub fn integrate<F>(
    deriv: F,
    y0: Vector3<f64>,
    grid: &[f64],
    control: StepControl,
) -> Vec<Vector3<f64>>
where
    F: Fn(f64, &Vector3<f64>) -> Vector3<f64>,
{
    let mut solution = Vec::with_capacity(grid.len());
    let Some(&start) = grid.first() else {
        return solution;
    };
    let mut t = start;
    let mut y = y0;
    let mut h = control.initial_step;
    solution.push(y);

    for &target in &grid[1..] {
        loop {
            let remaining = target - t;
            // land exactly on the output time once within roundoff of it
            if remaining <= f64::EPSILON * target.abs().max(1.0) {
                t = target;
                break;
            }
            let mut step = h.min(remaining);
            loop {
                let (y_next, error) = cash_karp_step(&deriv, t, &y, step);
                let ratio = error_ratio(&y, &y_next, &error, &control);
                if ratio <= 1.0 || step <= control.min_step {
                    t += step;
                    y = y_next;
                    h = scaled_step(step, ratio, control.min_step);
                    break;
                }
                debug!("rejected step h={step:.3e} at t={t:.3} (error ratio {ratio:.3e})");
                step = scaled_step(step, ratio, control.min_step);
            }
        }
        solution.push(y);
    }
    solution
}

/// One Cash-Karp step: the 5th-order solution and the embedded 4th/5th
/// order difference as the local error estimate.
fn cash_karp_step<F>(
    deriv: &F,
    t: f64,
    y: &Vector3<f64>,
    h: f64,
) -> (Vector3<f64>, Vector3<f64>)
where
    F: Fn(f64, &Vector3<f64>) -> Vector3<f64>,
{
    let k1 = deriv(t, y);
    let k2 = deriv(t + C[1] * h, &(y + h * A21 * k1));
    let k3 = deriv(t + C[2] * h, &(y + h * (A31 * k1 + A32 * k2)));
    let k4 = deriv(t + C[3] * h, &(y + h * (A41 * k1 + A42 * k2 + A43 * k3)));
    let k5 = deriv(
        t + C[4] * h,
        &(y + h * (A51 * k1 + A52 * k2 + A53 * k3 + A54 * k4)),
    );
    let k6 = deriv(
        t + C[5] * h,
        &(y + h * (A61 * k1 + A62 * k2 + A63 * k3 + A64 * k4 + A65 * k5)),
    );

    let y_next = y + h * (B1 * k1 + B3 * k3 + B4 * k4 + B6 * k6);
    let error = h * (E1 * k1 + E3 * k3 + E4 * k4 + E5 * k5 + E6 * k6);
    (y_next, error)
}

/// Largest component-wise ratio of local error to tolerance; a step is
/// acceptable when this is at most 1.
fn error_ratio(
    y: &Vector3<f64>,
    y_next: &Vector3<f64>,
    error: &Vector3<f64>,
    control: &StepControl,
) -> f64 {
    let mut ratio: f64 = 0.0;
    for i in 0..3 {
        let scale = control.abs_tol + control.rel_tol * y[i].abs().max(y_next[i].abs());
        ratio = ratio.max(error[i].abs() / scale);
    }
    ratio
}

/// Standard 5th-order step update with a safety factor, bounded so one
/// update never shrinks or grows the step too abruptly.
fn scaled_step(step: f64, ratio: f64, min_step: f64) -> f64 {
    let factor = if ratio > 0.0 {
        (0.9 * ratio.powf(-0.2)).clamp(0.2, 5.0)
    } else {
        5.0
    };
    (step * factor).max(min_step)
}
