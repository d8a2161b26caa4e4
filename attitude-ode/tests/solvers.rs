//! Solver accuracy against equations with known closed-form solutions.

use approx::assert_abs_diff_eq;
use attitude_ode::{
    AnalyticalSolution, DifferentialEquation, EulerSolver, InitialValueProblem, OdeSolver,
    Rk4Solver, StateVector,
};

/// y1' = y2, y2' = -omega^2 * y1; for initial state [0.1, 0] the solution is
/// y1 = 0.1 cos(omega t), y2 = -0.1 omega sin(omega t).
struct HarmonicOscillator {
    omega: f64,
}

impl DifferentialEquation for HarmonicOscillator {
    fn evaluate(&self, _t: f64, y: &StateVector) -> StateVector {
        StateVector::from_slice(&[y[1], -self.omega * self.omega * y[0]]).unwrap()
    }
}

impl AnalyticalSolution for HarmonicOscillator {
    fn analytical_solution(&self, t: f64) -> StateVector {
        StateVector::from_slice(&[
            0.1 * (self.omega * t).cos(),
            -0.1 * self.omega * (self.omega * t).sin(),
        ])
        .unwrap()
    }
}

/// y1' = y2, y2' = y1, with the hyperbolic solution
/// y1 = c1 e^t + c2 e^-t, y2 = c1 e^t - c2 e^-t.
struct SecondOrderAutonomous {
    c1: f64,
    c2: f64,
}

impl SecondOrderAutonomous {
    /// Fixes the integration constants from the initial condition.
    fn new(initial_time: f64, initial_state: &StateVector) -> Self {
        let c1 = (initial_state[0] + initial_state[1]) / (2.0 * initial_time.exp());
        let c2 = (initial_state[0] - initial_state[1]) / (2.0 * (-initial_time).exp());
        Self { c1, c2 }
    }
}

impl DifferentialEquation for SecondOrderAutonomous {
    fn evaluate(&self, _t: f64, y: &StateVector) -> StateVector {
        StateVector::from_slice(&[y[1], y[0]]).unwrap()
    }
}

impl AnalyticalSolution for SecondOrderAutonomous {
    fn analytical_solution(&self, t: f64) -> StateVector {
        let grow = self.c1 * t.exp();
        let decay = self.c2 * (-t).exp();
        StateVector::from_slice(&[grow + decay, grow - decay]).unwrap()
    }
}

fn initial_state() -> StateVector {
    StateVector::from_slice(&[0.1, 0.0]).unwrap()
}

#[test]
fn rk4_solves_second_order_autonomous_within_step() {
    for step in [0.1, 0.01] {
        let final_time = 10.0;
        let equation = SecondOrderAutonomous::new(0.0, &initial_state());
        let problem = InitialValueProblem::new(0.0, initial_state(), equation);

        let samples = Rk4Solver::new(step).unwrap().solve(&problem, final_time);
        let last = samples.last().unwrap();
        let exact = problem.equation().analytical_solution(last.time);

        assert_abs_diff_eq!(last.time, final_time, epsilon = step);
        assert_abs_diff_eq!(last.state[0], exact[0], epsilon = step);
        assert_abs_diff_eq!(last.state[1], exact[1], epsilon = step);
    }
}

#[test]
fn rk4_solves_harmonic_oscillator_within_step() {
    for step in [0.1, 0.01] {
        let final_time = 10.0;
        let problem =
            InitialValueProblem::new(0.0, initial_state(), HarmonicOscillator { omega: 1.0 });

        let samples = Rk4Solver::new(step).unwrap().solve(&problem, final_time);
        let last = samples.last().unwrap();
        let exact = problem.equation().analytical_solution(last.time);

        assert_abs_diff_eq!(last.time, final_time, epsilon = step);
        assert_abs_diff_eq!(last.state[0], exact[0], epsilon = step);
        assert_abs_diff_eq!(last.state[1], exact[1], epsilon = step);
    }
}

#[test]
fn rk4_fourth_order_accuracy_on_harmonic_oscillator() {
    let problem = InitialValueProblem::new(0.0, initial_state(), HarmonicOscillator { omega: 1.0 });

    let coarse = Rk4Solver::new(0.1).unwrap().solve(&problem, 10.0);
    let fine = Rk4Solver::new(0.01).unwrap().solve(&problem, 10.0);

    let error = |samples: &[attitude_ode::Sample]| {
        let last = samples.last().unwrap();
        let exact = problem.equation().analytical_solution(last.time);
        (last.state[0] - exact[0]).abs()
    };

    // Tenfold step refinement should cut the error by far more than tenfold
    let coarse_error = error(&coarse);
    let fine_error = error(&fine);
    assert!(coarse_error < 1e-6);
    assert!(fine_error < coarse_error / 1e3);
}

#[test]
fn euler_solves_harmonic_oscillator_within_step() {
    for step in [0.1, 0.01] {
        let final_time = 10.0;
        let problem =
            InitialValueProblem::new(0.0, initial_state(), HarmonicOscillator { omega: 1.0 });

        let samples = EulerSolver::new(step).unwrap().solve(&problem, final_time);
        let last = samples.last().unwrap();
        let exact = problem.equation().analytical_solution(last.time);

        // Euler may overshoot the end time by one step
        assert!(last.time >= final_time);
        assert!(last.time - final_time <= step + 1e-9);
        assert_abs_diff_eq!(last.state[0], exact[0], epsilon = step);
    }
}

#[test]
fn rk4_is_far_more_accurate_than_euler_at_equal_step() {
    let problem = InitialValueProblem::new(0.0, initial_state(), HarmonicOscillator { omega: 1.0 });
    let step = 0.01;

    let rk4_last = Rk4Solver::new(step)
        .unwrap()
        .solve(&problem, 10.0)
        .pop()
        .unwrap();
    let euler_last = EulerSolver::new(step)
        .unwrap()
        .solve(&problem, 10.0)
        .pop()
        .unwrap();

    let rk4_error =
        (rk4_last.state[0] - problem.equation().analytical_solution(rk4_last.time)[0]).abs();
    let euler_error =
        (euler_last.state[0] - problem.equation().analytical_solution(euler_last.time)[0]).abs();

    assert!(rk4_error < euler_error / 1e4);
}

#[test]
fn trajectories_start_from_the_initial_condition() {
    let problem = InitialValueProblem::new(0.0, initial_state(), HarmonicOscillator { omega: 1.0 });

    for samples in [
        Rk4Solver::new(0.1).unwrap().solve(&problem, 1.0),
        EulerSolver::new(0.1).unwrap().solve(&problem, 1.0),
    ] {
        assert_eq!(samples[0].time, 0.0);
        assert_eq!(samples[0].state, initial_state());
    }
}
