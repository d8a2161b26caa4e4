//! Fixed-step explicit solvers for initial value problems.
//!
//! - [`EulerSolver`]: first-order explicit Euler
//! - [`Rk4Solver`]: classical fourth-order Runge-Kutta
//!
//! Both emit the initial condition as the first sample and then march forward
//! with a fixed step. They differ at the far end of the interval:
//! [`Rk4Solver`] shrinks its final step to land on the requested end time
//! exactly, while [`EulerSolver`] keeps stepping until it has passed it and
//! may overshoot by up to one step.

mod euler;
mod rk4;

pub use euler::EulerSolver;
pub use rk4::Rk4Solver;

use crate::problem::{DifferentialEquation, InitialValueProblem, Sample};

/// A solver for Cauchy problems over a fixed time interval.
pub trait OdeSolver {
    /// Integrates `problem` from its initial time to `final_time` and returns
    /// the trajectory, initial condition included.
    fn solve<E: DifferentialEquation>(
        &self,
        problem: &InitialValueProblem<E>,
        final_time: f64,
    ) -> Vec<Sample>;
}
