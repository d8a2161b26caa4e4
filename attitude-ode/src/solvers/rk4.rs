//! The classical fourth-order Runge-Kutta method.

use crate::errors::{OdeError, OdeResult};
use crate::problem::{DifferentialEquation, InitialValueProblem, Sample};
use crate::solvers::OdeSolver;

/// Classical RK4 with a fixed step.
///
/// Four right-hand-side evaluations per step buy a global error proportional
/// to the fourth power of the step. Unlike [`EulerSolver`](super::EulerSolver)
/// the last step is shrunk so the final sample lands on the requested end
/// time exactly (within [`END_TIME_TOLERANCE`](Self::END_TIME_TOLERANCE)).
#[derive(Debug, Clone, Copy)]
pub struct Rk4Solver {
    step: f64,
}

impl Rk4Solver {
    /// Termination tolerance on `|final_time - t|`.
    pub const END_TIME_TOLERANCE: f64 = 1e-10;

    /// Creates a solver with the given fixed step.
    ///
    /// # Errors
    ///
    /// Returns [`OdeError::InvalidStep`] unless `step` is finite and positive.
    pub fn new(step: f64) -> OdeResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(OdeError::invalid_step(step));
        }
        Ok(Self { step })
    }

    /// The integration step.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl OdeSolver for Rk4Solver {
    fn solve<E: DifferentialEquation>(
        &self,
        problem: &InitialValueProblem<E>,
        final_time: f64,
    ) -> Vec<Sample> {
        let equation = problem.equation();

        let mut step = self.step;
        let mut half_step = 0.5 * step;
        let mut sixth_step = step / 6.0;

        let mut t = problem.initial_time();
        let mut yn = problem.initial_state().clone();

        let mut samples = vec![Sample {
            time: t,
            state: yn.clone(),
        }];

        while (final_time - t).abs() > Self::END_TIME_TOLERANCE {
            let delta = final_time - t;

            if delta < step {
                step = delta;
                half_step = 0.5 * step;
                sixth_step = step / 6.0;
            }

            let k1 = equation.evaluate(t, &yn);
            let k2 = equation.evaluate(t + half_step, &(yn.clone() + k1.clone() * half_step));
            let k3 = equation.evaluate(t + half_step, &(yn.clone() + k2.clone() * half_step));
            let k4 = equation.evaluate(t + step, &(yn.clone() + k3.clone() * step));

            yn = yn + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * sixth_step;
            t += step;

            samples.push(Sample {
                time: t,
                state: yn.clone(),
            });
        }

        samples
    }
}
