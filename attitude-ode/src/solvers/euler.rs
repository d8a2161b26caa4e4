//! The explicit Euler method.

use crate::errors::{OdeError, OdeResult};
use crate::problem::{DifferentialEquation, InitialValueProblem, Sample};
use crate::solvers::OdeSolver;

/// First-order explicit Euler: `y(t + h) = y(t) + h * f(t, y)`.
///
/// The simplest fixed-step method; its global error is proportional to the
/// step. Useful as a baseline and for systems where cheap steps beat accurate
/// ones. The final sample may overshoot the requested end time by up to one
/// step; see the [module docs](crate::solvers).
#[derive(Debug, Clone, Copy)]
pub struct EulerSolver {
    step: f64,
}

impl EulerSolver {
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

impl OdeSolver for EulerSolver {
    fn solve<E: DifferentialEquation>(
        &self,
        problem: &InitialValueProblem<E>,
        final_time: f64,
    ) -> Vec<Sample> {
        let equation = problem.equation();

        let mut t = problem.initial_time();
        let mut state = problem.initial_state().clone();

        let mut samples = vec![Sample {
            time: t,
            state: state.clone(),
        }];

        while t <= final_time {
            let derivative = equation.evaluate(t, &state);
            state = state + derivative * self.step;
            t += self.step;

            samples.push(Sample {
                time: t,
                state: state.clone(),
            });
        }

        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateVector;

    struct ConstantSlope;

    impl DifferentialEquation for ConstantSlope {
        fn evaluate(&self, _t: f64, _state: &StateVector) -> StateVector {
            StateVector::from_slice(&[1.0]).unwrap()
        }
    }

    #[test]
    fn test_new_rejects_bad_steps() {
        assert!(EulerSolver::new(0.0).is_err());
        assert!(EulerSolver::new(-0.1).is_err());
        assert!(EulerSolver::new(f64::NAN).is_err());
        assert!(EulerSolver::new(f64::INFINITY).is_err());
        assert_eq!(EulerSolver::new(0.1).unwrap().step(), 0.1);
    }

    #[test]
    fn test_first_sample_is_initial_condition() {
        let problem = InitialValueProblem::new(2.0, StateVector::from_slice(&[5.0]).unwrap(), ConstantSlope);
        let samples = EulerSolver::new(0.5).unwrap().solve(&problem, 3.0);

        assert_eq!(samples[0].time, 2.0);
        assert_eq!(samples[0].state[0], 5.0);
    }

    #[test]
    fn test_constant_slope_is_integrated_exactly() {
        // y' = 1 is exact under Euler: y(t) = y0 + (t - t0)
        let problem = InitialValueProblem::new(0.0, StateVector::from_slice(&[0.0]).unwrap(), ConstantSlope);
        let samples = EulerSolver::new(0.1).unwrap().solve(&problem, 1.0);

        for sample in &samples {
            assert!((sample.state[0] - sample.time).abs() < 1e-12);
        }
    }

    #[test]
    fn test_final_sample_may_overshoot_by_one_step() {
        let problem = InitialValueProblem::new(0.0, StateVector::from_slice(&[0.0]).unwrap(), ConstantSlope);
        let samples = EulerSolver::new(0.1).unwrap().solve(&problem, 1.0);

        let last = samples.last().unwrap();
        assert!(last.time >= 1.0);
        assert!(last.time - 1.0 <= 0.1 + 1e-12);
    }

    #[test]
    fn test_final_time_before_initial_yields_only_initial_sample() {
        let problem = InitialValueProblem::new(1.0, StateVector::from_slice(&[3.0]).unwrap(), ConstantSlope);
        let samples = EulerSolver::new(0.1).unwrap().solve(&problem, 0.0);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].time, 1.0);
    }
}
