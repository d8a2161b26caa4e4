//! Fixed-step explicit ODE solving over an ordered state vector.
//!
//! `attitude-ode` solves initial value problems for first-order systems
//! `y' = f(t, y)`. The contract is deliberately narrow: a caller provides the
//! right-hand side (a [`DifferentialEquation`]) and an initial condition (an
//! [`InitialValueProblem`]), and gets back the trajectory as a sequence of
//! [`Sample`]s. Any quantity that can be packed into a [`StateVector`]
//! component can be propagated - orientation angles and quaternion components
//! included - without this crate knowing anything about them.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`state`] | [`StateVector`]: the ordered numeric container |
//! | [`problem`] | [`DifferentialEquation`], [`AnalyticalSolution`], [`InitialValueProblem`], [`Sample`] |
//! | [`solvers`] | [`OdeSolver`], [`EulerSolver`], [`Rk4Solver`] |
//! | [`errors`] | [`OdeError`] and [`OdeResult`] |
//!
//! # Example
//!
//! The harmonic oscillator `y'' = -y`, written as a first-order system:
//!
//! ```
//! use attitude_ode::{
//!     DifferentialEquation, InitialValueProblem, OdeSolver, Rk4Solver, StateVector,
//! };
//!
//! struct Oscillator;
//!
//! impl DifferentialEquation for Oscillator {
//!     fn evaluate(&self, _t: f64, y: &StateVector) -> StateVector {
//!         StateVector::from_slice(&[y[1], -y[0]]).unwrap()
//!     }
//! }
//!
//! let problem = InitialValueProblem::new(
//!     0.0,
//!     StateVector::from_slice(&[0.1, 0.0]).unwrap(),
//!     Oscillator,
//! );
//!
//! let solver = Rk4Solver::new(0.01).unwrap();
//! let trajectory = solver.solve(&problem, 10.0);
//!
//! let last = trajectory.last().unwrap();
//! assert!((last.state[0] - 0.1 * last.time.cos()).abs() < 1e-8);
//! ```

pub mod errors;
pub mod problem;
pub mod solvers;
pub mod state;

pub use errors::{OdeError, OdeResult};
pub use problem::{AnalyticalSolution, DifferentialEquation, InitialValueProblem, Sample};
pub use solvers::{EulerSolver, OdeSolver, Rk4Solver};
pub use state::StateVector;
