//! Error types for ODE solving.

use thiserror::Error;

/// Unified error type for setting up an integration.
///
/// Runtime state-vector misuse (order mismatch in arithmetic, index out of
/// range) is a programmer error and panics instead; see the `# Panics`
/// sections on [`StateVector`](crate::StateVector).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OdeError {
    /// The integration step is not a finite, positive number.
    #[error("Invalid step size {step}: must be finite and positive")]
    InvalidStep { step: f64 },

    /// A state vector must hold at least one component.
    #[error("State vector cannot be empty")]
    EmptyState,
}

/// Convenience alias for `Result<T, OdeError>`.
pub type OdeResult<T> = Result<T, OdeError>;

impl OdeError {
    /// Creates an [`InvalidStep`](Self::InvalidStep) error.
    pub fn invalid_step(step: f64) -> Self {
        Self::InvalidStep { step }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_step_message() {
        let err = OdeError::invalid_step(-0.1);
        assert_eq!(err.to_string(), "Invalid step size -0.1: must be finite and positive");
    }

    #[test]
    fn test_empty_state_message() {
        assert_eq!(OdeError::EmptyState.to_string(), "State vector cannot be empty");
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<OdeError>();
        _assert_sync::<OdeError>();
    }
}
