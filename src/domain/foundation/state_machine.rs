//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions across lifecycle statuses (assessment attempts, the report
//! analyzer screen).

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for AssessmentStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (InProgress, Complete) | (Complete, InProgress))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             InProgress => vec![Complete],
///             Complete => vec![InProgress],
///         }
///     }
/// }
///
/// let status = AssessmentStatus::InProgress.transition_to(AssessmentStatus::Complete)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Upload {
        Waiting,
        Sending,
        Sent,
    }

    impl StateMachine for Upload {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Upload::*;
            matches!((self, target), (Waiting, Sending) | (Sending, Sent))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Upload::*;
            match self {
                Waiting => vec![Sending],
                Sending => vec![Sent],
                Sent => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Upload::Waiting.transition_to(Upload::Sending), Ok(Upload::Sending));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let err = Upload::Waiting.transition_to(Upload::Sent).unwrap_err();
        assert!(err.to_string().contains("Cannot transition from Waiting to Sent"));
    }

    #[test]
    fn is_terminal_only_for_states_without_exits() {
        assert!(Upload::Sent.is_terminal());
        assert!(!Upload::Waiting.is_terminal());
    }

    #[test]
    fn can_transition_to_agrees_with_valid_transitions() {
        for status in [Upload::Waiting, Upload::Sending, Upload::Sent] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }
}
