//! Seating error types.

use super::models::TeamId;
use std::time::Duration;
use thiserror::Error;

/// Result type for seating operations
pub type SeatingResult<T> = Result<T, SeatingError>;

/// Seating errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// Roster or sizing parameters are structurally inconsistent
    #[error("Invalid input: {0}")]
    InvalidInput(InputViolation),

    /// No complete draw was found within the attempt bound
    #[error("Could not find a valid assignment within {attempts} attempts")]
    AssignmentExhausted { attempts: u32 },

    /// The configured deadline passed before a complete draw was found
    #[error("Deadline exceeded after {attempts} attempts ({elapsed:?})")]
    DeadlineExceeded { attempts: u32, elapsed: Duration },
}

impl SeatingError {
    /// Get a client-safe error message
    ///
    /// Validation details are collapsed into a single message so callers
    /// can't tell one structural problem from another.
    pub fn client_message(&self) -> String {
        match self {
            SeatingError::InvalidInput(_) => "Invalid input".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Which validation rule a roster broke
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputViolation {
    #[error("team size and table size must be positive")]
    ZeroSize,

    #[error("team size {team_size} is not divisible by table size {table_size}")]
    IndivisibleTeamSize { team_size: usize, table_size: usize },

    #[error("team {team_id} has {actual} players, expected {expected}")]
    WrongTeamCardinality {
        team_id: TeamId,
        expected: usize,
        actual: usize,
    },

    #[error("team id {0} must be >= 1")]
    NonPositiveTeamId(TeamId),
}

impl From<InputViolation> for SeatingError {
    fn from(violation: InputViolation) -> Self {
        SeatingError::InvalidInput(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_hides_validation_detail() {
        let a = SeatingError::from(InputViolation::NonPositiveTeamId(0));
        let b = SeatingError::from(InputViolation::ZeroSize);

        assert_eq!(a.client_message(), b.client_message());
        assert!(a.to_string().contains("team id 0"));
    }

    #[test]
    fn test_exhausted_message() {
        let err = SeatingError::AssignmentExhausted { attempts: 50 };
        assert_eq!(
            err.client_message(),
            "Could not find a valid assignment within 50 attempts"
        );
    }
}
