//! Structural checks run before any draw is attempted.

use super::errors::{InputViolation, SeatingResult};
use super::models::TeamSetup;

/// Validate a team setup
///
/// Rules, in order:
/// 1. team size and table size are positive
/// 2. team size is divisible by table size
/// 3. every team fields exactly `team_size` players
/// 4. every team ID is >= 1
///
/// # Errors
///
/// Returns `SeatingError::InvalidInput` for the first rule broken.
pub fn validate(setup: &TeamSetup) -> SeatingResult<()> {
    if setup.team_size == 0 || setup.table_size == 0 {
        return Err(InputViolation::ZeroSize.into());
    }

    // NOTE: constrains team size rather than total players; kept as the
    // established rule until product review says otherwise.
    if setup.team_size % setup.table_size != 0 {
        return Err(InputViolation::IndivisibleTeamSize {
            team_size: setup.team_size,
            table_size: setup.table_size,
        }
        .into());
    }

    for (&team_id, players) in &setup.teams {
        if players.len() != setup.team_size {
            return Err(InputViolation::WrongTeamCardinality {
                team_id,
                expected: setup.team_size,
                actual: players.len(),
            }
            .into());
        }
    }

    if let Some(&team_id) = setup.teams.keys().find(|&&id| id < 1) {
        return Err(InputViolation::NonPositiveTeamId(team_id).into());
    }

    Ok(())
}
