//! Retrying table draw: validate once, then build, shuffle and fill with
//! successive seeds until every player is seated.

use super::config::SeatingConfig;
use super::errors::{SeatingError, SeatingResult};
use super::filler::fill_tables;
use super::models::{Assignment, TeamSetup};
use super::pool::{build_pool, shuffle};
use super::validation::validate;
use std::time::Instant;

/// A successful draw plus how it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentReport {
    pub assignment: Assignment,
    /// Seed of the attempt that produced `assignment`
    pub seed_used: i64,
    /// Attempts made, including the successful one
    pub attempts: u32,
}

/// Table assigner
#[derive(Debug, Clone, Default)]
pub struct TableAssigner {
    config: SeatingConfig,
}

impl TableAssigner {
    /// Create a new table assigner
    pub fn new(config: SeatingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeatingConfig {
        &self.config
    }

    /// Assign every player in `setup` to a table, starting from `seed`
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the setup fails validation
    /// - `AssignmentExhausted` if `max_attempts` seeds all leave players unseated
    /// - `DeadlineExceeded` if the configured deadline passes first
    pub fn assign(&self, setup: &TeamSetup, seed: i64) -> SeatingResult<Assignment> {
        self.assign_with_report(setup, seed)
            .map(|report| report.assignment)
    }

    /// Same as [`TableAssigner::assign`], also reporting the winning seed
    pub fn assign_with_report(
        &self,
        setup: &TeamSetup,
        seed: i64,
    ) -> SeatingResult<AssignmentReport> {
        validate(setup)?;

        let number_of_tables = setup.number_of_tables();
        let started = Instant::now();
        let mut seed = seed;

        for attempt in 1..=self.config.max_attempts {
            if attempt > 1 {
                if let Some(deadline) = self.config.deadline {
                    let elapsed = started.elapsed();
                    if elapsed >= deadline {
                        log::warn!(
                            "Table draw deadline of {:?} passed after {} attempts",
                            deadline,
                            attempt - 1
                        );
                        return Err(SeatingError::DeadlineExceeded {
                            attempts: attempt - 1,
                            elapsed,
                        });
                    }
                }
            }

            let pool = shuffle(build_pool(setup), seed);
            let outcome = fill_tables(pool, setup.table_size, number_of_tables);

            if outcome.is_complete() {
                log::info!(
                    "Seated {} players at {} tables (seed {}, attempt {})",
                    setup.total_players(),
                    number_of_tables,
                    seed,
                    attempt
                );
                return Ok(AssignmentReport {
                    assignment: outcome.assignment,
                    seed_used: seed,
                    attempts: attempt,
                });
            }

            log::debug!(
                "Seed {} left {} players unseated, retrying",
                seed,
                outcome.leftover.len()
            );
            seed = seed.wrapping_add(1);
        }

        log::warn!(
            "No complete table draw within {} attempts",
            self.config.max_attempts
        );
        Err(SeatingError::AssignmentExhausted {
            attempts: self.config.max_attempts,
        })
    }
}

/// Assign tables with the default configuration
///
/// See [`TableAssigner::assign`].
pub fn assign_tables(setup: &TeamSetup, seed: i64) -> SeatingResult<Assignment> {
    TableAssigner::default().assign(setup, seed)
}
