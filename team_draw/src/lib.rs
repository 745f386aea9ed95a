//! # Team Draw
//!
//! Table assignment for team tournaments.
//!
//! Each round, every team's players are spread over tables of a fixed size
//! so that teammates never share a table. The draw is a pure function of
//! the roster and a seed, so rounds can be replayed and regression-tested.
//!
//! ## Core Modules
//!
//! - [`seating`]: roster validation, seeded shuffling, greedy table filling
//!   and the bounded retry loop around them

/// Roster validation and team-diverse table assignment.
pub mod seating;
pub use seating::{
    Assignment, Player, SeatingConfig, SeatingError, SeatingResult, TableAssigner, TeamSetup,
    assign_tables,
};
