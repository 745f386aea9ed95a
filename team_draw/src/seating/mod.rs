//! Table seating for team tournaments.
//!
//! Given players grouped into equally sized teams, this module splits them
//! into equally sized tables so that no table seats two players from the
//! same team. Draws are reproducible: the same roster and seed always give
//! the same tables.
//!
//! ## Pipeline
//!
//! - **Validation**: sizing and roster consistency ([`validate`])
//! - **Pool**: roster flattened in ascending team order ([`build_pool`])
//! - **Shuffle**: seeded ChaCha8 Fisher-Yates ([`shuffle`])
//! - **Fill**: greedy first-fit, one seat per table per round ([`fill_tables`])
//! - **Retry**: on leftover players, rebuild with `seed + 1`, up to a bound
//!   ([`TableAssigner`])
//!
//! ## Example
//!
//! ```
//! use team_draw::seating::{TeamSetup, assign_tables};
//!
//! let setup = TeamSetup::new(2, 2)
//!     .with_team(1, vec![1, 2])
//!     .with_team(2, vec![3, 4]);
//!
//! let assignment = assign_tables(&setup, 1)?;
//! assert_eq!(assignment.len(), 2);
//! # Ok::<(), team_draw::seating::SeatingError>(())
//! ```

pub mod assigner;
pub mod config;
pub mod errors;
pub mod filler;
pub mod models;
pub mod pool;
pub mod validation;

pub use assigner::{AssignmentReport, TableAssigner, assign_tables};
pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, SeatingConfig};
pub use errors::{InputViolation, SeatingError, SeatingResult};
pub use filler::{FillOutcome, fill_tables};
pub use models::{Assignment, Player, PlayerId, SeatRecord, TableId, TeamId, TeamSetup};
pub use pool::{build_pool, shuffle};
pub use validation::validate;
