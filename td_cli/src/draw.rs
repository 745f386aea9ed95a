//! Load a roster, run the draw and shape the JSON result.

use crate::config::DrawConfig;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use team_draw::seating::{Assignment, SeatRecord, TableAssigner, TeamSetup};

/// JSON document printed for a successful draw
#[derive(Debug, Serialize)]
pub struct DrawOutput {
    /// Seed requested
    pub seed: i64,
    /// Seed that produced the tables (replays the draw in one attempt)
    pub seed_used: i64,
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Assignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<Vec<SeatRecord>>,
}

/// Read a JSON roster file
pub fn load_roster(path: &Path) -> anyhow::Result<TeamSetup> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Malformed roster {}", path.display()))
}

/// Run a draw as configured
pub fn run(config: &DrawConfig) -> anyhow::Result<DrawOutput> {
    let setup = load_roster(&config.roster)?;
    log::info!(
        "Drawing {} teams of {} onto tables of {} (seed {})",
        setup.teams.len(),
        setup.team_size,
        setup.table_size,
        config.seed
    );

    let assigner = TableAssigner::new(config.seating.clone());
    log::debug!(
        "Trying up to {} seeds (deadline {:?})",
        assigner.config().max_attempts,
        assigner.config().deadline
    );

    let started = Instant::now();
    let report = assigner
        .assign_with_report(&setup, config.seed)
        .map_err(|e| anyhow::anyhow!("Table draw failed: {}", e))?;

    crate::logging::log_draw(
        &config.roster.display().to_string(),
        report.seed_used,
        report.attempts,
        crate::logging::elapsed_ms(started.elapsed()),
    );

    let (tables, seats) = if config.records {
        (None, Some(report.assignment.seat_records()))
    } else {
        (Some(report.assignment), None)
    };

    Ok(DrawOutput {
        seed: config.seed,
        seed_used: report.seed_used,
        attempts: report.attempts,
        tables,
        seats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use team_draw::seating::SeatingConfig;

    fn write_roster(name: &str, setup: &TeamSetup) -> PathBuf {
        let path = std::env::temp_dir().join(format!("td_cli_{}_{}.json", name, std::process::id()));
        std::fs::write(&path, serde_json::to_string(setup).unwrap()).unwrap();
        path
    }

    fn roster_8x4() -> TeamSetup {
        (1..=8).fold(TeamSetup::new(4, 4), |setup, team| {
            let first = (team - 1) * 4 + 1;
            setup.with_team(team, (first..first + 4).collect())
        })
    }

    fn config(roster: PathBuf, records: bool) -> DrawConfig {
        DrawConfig {
            roster,
            seed: 1,
            seating: SeatingConfig::default(),
            records,
        }
    }

    #[test]
    fn test_run_prints_tables() {
        let path = write_roster("tables", &roster_8x4());
        let output = run(&config(path.clone(), false)).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(output.tables.as_ref().map(Assignment::len), Some(8));
        assert_eq!((output.seed, output.seed_used, output.attempts), (1, 2, 2));
        assert!(output.seats.is_none());

        let json = serde_json::to_value(&output).unwrap();
        assert!(json.get("tables").is_some());
        assert!(json.get("seats").is_none());
    }

    #[test]
    fn test_run_prints_records() {
        let path = write_roster("records", &roster_8x4());
        let output = run(&config(path.clone(), true)).unwrap();
        std::fs::remove_file(path).ok();

        assert!(output.tables.is_none());
        assert_eq!(output.seats.map(|s| s.len()), Some(32));
    }

    #[test]
    fn test_run_reports_invalid_roster() {
        let setup = roster_8x4().with_team(9, vec![33]);
        let path = write_roster("invalid", &setup);
        let err = run(&config(path.clone(), false)).unwrap_err();
        std::fs::remove_file(path).ok();

        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_load_roster_missing_file() {
        let err = load_roster(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read roster"));
    }

    #[test]
    fn test_load_roster_parses_string_keys() {
        let path = std::env::temp_dir().join(format!("td_cli_keys_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"teams": {"2": [3, 4], "1": [1, 2]}, "team_size": 2, "table_size": 2}"#,
        )
        .unwrap();
        let setup = load_roster(&path).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(setup.teams.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(setup.teams[&2], vec![3, 4]);
    }
}
