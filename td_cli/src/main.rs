//! Command-line table draw.
//!
//! Reads a team roster from JSON, seats every player so no table holds two
//! teammates, and prints the draw as JSON on stdout.

mod config;
mod draw;
mod logging;

use anyhow::Error;
use config::{DrawConfig, Overrides};
use pico_args::Arguments;

const HELP: &str = "\
Seat team players at tables without putting teammates together

USAGE:
  td_cli [OPTIONS]

OPTIONS:
  --roster        FILE    JSON roster (teams, team_size, table_size)  [default: env SEATING_ROSTER]
  --seed          N       Seed of the first attempt                   [default: env SEATING_SEED or 1]
  --max-attempts  N       Seeds to try before giving up               [default: env SEATING_MAX_ATTEMPTS or 1000]
  --deadline-ms   N       Give up after N milliseconds                [default: env SEATING_DEADLINE_MS or none]

FLAGS:
  --records               Print one record per seat instead of the table map
  -h, --help              Print help information

ENVIRONMENT:
  RUST_LOG                Log filter (logs go to stderr)
  (A .env file in the working directory is loaded if present)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        roster: pargs.opt_value_from_str("--roster")?,
        seed: pargs.opt_value_from_str("--seed")?,
        max_attempts: pargs.opt_value_from_str("--max-attempts")?,
        deadline_ms: pargs.opt_value_from_str("--deadline-ms")?,
        records: pargs.contains("--records"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {:?}", remaining);
    }

    logging::init();

    let config = DrawConfig::from_env(overrides)?;
    let output = draw::run(&config).inspect_err(|e| log::error!("{:#}", e))?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
