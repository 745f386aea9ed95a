//! Seating data models: team rosters, players and table assignments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Team ID type (must be >= 1)
pub type TeamId = i64;

/// Player ID type
pub type PlayerId = i64;

/// Table ID type (0-based)
pub type TableId = usize;

/// Team roster plus the sizing parameters for one round's draw
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamSetup {
    /// Members of each team, in roster order
    pub teams: BTreeMap<TeamId, Vec<PlayerId>>,
    /// Number of players every team must field
    pub team_size: usize,
    /// Number of seats at every table
    pub table_size: usize,
}

impl TeamSetup {
    /// Create an empty setup with the given sizing parameters
    pub fn new(team_size: usize, table_size: usize) -> Self {
        Self {
            teams: BTreeMap::new(),
            team_size,
            table_size,
        }
    }

    /// Add (or replace) a team
    pub fn with_team(mut self, team_id: TeamId, players: Vec<PlayerId>) -> Self {
        self.teams.insert(team_id, players);
        self
    }

    /// Total players in the roster as declared by the sizing parameters
    pub fn total_players(&self) -> usize {
        self.team_size * self.teams.len()
    }

    /// Number of tables the roster fills
    ///
    /// Returns 0 when `table_size` is 0.
    pub fn number_of_tables(&self) -> usize {
        self.total_players()
            .checked_div(self.table_size)
            .unwrap_or_default()
    }
}

/// A player together with the team they play for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
}

impl Player {
    pub fn new(id: PlayerId, team_id: TeamId) -> Self {
        Self { id, team_id }
    }
}

/// Table assignment: table ID to seated players, in seating order
///
/// Backed by a `BTreeMap` so iteration and serialization always run in
/// ascending table order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(BTreeMap<TableId, Vec<Player>>);

impl Assignment {
    /// Create an assignment with `number_of_tables` empty tables
    pub fn with_tables(number_of_tables: usize) -> Self {
        Self((0..number_of_tables).map(|id| (id, Vec::new())).collect())
    }

    /// All tables in ascending ID order
    pub fn tables(&self) -> &BTreeMap<TableId, Vec<Player>> {
        &self.0
    }

    /// Players seated at a table
    pub fn table(&self, table_id: TableId) -> Option<&[Player]> {
        self.0.get(&table_id).map(Vec::as_slice)
    }

    pub(crate) fn table_mut(&mut self, table_id: TableId) -> Option<&mut Vec<Player>> {
        self.0.get_mut(&table_id)
    }

    /// Number of tables
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every seated player ID, table by table
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.0.values().flatten().map(|p| p.id).collect()
    }

    /// Flatten into one record per seat for persistence
    pub fn seat_records(&self) -> Vec<SeatRecord> {
        self.0
            .iter()
            .flat_map(|(&table_id, players)| {
                players.iter().enumerate().map(move |(seat, player)| SeatRecord {
                    table_id,
                    seat,
                    player_id: player.id,
                    team_id: player.team_id,
                })
            })
            .collect()
    }
}

impl From<BTreeMap<TableId, Vec<Player>>> for Assignment {
    fn from(tables: BTreeMap<TableId, Vec<Player>>) -> Self {
        Self(tables)
    }
}

/// One seated player, as handed to the persistence layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub table_id: TableId,
    /// 0-based position at the table
    pub seat: usize,
    pub player_id: PlayerId,
    pub team_id: TeamId,
}
