//! Greedy first-fit table filling.

use super::models::{Assignment, Player};

/// Result of one fill attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOutcome {
    /// Tables as filled so far
    pub assignment: Assignment,
    /// Players that could not be seated
    pub leftover: Vec<Player>,
}

impl FillOutcome {
    /// Whether every player found a seat
    pub fn is_complete(&self) -> bool {
        self.leftover.is_empty()
    }
}

/// Seat players one round at a time without repeating a team at any table
///
/// Each of the `table_size` rounds visits tables in ascending ID order and
/// gives each table the first pooled player whose team isn't seated there
/// yet. A table with no eligible player skips the round. There is no
/// backtracking; whoever is left in the pool afterwards is returned in
/// `leftover`.
pub fn fill_tables(
    shuffled: Vec<Player>,
    table_size: usize,
    number_of_tables: usize,
) -> FillOutcome {
    let mut pool = shuffled;
    let mut assignment = Assignment::with_tables(number_of_tables);

    for _round in 0..table_size {
        for table_id in 0..number_of_tables {
            let Some(table) = assignment.table_mut(table_id) else {
                continue;
            };

            let eligible = pool
                .iter()
                .position(|candidate| !table.iter().any(|p| p.team_id == candidate.team_id));

            if let Some(index) = eligible {
                table.push(pool.remove(index));
            }
        }
    }

    FillOutcome {
        assignment,
        leftover: pool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(seats: &[(i64, i64)]) -> Vec<Player> {
        seats.iter().map(|&(id, team)| Player::new(id, team)).collect()
    }

    #[test]
    fn test_fill_round_robin_order() {
        // Two tables of two: round one seats 1 and 2, round two seats 3 and 4
        let pool = players(&[(1, 1), (2, 1), (3, 2), (4, 2)]);
        let outcome = fill_tables(pool, 2, 2);

        assert!(outcome.is_complete());
        assert_eq!(outcome.assignment.table(0), Some(&players(&[(1, 1), (3, 2)])[..]));
        assert_eq!(outcome.assignment.table(1), Some(&players(&[(2, 1), (4, 2)])[..]));
    }

    #[test]
    fn test_fill_skips_same_team_candidates() {
        let pool = players(&[(1, 1), (2, 1), (3, 2), (4, 2)]);
        let outcome = fill_tables(pool, 2, 2);

        for table in outcome.assignment.tables().values() {
            assert_ne!(table[0].team_id, table[1].team_id);
        }
    }

    #[test]
    fn test_fill_reports_leftover() {
        // One team only: each table takes one player and then nobody fits
        let pool = players(&[(1, 1), (2, 1), (3, 1), (4, 1)]);
        let outcome = fill_tables(pool, 2, 2);

        assert!(!outcome.is_complete());
        assert_eq!(outcome.leftover, players(&[(3, 1), (4, 1)]));
        assert_eq!(outcome.assignment.table(0).map(<[_]>::len), Some(1));
        assert_eq!(outcome.assignment.table(1).map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_fill_greedy_can_strand_players() {
        // Seating {1,6},{3,2},{5,4} exists, but first-fit hands 4 and 2 to
        // tables 0 and 1, leaving only a team-3 player for table 2.
        let pool = players(&[(1, 1), (3, 2), (5, 3), (2, 1), (4, 2), (6, 3)]);
        let outcome = fill_tables(pool, 2, 3);

        assert!(!outcome.is_complete());
        assert_eq!(outcome.leftover, players(&[(6, 3)]));
        assert_eq!(outcome.assignment.table(0), Some(&players(&[(1, 1), (4, 2)])[..]));
        assert_eq!(outcome.assignment.table(1), Some(&players(&[(3, 2), (2, 1)])[..]));
        assert_eq!(outcome.assignment.table(2), Some(&players(&[(5, 3)])[..]));
    }

    #[test]
    fn test_fill_empty() {
        let outcome = fill_tables(Vec::new(), 4, 0);
        assert!(outcome.is_complete());
        assert!(outcome.assignment.is_empty());
    }
}
