use crate::error::{LineupError, Result};

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Roster position. Every player is eligible for exactly one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Position {
    #[strum(to_string = "QB")]
    QB,
    #[strum(to_string = "RB")]
    RB,
    #[strum(to_string = "WR")]
    WR,
    #[strum(to_string = "TE")]
    TE,
    #[strum(to_string = "D", serialize = "DST", serialize = "DEF")]
    D,
}

impl Position {
    /// Slots of a lineup, filled in this order
    pub const SLOT_ORDER: [Position; 5] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::D,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: Position,
    /// carried through for reporting only
    pub salary: i64,
    pub projected_fantasy_points: f64,
    /// projected ownership percentage, 0..=100
    pub ownership: f64,
}

impl Player {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        team: impl Into<String>,
        position: Position,
        salary: i64,
        projected_fantasy_points: f64,
        ownership: f64,
    ) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
            team: team.into(),
            position,
            salary,
            projected_fantasy_points,
            ownership,
        }
    }
}

/// Candidate players, in input order, with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pool {
    players: Vec<Player>,
}

impl Pool {
    /// Builds a pool, rejecting duplicate ids
    ///
    /// # Errors
    /// Returns `DuplicatePlayerId` for the first id seen twice
    pub fn new(players: Vec<Player>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.id) {
                return Err(LineupError::DuplicatePlayerId(player.id.0));
            }
        }
        Ok(Self { players })
    }

    /// Five placeholder players, one per position
    pub fn sample() -> Self {
        Self {
            players: vec![
                Player::new(0, "Player 1", "Team A", Position::QB, 7000, 20.0, 10.0),
                Player::new(1, "Player 2", "Team B", Position::RB, 8000, 18.5, 15.0),
                Player::new(2, "Player 3", "Team C", Position::WR, 9000, 19.0, 12.0),
                Player::new(3, "Player 4", "Team D", Position::TE, 6000, 15.0, 5.0),
                Player::new(4, "Player 5", "Team E", Position::D, 5000, 8.0, 2.0),
            ],
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
