use crate::player::{Player, PlayerId, Position};
use crate::usage::UsageCounter;

use serde::Serialize;
use std::fmt;

/// One selected player per filled slot, in `Position::SLOT_ORDER`.
/// Slots without an eligible player are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lineup {
    players: Vec<Player>,
}

impl Lineup {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All five slots filled
    pub fn is_complete(&self) -> bool {
        Position::SLOT_ORDER
            .iter()
            .all(|&pos| self.player_at(pos).is_some())
    }

    pub fn player_at(&self, position: Position) -> Option<&Player> {
        self.players.iter().find(|p| p.position == position)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    pub fn missing_positions(&self) -> Vec<Position> {
        Position::SLOT_ORDER
            .into_iter()
            .filter(|&pos| self.player_at(pos).is_none())
            .collect()
    }

    pub fn total_salary(&self) -> i64 {
        self.players.iter().map(|p| p.salary).sum()
    }

    /// Sum of the unperturbed projections
    pub fn projected_points(&self) -> f64 {
        self.players.iter().map(|p| p.projected_fantasy_points).sum()
    }
}

impl fmt::Display for Lineup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pos in Position::SLOT_ORDER {
            if !first {
                write!(f, " | ")?;
            }
            first = false;
            match self.player_at(pos) {
                Some(p) => write!(f, "{pos} {}", p.name)?,
                None => write!(f, "{pos} -")?,
            }
        }
        Ok(())
    }
}

/// Output of one `generate` call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub lineups: Vec<Lineup>,
    pub usage: UsageCounter,
}

impl GenerationResult {
    pub fn complete_lineups(&self) -> usize {
        self.lineups.iter().filter(|l| l.is_complete()).count()
    }
}
