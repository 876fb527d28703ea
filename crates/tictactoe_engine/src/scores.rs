//! Cumulative score tracking across games.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Win counts keyed by player label, kept in player-sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    entries: Vec<(String, u32)>,
}

impl Scoreboard {
    /// Creates a scoreboard with a zero entry for every player.
    pub fn from_players(players: &[Player]) -> Self {
        Self {
            entries: players.iter().map(|p| (p.label().clone(), 0)).collect(),
        }
    }

    /// Returns the score for a label, or `None` if no such player exists.
    pub fn get(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, score)| *score)
    }

    /// Iterates over `(label, score)` pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(l, s)| (l.as_str(), *s))
    }

    /// Iterates over the labels in player order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Number of tracked players.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no players are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds one win for a label and returns the new total.
    pub(crate) fn increment(&mut self, label: &str) -> Option<u32> {
        let (_, score) = self.entries.iter_mut().find(|(l, _)| l == label)?;
        *score += 1;
        Some(*score)
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (label, score)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("   ")?;
            }
            write!(f, "{}: {}", label, score)?;
        }
        Ok(())
    }
}
