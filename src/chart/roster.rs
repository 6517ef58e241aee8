//! Ordered roster for a single position.

use serde::{Deserialize, Serialize};

/// Players at one position ordered by depth rank.
///
/// Index 0 is the starter, index 1 the first backup and so on. A player
/// appears at most once and ranks are always contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<String>,
}

/// Rejection returned by [`Roster::insert`] when the player is already ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyRanked;

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `player` at `depth`, shifting everyone at or below it one rank deeper.
    ///
    /// `None` appends. A depth past the end is clamped to an append. Returns the
    /// rank the player ended up at. The roster is untouched on rejection.
    pub fn insert(
        &mut self,
        player: &str,
        depth: Option<usize>,
    ) -> std::result::Result<usize, AlreadyRanked> {
        if self.contains(player) {
            return Err(AlreadyRanked);
        }

        let rank = depth.map_or(self.players.len(), |d| d.min(self.players.len()));
        self.players.insert(rank, player.to_string());
        Ok(rank)
    }

    /// Remove `player` and close the gap. Returns whether anything was removed.
    pub fn remove(&mut self, player: &str) -> bool {
        match self.rank_of(player) {
            Some(rank) => {
                self.players.remove(rank);
                true
            }
            None => false,
        }
    }

    /// Players ranked strictly below `player`, nearest backup first.
    ///
    /// Empty both when `player` is absent and when nobody is ranked below it.
    pub fn backups_of(&self, player: &str) -> &[String] {
        match self.rank_of(player) {
            Some(rank) => &self.players[rank + 1..],
            None => &[],
        }
    }

    pub fn rank_of(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    pub fn contains(&self, player: &str) -> bool {
        self.rank_of(player).is_some()
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
