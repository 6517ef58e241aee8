//! Depth chart store: owns every position's roster and serializes mutation.
//!
//! A single coarse `RwLock` guards the whole map. Charts hold a few dozen
//! positions of a few dozen players, so every critical section is a short
//! scan or shift and never touches I/O. Mutations take the write lock; reads
//! share the read lock and therefore never observe a roster mid-shift.
//!
//! Rosters emptied by removal are pruned, so a position is either absent or
//! holds at least one player.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use super::model::DepthChart;
use super::roster::Roster;
use crate::error::{DepthChartError, Result};

pub struct DepthChartStore {
    rosters: RwLock<BTreeMap<String, Roster>>,
}

impl DepthChartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            rosters: RwLock::new(BTreeMap::new()),
        }
    }

    /// Seed a store from a previously persisted chart.
    ///
    /// Each roster is replayed through [`Roster::insert`], so a chart with a
    /// repeated player at one position is rejected. Empty positions are dropped.
    pub fn from_chart(chart: DepthChart) -> Result<Self> {
        let mut rosters = BTreeMap::new();
        for (position, players) in chart.0 {
            let mut roster = Roster::new();
            for player in &players {
                roster
                    .insert(player, None)
                    .map_err(|_| DepthChartError::DuplicatePlayer {
                        position: position.clone(),
                        player: player.clone(),
                    })?;
            }
            if !roster.is_empty() {
                rosters.insert(position, roster);
            }
        }

        debug!(positions = rosters.len(), "loaded depth chart");
        Ok(Self {
            rosters: RwLock::new(rosters),
        })
    }

    /// Add `player` to `position` at `depth` (append when `None`).
    ///
    /// The roster is created on first reference. Returns the rank the player
    /// was placed at after clamping.
    pub fn add_player(&self, position: &str, player: &str, depth: Option<usize>) -> Result<usize> {
        let mut rosters = self.write()?;

        let inserted = match rosters.get_mut(position) {
            Some(roster) => roster.insert(player, depth),
            None => {
                let mut roster = Roster::new();
                let inserted = roster.insert(player, depth);
                rosters.insert(position.to_string(), roster);
                inserted
            }
        };

        match inserted {
            Ok(rank) => {
                info!(position, player, rank, "player added");
                Ok(rank)
            }
            Err(_) => {
                warn!(position, player, "duplicate player rejected");
                Err(DepthChartError::DuplicatePlayer {
                    position: position.to_string(),
                    player: player.to_string(),
                })
            }
        }
    }

    /// Remove `player` from `position`.
    ///
    /// Returns the removed name as a one-element list, or an empty list when
    /// the position or player does not exist.
    pub fn remove_player(&self, position: &str, player: &str) -> Result<Vec<String>> {
        let mut rosters = self.write()?;

        let Some(roster) = rosters.get_mut(position) else {
            debug!(position, player, "remove on unknown position");
            return Ok(Vec::new());
        };

        if !roster.remove(player) {
            debug!(position, player, "remove on unknown player");
            return Ok(Vec::new());
        }

        if roster.is_empty() {
            rosters.remove(position);
        }
        info!(position, player, "player removed");
        Ok(vec![player.to_string()])
    }

    /// Owned copy of the full chart.
    pub fn snapshot(&self) -> Result<DepthChart> {
        let rosters = self.read()?;
        Ok(rosters
            .iter()
            .map(|(position, roster)| (position.clone(), roster.players().to_vec()))
            .collect())
    }

    /// Run `f` against the roster for `position` under the read lock.
    pub(crate) fn with_roster<T>(
        &self,
        position: &str,
        f: impl FnOnce(Option<&Roster>) -> T,
    ) -> Result<T> {
        let rosters = self.read()?;
        Ok(f(rosters.get(position)))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Roster>>> {
        self.rosters.read().map_err(|_| DepthChartError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Roster>>> {
        self.rosters
            .write()
            .map_err(|_| DepthChartError::LockPoisoned)
    }
}

impl Default for DepthChartStore {
    fn default() -> Self {
        Self::new()
    }
}
