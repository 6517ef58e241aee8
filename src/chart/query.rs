//! Read-only queries composed over the store.

use serde::Serialize;
use tracing::debug;

use super::model::DepthChart;
use super::store::DepthChartStore;
use crate::error::Result;

/// Outcome of a backups lookup.
///
/// `found` separates "player not on the chart" from "player has nobody
/// ranked below"; both carry an empty `backups` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackupsLookup {
    pub backups: Vec<String>,
    pub found: bool,
}

impl BackupsLookup {
    fn not_found() -> Self {
        Self::default()
    }

    pub fn into_backups(self) -> Vec<String> {
        self.backups
    }
}

/// Stateless reads against a borrowed store.
#[derive(Clone, Copy)]
pub struct QueryService<'a> {
    store: &'a DepthChartStore,
}

impl<'a> QueryService<'a> {
    pub fn new(store: &'a DepthChartStore) -> Self {
        Self { store }
    }

    pub fn player_chart(&self) -> Result<DepthChart> {
        self.store.snapshot()
    }

    /// Players ranked below `player` at `position`, nearest first.
    pub fn backups(&self, position: &str, player: &str) -> Result<BackupsLookup> {
        let lookup = self.store.with_roster(position, |roster| match roster {
            Some(roster) if roster.contains(player) => BackupsLookup {
                backups: roster.backups_of(player).to_vec(),
                found: true,
            },
            _ => BackupsLookup::not_found(),
        })?;

        debug!(
            position,
            player,
            found = lookup.found,
            backups = lookup.backups.len(),
            "backups lookup"
        );
        Ok(lookup)
    }
}
