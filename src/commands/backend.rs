//! Where a command reads and writes the chart.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{resolve_api_url, resolve_db_path};
use crate::{
    chart::{DepthChart, DepthChartStore, QueryService},
    client::DepthChartClient,
    storage::ChartDatabase,
    Result,
};

/// A store loaded from SQLite and written back after every accepted mutation
pub struct LocalChart {
    db: ChartDatabase,
    store: DepthChartStore,
}

impl LocalChart {
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_database(ChartDatabase::open(path)?)
    }

    pub fn from_database(db: ChartDatabase) -> Result<Self> {
        let store = DepthChartStore::from_chart(db.load_chart()?)?;
        Ok(Self { db, store })
    }

    pub fn store(&self) -> &DepthChartStore {
        &self.store
    }

    fn persist(&mut self) -> Result<()> {
        let chart = self.store.snapshot()?;
        self.db.save_chart(&chart)
    }
}

pub enum Backend {
    Remote(DepthChartClient),
    Local(LocalChart),
}

impl Backend {
    /// A configured database path selects the local chart, `local` falls back to
    /// the default database location, otherwise the remote API
    pub fn resolve(api_url: Option<String>, db: Option<PathBuf>, local: bool) -> Result<Self> {
        match resolve_db_path(db) {
            Some(path) => {
                debug!(path = %path.display(), "using local depth chart");
                Ok(Backend::Local(LocalChart::open(&path)?))
            }
            None if local => {
                debug!("using local depth chart at the default location");
                Ok(Backend::Local(LocalChart::from_database(ChartDatabase::new()?)?))
            }
            None => {
                let url = resolve_api_url(api_url);
                debug!(%url, "using remote depth chart");
                Ok(Backend::Remote(DepthChartClient::new(url)))
            }
        }
    }

    pub async fn chart(&self) -> Result<DepthChart> {
        match self {
            Backend::Remote(client) => client.fetch_chart().await,
            Backend::Local(local) => QueryService::new(&local.store).player_chart(),
        }
    }

    pub async fn add_player(
        &mut self,
        position: &str,
        player: &str,
        depth: Option<usize>,
    ) -> Result<()> {
        match self {
            Backend::Remote(client) => client.add_player(position, player, depth).await,
            Backend::Local(local) => {
                local.store.add_player(position, player, depth)?;
                local.persist()
            }
        }
    }

    pub async fn remove_player(&mut self, position: &str, player: &str) -> Result<Vec<String>> {
        match self {
            Backend::Remote(client) => client.remove_player(position, player).await,
            Backend::Local(local) => {
                let removed = local.store.remove_player(position, player)?;
                if !removed.is_empty() {
                    local.persist()?;
                }
                Ok(removed)
            }
        }
    }

    pub async fn backups(&self, position: &str, player: &str) -> Result<Vec<String>> {
        match self {
            Backend::Remote(client) => client.backups(position, player).await,
            Backend::Local(local) => Ok(QueryService::new(&local.store)
                .backups(position, player)?
                .into_backups()),
        }
    }
}
