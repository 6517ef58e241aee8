//! HTTP client for a remote depth chart API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::{
    AddPlayerRequest, BackupsResponse, PlayerChartResponse, RemovePlayerRequest,
    RemovePlayerResponse,
};
use crate::chart::DepthChart;
use crate::error::{DepthChartError, Result};

#[cfg(test)]
mod tests;

/// Public deployment of the depth chart API.
pub const DEFAULT_API_BASE_URL: &str =
    "http://playerchartapi-env.eba-jzxqtkyi.ap-southeast-2.elasticbeanstalk.com/api/player-chart";

#[derive(Debug, Clone)]
pub struct DepthChartClient {
    http: Client,
    base_url: String,
}

impl DepthChartClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the whole chart. A response without `playerChart` is an empty chart.
    pub async fn fetch_chart(&self) -> Result<DepthChart> {
        debug!(url = %self.base_url, "fetching depth chart");
        let res = self.http.get(&self.base_url).send().await?;
        let body: PlayerChartResponse = read_json(res, "fetch chart").await?;
        Ok(body.player_chart)
    }

    pub async fn add_player(&self, position: &str, player: &str, depth: Option<usize>) -> Result<()> {
        let url = self.url("add");
        debug!(%url, position, player, ?depth, "adding player");

        let res = self
            .http
            .post(&url)
            .json(&AddPlayerRequest::new(position, player, depth))
            .send()
            .await?;
        ensure_success(res, "add player")?;
        Ok(())
    }

    /// Remove a player, returning the removed names.
    ///
    /// Empty when nothing matched, and also when the API refuses the removal:
    /// callers report both as "player not found".
    pub async fn remove_player(&self, position: &str, player: &str) -> Result<Vec<String>> {
        let url = self.url("remove");
        debug!(%url, position, player, "removing player");

        let res = self
            .http
            .delete(&url)
            .json(&RemovePlayerRequest::new(position, player))
            .send()
            .await?;
        if !res.status().is_success() {
            warn!(status = %res.status(), position, player, "remove rejected, treating as not found");
            return Ok(Vec::new());
        }
        let body: RemovePlayerResponse = read_json(res, "remove player").await?;
        Ok(body.player)
    }

    /// Players ranked below `player`. Empty for both "no backups" and "not found".
    pub async fn backups(&self, position: &str, player: &str) -> Result<Vec<String>> {
        let url = self.url("backups");
        debug!(%url, position, player, "fetching backups");

        let res = self
            .http
            .get(&url)
            .query(&[("position", position), ("player", player)])
            .send()
            .await?;
        let body: BackupsResponse = read_json(res, "get backups").await?;
        Ok(body.backups)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn ensure_success(res: Response, operation: &str) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        Err(DepthChartError::Rejected {
            operation: operation.to_string(),
            status: status.as_u16(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(res: Response, operation: &str) -> Result<T> {
    let res = ensure_success(res, operation)?;
    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
