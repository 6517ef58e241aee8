//! Wire types for the depth chart HTTP contract.
//!
//! Field names follow the JSON the browser client exchanges with the service
//! (`playerChart`, `positionDepth`, ...).

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::chart::DepthChart;
use crate::error::{DepthChartError, Result};

/// Body of `GET /`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerChartResponse {
    #[serde(default)]
    pub player_chart: DepthChart,
}

/// Body of `POST /add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlayerRequest {
    pub position: String,
    pub player: String,
    /// Zero-based rank; `null` or absent appends. Kept as a raw JSON number
    /// so integers beyond `i64` still reach [`AddPlayerRequest::validate`].
    #[serde(default)]
    pub position_depth: Option<Number>,
}

impl AddPlayerRequest {
    pub fn new(position: impl Into<String>, player: impl Into<String>, depth: Option<usize>) -> Self {
        Self {
            position: position.into(),
            player: player.into(),
            position_depth: depth.map(|d| Number::from(u64::try_from(d).unwrap_or(u64::MAX))),
        }
    }

    /// Check required fields and convert the depth to an index.
    pub fn validate(&self) -> Result<Option<usize>> {
        require("position", &self.position)?;
        require("player", &self.player)?;
        self.position_depth.as_ref().map(depth_index).transpose()
    }
}

/// Convert a wire depth to an index, saturating anything past `usize::MAX`.
///
/// Integers too large for `u64` arrive as floats; a whole non-negative float
/// is still a valid depth. Negative and fractional values are rejected.
fn depth_index(depth: &Number) -> Result<usize> {
    if let Some(depth) = depth.as_u64() {
        return Ok(usize::try_from(depth).unwrap_or(usize::MAX));
    }
    match depth.as_f64() {
        Some(f) if depth.as_i64().is_none() && f >= 0.0 && f.fract() == 0.0 => Ok(f as usize),
        _ => Err(DepthChartError::invalid_input(format!(
            "positionDepth must be a non-negative integer, got {}",
            depth
        ))),
    }
}

/// Success body of `POST /add`, echoing the rank the player landed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlayerResponse {
    pub position: String,
    pub player: String,
    pub position_depth: usize,
}

/// Body of `DELETE /remove`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovePlayerRequest {
    pub position: String,
    pub player: String,
}

impl RemovePlayerRequest {
    pub fn new(position: impl Into<String>, player: impl Into<String>) -> Self {
        Self {
            position: position.into(),
            player: player.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("position", &self.position)?;
        require("player", &self.player)
    }
}

/// Body returned by `DELETE /remove`: the removed name, or an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemovePlayerResponse {
    pub player: Vec<String>,
}

/// Body returned by `GET /backups`. Empty both for "not found" and "no backups".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupsResponse {
    #[serde(default)]
    pub backups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DepthChartError::invalid_input(format!(
            "{} is required",
            field
        )));
    }
    Ok(())
}
