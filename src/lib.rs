//! Player Depth Chart Library
//!
//! A keyed collection of ordered rosters ("depth chart") with ranked insertion,
//! removal and backups lookup, plus the HTTP contract, client and storage
//! around it.
//!
//! ## Features
//!
//! - **Depth Chart Store**: Thread-safe map of position to ranked roster
//! - **Backups Queries**: Players ranked below a given player at a position
//! - **API Contract**: Wire types and a request router for the chart service
//! - **Remote Client**: `reqwest` client for a deployed chart API
//! - **Local Storage**: SQLite persistence of chart snapshots
//!
//! ## Quick Start
//!
//! ```rust
//! use depth_chart::{DepthChartStore, QueryService};
//!
//! # fn example() -> depth_chart::Result<()> {
//! let store = DepthChartStore::new();
//! store.add_player("QB", "Tom Brady", None)?;
//! store.add_player("QB", "Mac Jones", Some(0))?;
//!
//! let lookup = QueryService::new(&store).backups("QB", "Mac Jones")?;
//! assert!(lookup.found);
//! assert_eq!(lookup.backups, vec!["Tom Brady"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export DEPTH_CHART_API_URL=http://localhost:8080/api/player-chart
//! export DEPTH_CHART_DB=~/charts/team.db   # work locally instead
//! ```

pub mod api;
pub mod chart;
pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use chart::{BackupsLookup, DepthChart, DepthChartStore, QueryService, Roster};
pub use error::{DepthChartError, Result};

pub const API_URL_ENV_VAR: &str = "DEPTH_CHART_API_URL";
pub const DB_PATH_ENV_VAR: &str = "DEPTH_CHART_DB";
