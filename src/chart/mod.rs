//! In-memory depth chart: rosters, the store that owns them and the
//! read-only queries layered on top.

pub mod model;
pub mod query;
pub mod roster;
pub mod store;


pub use model::DepthChart;
pub use query::{BackupsLookup, QueryService};
pub use roster::Roster;
pub use store::DepthChartStore;
