//! HTTP contract of the depth chart service
//!
//! - `types`: request and response bodies
//! - `router`: dispatch of `(method, target, body)` onto an injected store
//!
//! | Route | Method | Success |
//! |---|---|---|
//! | `/` | GET | `{"playerChart": {...}}` |
//! | `/add` | POST | 201, echo of the placed player |
//! | `/remove` | DELETE | `{"player": [name]}` or `{"player": []}` |
//! | `/backups` | GET | `{"backups": [...]}` |
//! | `/v2/backups` | GET | `{"backups": [...], "found": bool}` |

pub mod router;
pub mod types;

pub use router::{ApiRequest, ApiResponse, Router};
pub use types::*;
