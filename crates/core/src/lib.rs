//! Portal Core Library
//!
//! Core models, lifecycle store, derived views, and advisory permissions
//! for the condominium communication portal.

pub mod error;
pub mod invariants;
pub mod models;
pub mod permissions;
pub mod report;
pub mod stats;
pub mod store;
pub mod views;

pub use error::{Error, Result};
pub use models::*;
pub use permissions::*;
pub use report::{PortalReport, RequestSummary};
pub use stats::{average_rating, PortalStats};
pub use store::RequestStore;
pub use views::{filter_requests, RequestFilter};
