//! Management report export
//!
//! Point-in-time snapshot of the request collection for the reports
//! screen. Serialization only; writing the result anywhere is the
//! caller's business.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Category, Priority, Request, Status};
use crate::stats::{average_rating, PortalStats};

/// One line of the report's request listing
#[derive(Debug, Clone, Serialize)]
pub struct RequestSummary {
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    pub status: Status,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub rating: Option<u8>,
}

impl From<&Request> for RequestSummary {
    fn from(request: &Request) -> Self {
        Self {
            id: request.id,
            title: request.title.clone(),
            category: request.category,
            status: request.status,
            priority: request.priority,
            created_at: request.created_at,
            rating: request.rating,
        }
    }
}

/// Exportable snapshot of the portal's current state
#[derive(Debug, Clone, Serialize)]
pub struct PortalReport {
    pub generated_at: DateTime<Utc>,
    pub stats: PortalStats,
    pub average_rating: Option<f64>,
    pub requests: Vec<RequestSummary>,
}

impl PortalReport {
    pub fn build(requests: &[Request]) -> Self {
        Self {
            generated_at: Utc::now(),
            stats: PortalStats::compute(requests),
            average_rating: average_rating(requests),
            requests: requests.iter().map(RequestSummary::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
