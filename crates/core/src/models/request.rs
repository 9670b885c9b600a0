//! Request model - the resident-filed item tracked through its lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Actor;

/// Request categories offered to residents
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Notice,
    Complaint,
    Suggestion,
    Compliment,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Notice => "Notice",
            Category::Complaint => "Complaint",
            Category::Suggestion => "Suggestion",
            Category::Compliment => "Compliment",
        }
    }

    /// All categories in the order they are offered
    pub fn all() -> &'static [Category] {
        &[
            Category::Notice,
            Category::Complaint,
            Category::Suggestion,
            Category::Compliment,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Request priority, set by the filing resident
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lifecycle status of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Pending,
    UnderReview,
    InProgress,
    Resolved,
}

impl Status {
    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::UnderReview => "Under review",
            Status::InProgress => "In progress",
            Status::Resolved => "Resolved",
        }
    }

    pub fn all() -> &'static [Status] {
        &[
            Status::Pending,
            Status::UnderReview,
            Status::InProgress,
            Status::Resolved,
        ]
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An immutable audit entry in a request's action history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: Uuid,
    pub description: String,
    pub date: DateTime<Utc>,
    /// Display name of whoever logged the action
    pub actor_name: String,
}

impl Action {
    pub fn new(description: String, actor_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            date: Utc::now(),
            actor_name,
        }
    }
}

/// A resident-filed request tracked through the status lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub author_unit: String,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub status: Status,
    pub priority: Priority,
    /// Opaque attachment references (placeholder, never interpreted)
    pub attachments: Vec<String>,
    /// Administrator's closing response; set together with `response_date`
    pub response: Option<String>,
    pub response_date: Option<DateTime<Utc>>,
    /// Requester satisfaction rating, expected 1-5
    pub rating: Option<u8>,
    pub actions: Vec<Action>,
}

impl Request {
    pub fn new(
        author: &Actor,
        category: Category,
        title: String,
        description: String,
        priority: Priority,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: author.id,
            author_name: author.name.clone(),
            author_unit: author.unit_label().to_string(),
            category,
            title,
            description,
            created_at: Utc::now(),
            status: Status::Pending,
            priority,
            attachments: Vec::new(),
            response: None,
            response_date: None,
            rating: None,
            actions: Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.status == Status::Resolved
    }

    pub fn has_response(&self) -> bool {
        self.response.is_some()
    }

    pub fn format_created_at(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
