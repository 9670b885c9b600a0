//! Actor model - a logged-in portal participant

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portal roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Files requests and rates resolutions; sees only their own requests
    Resident,
    /// Triages, annotates, and resolves requests; sees everything
    Administrator,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Resident => "Resident",
            Role::Administrator => "Administrator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A participant in the portal, fixed for the lifetime of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    /// Block/apartment label, residents only
    pub unit: Option<String>,
    pub email: String,
    pub avatar: Option<String>,
}

impl Actor {
    pub fn resident(name: String, unit: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            role: Role::Resident,
            unit: Some(unit),
            email,
            avatar: None,
        }
    }

    pub fn administrator(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            role: Role::Administrator,
            unit: None,
            email,
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: String) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn is_resident(&self) -> bool {
        self.role == Role::Resident
    }

    pub fn is_administrator(&self) -> bool {
        self.role == Role::Administrator
    }

    /// Unit label for display, empty for administrators
    pub fn unit_label(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }
}
