//! Permission system for portal operations
//!
//! Advisory only: the store stays permissive and the presentation layer
//! decides which affordances to show. A multi-user variant would move
//! these checks inside the store's operations.

use crate::models::Role;

/// Actions that can be performed in the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalAction {
    // Resident side
    FileRequest,
    RateResolution,

    // Administrator triage
    LogAction,
    ChangeStatus,
    SendResolution,

    // Visibility
    ViewAllRequests,
    ViewReports,
}

/// Permission matrix for portal roles
pub struct PermissionMatrix;

impl PermissionMatrix {
    /// Check if a role may perform an action
    pub fn can_perform(role: Role, action: PortalAction) -> bool {
        match action {
            // Only residents file requests and rate outcomes
            PortalAction::FileRequest => role == Role::Resident,
            PortalAction::RateResolution => role == Role::Resident,

            // Triage is administrator-only
            PortalAction::LogAction => role == Role::Administrator,
            PortalAction::ChangeStatus => role == Role::Administrator,
            PortalAction::SendResolution => role == Role::Administrator,

            // Residents are restricted to their own requests
            PortalAction::ViewAllRequests => role == Role::Administrator,
            PortalAction::ViewReports => role == Role::Administrator,
        }
    }
}
