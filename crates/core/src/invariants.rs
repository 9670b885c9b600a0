//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::models::{Actor, Request, Role};

/// Validate that a request's state is internally consistent
pub fn assert_request_invariants(request: &Request) {
    debug_assert!(
        !request.title.trim().is_empty(),
        "Request {} has empty title",
        request.id
    );

    // Response and response date are set together or not at all
    debug_assert!(
        request.response.is_some() == request.response_date.is_some(),
        "Request {} has mismatched response/response_date: {:?} / {:?}",
        request.id,
        request.response,
        request.response_date
    );

    // Action ids must be unique within the history
    let unique: HashSet<_> = request.actions.iter().map(|a| a.id).collect();
    debug_assert!(
        unique.len() == request.actions.len(),
        "Request {} has duplicate action ids",
        request.id
    );
}

/// Validate that an actor's role and unit label agree
pub fn assert_actor_invariants(actor: &Actor) {
    match actor.role {
        Role::Resident => debug_assert!(
            actor
                .unit
                .as_ref()
                .is_some_and(|u| !u.trim().is_empty()),
            "Resident {} has no unit label",
            actor.id
        ),
        Role::Administrator => debug_assert!(
            actor.unit.is_none(),
            "Administrator {} carries a unit label",
            actor.id
        ),
    }
}

/// Validate a whole collection, request by request
pub fn assert_collection_invariants(requests: &[Request]) {
    let unique: HashSet<_> = requests.iter().map(|r| r.id).collect();
    debug_assert!(
        unique.len() == requests.len(),
        "Request collection contains duplicate ids"
    );

    for request in requests {
        assert_request_invariants(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Priority};
    use chrono::Utc;

    fn make_resident() -> Actor {
        Actor::resident(
            "Ana Silva".to_string(),
            "Bl-A Apt-101".to_string(),
            "ana@example.com".to_string(),
        )
    }

    fn make_request() -> Request {
        Request::new(
            &make_resident(),
            Category::Complaint,
            "Leak".to_string(),
            "Garage leak".to_string(),
            Priority::High,
        )
    }

    #[test]
    fn test_fresh_request_is_valid() {
        assert_request_invariants(&make_request());
    }

    #[test]
    fn test_resolved_request_is_valid() {
        let mut request = make_request();
        request.response = Some("Fixed".to_string());
        request.response_date = Some(Utc::now());
        assert_request_invariants(&request);
    }

    #[test]
    #[should_panic(expected = "mismatched response")]
    fn test_orphan_response_date_panics() {
        let mut request = make_request();
        request.response_date = Some(Utc::now());
        assert_request_invariants(&request);
    }

    #[test]
    fn test_actor_invariants() {
        assert_actor_invariants(&make_resident());
        assert_actor_invariants(&Actor::administrator(
            "Carlos Souza".to_string(),
            "manager@condo.com".to_string(),
        ));
    }

    #[test]
    #[should_panic(expected = "duplicate ids")]
    fn test_duplicate_request_ids_panic() {
        let request = make_request();
        assert_collection_invariants(&[request.clone(), request]);
    }
}
