//! Demo fixtures for the portal
//!
//! Sample actors and requests used while the portal runs without a real
//! account system. Timestamps are relative to now so the dashboard's
//! recent-activity ordering stays meaningful.

use chrono::{Duration, Utc};
use portal_core::{
    Action, Actor, Category, Priority, Request, RequestStore, Status,
};

/// Seeded actors and store for a demo session
pub struct DemoData {
    pub resident: Actor,
    pub admin: Actor,
    pub store: RequestStore,
}

/// Build the demo portal: two login-able actors and four sample requests
pub fn demo_data() -> DemoData {
    let ana = Actor::resident(
        "Ana Silva".to_string(),
        "Bl-A Apt-101".to_string(),
        "ana@example.com".to_string(),
    );
    let joao = Actor::resident(
        "Joao Souza".to_string(),
        "Bl-B Apt-202".to_string(),
        "joao@example.com".to_string(),
    );
    let mariana = Actor::resident(
        "Mariana Costa".to_string(),
        "Bl-A Apt-305".to_string(),
        "mariana@example.com".to_string(),
    );
    let admin = Actor::administrator(
        "Carlos Souza".to_string(),
        "manager@condo.com".to_string(),
    );

    let mut leak = Request::new(
        &ana,
        Category::Complaint,
        "Garage leak".to_string(),
        "Persistent drip over my parking spot (45).".to_string(),
        Priority::High,
    );
    leak.created_at = Utc::now() - Duration::days(3);
    leak.status = Status::InProgress;
    let mut inspection = Action::new(
        "Caretaker inspected the spot".to_string(),
        "Caretaker".to_string(),
    );
    inspection.date = leak.created_at + Duration::hours(4);
    let mut quote = Action::new(
        "Quote requested from the plumbing company".to_string(),
        admin.name.clone(),
    );
    quote.date = leak.created_at + Duration::hours(23);
    leak.actions = vec![inspection, quote];

    let mut bins = Request::new(
        &joao,
        Category::Suggestion,
        "Recycling bins".to_string(),
        "We could place colored bins near the barbecue area.".to_string(),
        Priority::Low,
    );
    bins.created_at = Utc::now() - Duration::days(4);

    let mut lobby = Request::new(
        &ana,
        Category::Compliment,
        "Lobby cleaning".to_string(),
        "The cleaning team deserves praise, the lobby is spotless.".to_string(),
        Priority::Low,
    );
    lobby.created_at = Utc::now() - Duration::days(8);
    lobby.status = Status::Resolved;
    lobby.response = Some("Thank you, Ana! I will pass the praise along to the team.".to_string());
    lobby.response_date = Some(lobby.created_at + Duration::hours(2));
    lobby.rating = Some(5);

    let mut noise = Request::new(
        &mariana,
        Category::Notice,
        "Noise after hours".to_string(),
        "Apartment 306 had loud music at 11pm yesterday.".to_string(),
        Priority::Medium,
    );
    noise.created_at = Utc::now() - Duration::days(1);
    noise.status = Status::UnderReview;

    // Newest first, matching the store's insertion order
    let store = RequestStore::with_requests(vec![noise, leak, bins, lobby]);

    DemoData {
        resident: ana,
        admin,
        store,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{invariants, PortalStats};

    #[test]
    fn test_demo_data_is_consistent() {
        let data = demo_data();
        invariants::assert_collection_invariants(data.store.requests());
        invariants::assert_actor_invariants(&data.resident);
        invariants::assert_actor_invariants(&data.admin);
    }

    #[test]
    fn test_demo_stats() {
        let data = demo_data();
        let stats = PortalStats::compute(data.store.requests());

        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.urgent_open, 1);
        assert_eq!(stats.by_category[&Category::Complaint], 1);
        assert_eq!(stats.by_category[&Category::Suggestion], 1);
        assert_eq!(stats.by_category[&Category::Compliment], 1);
        assert_eq!(stats.by_category[&Category::Notice], 1);
    }

    #[test]
    fn test_demo_store_is_newest_first() {
        let data = demo_data();
        let requests = data.store.requests();
        for pair in requests.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
