//! Aggregate statistics over the request collection
//!
//! Recomputed from scratch on every read; cheap at portal scale.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, Priority, Request, Status};

/// Dashboard counters for the request collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalStats {
    pub pending: usize,
    pub resolved: usize,
    pub total: usize,
    /// Priority High and not yet resolved
    pub urgent_open: usize,
    /// Count per category; every category is present, 0 when unused
    pub by_category: BTreeMap<Category, usize>,
}

impl PortalStats {
    pub fn compute(requests: &[Request]) -> Self {
        let mut by_category: BTreeMap<Category, usize> =
            Category::all().iter().map(|&c| (c, 0)).collect();
        for request in requests {
            if let Some(count) = by_category.get_mut(&request.category) {
                *count += 1;
            }
        }

        Self {
            pending: requests
                .iter()
                .filter(|r| r.status == Status::Pending)
                .count(),
            resolved: requests
                .iter()
                .filter(|r| r.status == Status::Resolved)
                .count(),
            total: requests.len(),
            urgent_open: requests
                .iter()
                .filter(|r| r.priority == Priority::High && r.status != Status::Resolved)
                .count(),
            by_category,
        }
    }
}

/// Mean satisfaction rating over rated requests, `None` when nothing is rated
pub fn average_rating(requests: &[Request]) -> Option<f64> {
    let ratings: Vec<u8> = requests.iter().filter_map(|r| r.rating).collect();
    if ratings.is_empty() {
        return None;
    }
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    Some(f64::from(sum) / ratings.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Actor;

    fn make_request(category: Category, status: Status, priority: Priority) -> Request {
        let author = Actor::resident(
            "Ana Silva".to_string(),
            "Bl-A Apt-101".to_string(),
            "ana@example.com".to_string(),
        );
        let mut request = Request::new(
            &author,
            category,
            "title".to_string(),
            "description".to_string(),
            priority,
        );
        request.status = status;
        request
    }

    #[test]
    fn test_empty_collection() {
        let stats = PortalStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.resolved, 0);
        assert_eq!(stats.urgent_open, 0);
        assert_eq!(stats.by_category.len(), 4);
        assert!(stats.by_category.values().all(|&c| c == 0));
    }

    #[test]
    fn test_by_category_always_has_all_keys() {
        let requests = vec![
            make_request(Category::Complaint, Status::Pending, Priority::Low),
            make_request(Category::Suggestion, Status::Pending, Priority::Low),
        ];

        let stats = PortalStats::compute(&requests);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.by_category[&Category::Complaint], 1);
        assert_eq!(stats.by_category[&Category::Suggestion], 1);
        assert_eq!(stats.by_category[&Category::Compliment], 0);
        assert_eq!(stats.by_category[&Category::Notice], 0);
        assert_eq!(stats.by_category.values().sum::<usize>(), stats.total);
    }

    #[test]
    fn test_urgent_open_excludes_resolved() {
        let requests = vec![
            make_request(Category::Complaint, Status::Pending, Priority::High),
            make_request(Category::Complaint, Status::InProgress, Priority::High),
            make_request(Category::Complaint, Status::Resolved, Priority::High),
            make_request(Category::Complaint, Status::Pending, Priority::Low),
        ];

        let stats = PortalStats::compute(&requests);
        assert_eq!(stats.urgent_open, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.resolved, 1);
    }

    #[test]
    fn test_average_rating() {
        let mut rated_high = make_request(Category::Compliment, Status::Resolved, Priority::Low);
        rated_high.rating = Some(5);
        let mut rated_low = make_request(Category::Complaint, Status::Resolved, Priority::Low);
        rated_low.rating = Some(4);
        let unrated = make_request(Category::Notice, Status::Pending, Priority::Low);

        assert_eq!(average_rating(&[unrated.clone()]), None);
        assert_eq!(
            average_rating(&[rated_high, rated_low, unrated]),
            Some(4.5)
        );
    }
}
