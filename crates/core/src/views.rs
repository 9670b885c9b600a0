//! Read-only projections of the request collection
//!
//! Recomputed from the authoritative collection on every read; never
//! persisted.

use crate::models::{Actor, Category, Request, Status};

/// Filter selections for the request list, `None` meaning "all"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub status: Option<Status>,
    pub category: Option<Category>,
}

impl RequestFilter {
    /// No restriction on status or category
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// Project the request list for a viewer
///
/// Residents see only requests they authored; administrators see all.
/// Optional exact-match status and category filters apply afterwards.
/// The result is sorted newest first, ties keeping their prior order.
pub fn filter_requests(
    requests: &[Request],
    viewer: &Actor,
    filter: &RequestFilter,
) -> Vec<Request> {
    let mut visible: Vec<Request> = requests
        .iter()
        .filter(|r| viewer.is_administrator() || r.author_id == viewer.id)
        .filter(|r| filter.status.map_or(true, |s| r.status == s))
        .filter(|r| filter.category.map_or(true, |c| r.category == c))
        .cloned()
        .collect();

    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn make_resident(name: &str) -> Actor {
        Actor::resident(
            name.to_string(),
            "Bl-B Apt-202".to_string(),
            "resident@example.com".to_string(),
        )
    }

    fn make_admin() -> Actor {
        Actor::administrator("Carlos Souza".to_string(), "manager@condo.com".to_string())
    }

    fn make_request(
        author: &Actor,
        category: Category,
        status: Status,
        hours_ago: i64,
    ) -> Request {
        let mut request = Request::new(
            author,
            category,
            format!("{} request", category),
            "details".to_string(),
            Priority::Medium,
        );
        request.status = status;
        request.created_at = Utc::now() - Duration::hours(hours_ago);
        request
    }

    #[test]
    fn test_resident_sees_only_own_requests() {
        let ana = make_resident("Ana Silva");
        let joao = make_resident("Joao Souza");
        let requests = vec![
            make_request(&ana, Category::Complaint, Status::Pending, 1),
            make_request(&joao, Category::Suggestion, Status::Pending, 2),
        ];

        let visible = filter_requests(&requests, &ana, &RequestFilter::all());
        assert_eq!(visible.len(), 1);
        assert!(visible.iter().all(|r| r.author_id == ana.id));
    }

    #[test]
    fn test_administrator_sees_all() {
        let ana = make_resident("Ana Silva");
        let joao = make_resident("Joao Souza");
        let requests = vec![
            make_request(&ana, Category::Complaint, Status::Pending, 1),
            make_request(&joao, Category::Suggestion, Status::Resolved, 2),
        ];

        let visible = filter_requests(&requests, &make_admin(), &RequestFilter::all());
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_status_and_category_filters() {
        let admin = make_admin();
        let ana = make_resident("Ana Silva");
        let requests = vec![
            make_request(&ana, Category::Complaint, Status::Pending, 1),
            make_request(&ana, Category::Complaint, Status::Resolved, 2),
            make_request(&ana, Category::Notice, Status::Pending, 3),
        ];

        let by_status = filter_requests(
            &requests,
            &admin,
            &RequestFilter::all().with_status(Status::Pending),
        );
        assert_eq!(by_status.len(), 2);

        let by_both = filter_requests(
            &requests,
            &admin,
            &RequestFilter::all()
                .with_status(Status::Pending)
                .with_category(Category::Complaint),
        );
        assert_eq!(by_both.len(), 1);
    }

    #[test]
    fn test_ordering_newest_first() {
        let admin = make_admin();
        let ana = make_resident("Ana Silva");
        let oldest = make_request(&ana, Category::Notice, Status::Pending, 3);
        let middle = make_request(&ana, Category::Notice, Status::Pending, 2);
        let newest = make_request(&ana, Category::Notice, Status::Pending, 1);
        let requests = vec![middle.clone(), oldest.clone(), newest.clone()];

        let visible = filter_requests(&requests, &admin, &RequestFilter::all());
        let ids: Vec<Uuid> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
    }

    #[test]
    fn test_ties_keep_prior_order() {
        let admin = make_admin();
        let ana = make_resident("Ana Silva");
        let when = Utc::now();
        let mut first = make_request(&ana, Category::Notice, Status::Pending, 0);
        let mut second = make_request(&ana, Category::Notice, Status::Pending, 0);
        first.created_at = when;
        second.created_at = when;
        let requests = vec![first.clone(), second.clone()];

        let visible = filter_requests(&requests, &admin, &RequestFilter::all());
        assert_eq!(visible[0].id, first.id);
        assert_eq!(visible[1].id, second.id);
    }

    #[test]
    fn test_projection_is_pure() {
        let admin = make_admin();
        let ana = make_resident("Ana Silva");
        let requests = vec![
            make_request(&ana, Category::Complaint, Status::Pending, 1),
            make_request(&ana, Category::Notice, Status::Resolved, 2),
        ];
        let filter = RequestFilter::all().with_status(Status::Pending);

        let first = filter_requests(&requests, &admin, &filter);
        let second = filter_requests(&requests, &admin, &filter);
        let first_ids: Vec<Uuid> = first.iter().map(|r| r.id).collect();
        let second_ids: Vec<Uuid> = second.iter().map(|r| r.id).collect();
        assert_eq!(first_ids, second_ids);
    }
}
