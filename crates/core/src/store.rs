//! Request lifecycle store
//!
//! Holds the authoritative list of requests for a session and exposes the
//! operations that create, annotate, and transition them. The store is
//! explicitly owned and passed by handle; it is never a singleton.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Action, Actor, Category, Priority, Request, Status};

/// In-memory store of requests, newest first
#[derive(Debug, Default)]
pub struct RequestStore {
    requests: Vec<Request>,
    /// When set, resolved requests reject further actions and status edits
    strict_lifecycle: bool,
}

impl RequestStore {
    /// Create an empty store with the permissive lifecycle
    pub fn new() -> Self {
        Self {
            requests: Vec::new(),
            strict_lifecycle: false,
        }
    }

    /// Create a store pre-populated with existing requests
    pub fn with_requests(requests: Vec<Request>) -> Self {
        Self {
            requests,
            strict_lifecycle: false,
        }
    }

    /// Reject actions and status edits on resolved requests
    pub fn with_strict_lifecycle(mut self) -> Self {
        self.strict_lifecycle = true;
        self
    }

    /// File a new request on behalf of `author`
    ///
    /// The request starts Pending with an empty action history and is
    /// placed at the front of the collection.
    pub fn create(
        &mut self,
        author: &Actor,
        category: Category,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<Uuid> {
        if title.trim().is_empty() {
            return Err(Error::Validation("request title is empty".to_string()));
        }
        if description.trim().is_empty() {
            return Err(Error::Validation(
                "request description is empty".to_string(),
            ));
        }

        let request = Request::new(
            author,
            category,
            title.to_string(),
            description.to_string(),
            priority,
        );
        let id = request.id;

        tracing::info!(
            request_id = %id,
            author = %author.name,
            category = %category,
            priority = %priority,
            "Filed new request"
        );

        self.requests.insert(0, request);
        Ok(id)
    }

    /// Append an audit entry to a request's action history
    ///
    /// Does not change status. Under the permissive lifecycle resolved
    /// requests accept further actions; strict mode rejects them.
    pub fn append_action(
        &mut self,
        request_id: Uuid,
        description: &str,
        actor_name: &str,
    ) -> Result<()> {
        if description.trim().is_empty() {
            return Err(Error::Validation("action description is empty".to_string()));
        }

        let strict = self.strict_lifecycle;
        let request = self.find_mut(request_id)?;
        if strict && request.is_resolved() {
            return Err(Error::RequestClosed(request_id.to_string()));
        }

        request
            .actions
            .push(Action::new(description.to_string(), actor_name.to_string()));

        tracing::info!(
            request_id = %request_id,
            actor = %actor_name,
            "Logged action on request"
        );
        Ok(())
    }

    /// Overwrite a request's status
    ///
    /// Any status-to-status edge is permitted, including reopening a
    /// resolved request. Strict mode forbids leaving Resolved.
    pub fn set_status(&mut self, request_id: Uuid, status: Status) -> Result<()> {
        let strict = self.strict_lifecycle;
        let request = self.find_mut(request_id)?;
        if strict && request.is_resolved() && status != Status::Resolved {
            return Err(Error::RequestClosed(request_id.to_string()));
        }

        let previous = request.status;
        request.status = status;

        tracing::info!(
            request_id = %request_id,
            from = %previous,
            to = %status,
            "Updated request status"
        );
        Ok(())
    }

    /// Record the administrator's closing response
    ///
    /// Stamps the response date and forces status to Resolved. Calling it
    /// again overwrites the previous response.
    pub fn resolve(&mut self, request_id: Uuid, response: &str) -> Result<()> {
        if response.trim().is_empty() {
            return Err(Error::Validation("response text is empty".to_string()));
        }

        let request = self.find_mut(request_id)?;
        request.response = Some(response.to_string());
        request.response_date = Some(Utc::now());
        request.status = Status::Resolved;

        tracing::info!(request_id = %request_id, "Resolved request");
        Ok(())
    }

    /// Record the requester's satisfaction rating
    ///
    /// The store does not clamp the value or require the request to be
    /// resolved; callers are expected to only offer 1-5 controls.
    pub fn rate(&mut self, request_id: Uuid, rating: u8) -> Result<()> {
        let request = self.find_mut(request_id)?;
        request.rating = Some(rating);

        tracing::info!(request_id = %request_id, rating, "Rated request");
        Ok(())
    }

    pub fn get(&self, request_id: Uuid) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == request_id)
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    fn find_mut(&mut self, request_id: Uuid) -> Result<&mut Request> {
        self.requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| Error::NotFound(format!("request {}", request_id)))
    }
}
