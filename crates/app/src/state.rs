//! Session state management
//!
//! Owns the request store for one portal session and tracks who is logged
//! in plus the current view selections. The presentation layer holds a
//! clone of this handle and re-renders from it after every call.

use std::sync::{Arc, Mutex};

use portal_core::{
    filter_requests, Actor, Category, Error, PortalReport, PortalStats, Priority, Request,
    RequestFilter, RequestStore, Result, Status,
};
use uuid::Uuid;

/// Main session state
#[derive(Clone)]
pub struct SessionState {
    pub store: Arc<Mutex<RequestStore>>,
    current_actor: Arc<Mutex<Option<Actor>>>,
    filter: Arc<Mutex<RequestFilter>>,
    selected_request_id: Arc<Mutex<Option<Uuid>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_store(RequestStore::new())
    }

    pub fn with_store(store: RequestStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            current_actor: Arc::new(Mutex::new(None)),
            filter: Arc::new(Mutex::new(RequestFilter::all())),
            selected_request_id: Arc::new(Mutex::new(None)),
        }
    }

    pub fn login(&self, actor: Actor) {
        tracing::info!(name = %actor.name, role = %actor.role, "Actor logged in");
        *self.current_actor.lock().unwrap() = Some(actor);
    }

    pub fn logout(&self) {
        *self.current_actor.lock().unwrap() = None;
        *self.selected_request_id.lock().unwrap() = None;
        *self.filter.lock().unwrap() = RequestFilter::all();
    }

    pub fn current_actor(&self) -> Option<Actor> {
        self.current_actor.lock().unwrap().clone()
    }

    fn require_actor(&self) -> Result<Actor> {
        self.current_actor()
            .ok_or_else(|| Error::Authentication("no actor logged in".to_string()))
    }

    /// File a new request as the logged-in actor
    pub fn file_request(
        &self,
        category: Category,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> Result<Uuid> {
        let actor = self.require_actor()?;
        self.store
            .lock()
            .unwrap()
            .create(&actor, category, title, description, priority)
    }

    /// Log a triage step on a request, attributed to the logged-in actor
    pub fn log_action(&self, request_id: Uuid, description: &str) -> Result<()> {
        let actor = self.require_actor()?;
        self.store
            .lock()
            .unwrap()
            .append_action(request_id, description, &actor.name)
    }

    pub fn change_status(&self, request_id: Uuid, status: Status) -> Result<()> {
        self.require_actor()?;
        self.store.lock().unwrap().set_status(request_id, status)
    }

    /// Send the closing response, which resolves the request
    pub fn send_resolution(&self, request_id: Uuid, response: &str) -> Result<()> {
        self.require_actor()?;
        self.store.lock().unwrap().resolve(request_id, response)
    }

    pub fn rate_resolution(&self, request_id: Uuid, rating: u8) -> Result<()> {
        self.require_actor()?;
        self.store.lock().unwrap().rate(request_id, rating)
    }

    pub fn set_status_filter(&self, status: Option<Status>) {
        self.filter.lock().unwrap().status = status;
    }

    pub fn set_category_filter(&self, category: Option<Category>) {
        self.filter.lock().unwrap().category = category;
    }

    pub fn filter(&self) -> RequestFilter {
        *self.filter.lock().unwrap()
    }

    pub fn select_request(&self, request_id: Option<Uuid>) {
        *self.selected_request_id.lock().unwrap() = request_id;
    }

    pub fn selected_request(&self) -> Option<Request> {
        let id = (*self.selected_request_id.lock().unwrap())?;
        self.store.lock().unwrap().get(id).cloned()
    }

    /// Requests visible to the logged-in actor under the current filters
    pub fn visible_requests(&self) -> Result<Vec<Request>> {
        let actor = self.require_actor()?;
        let filter = self.filter();
        let store = self.store.lock().unwrap();
        Ok(filter_requests(store.requests(), &actor, &filter))
    }

    /// Dashboard counters over the whole collection
    pub fn stats(&self) -> PortalStats {
        PortalStats::compute(self.store.lock().unwrap().requests())
    }

    /// Exportable report snapshot as pretty JSON
    pub fn report_json(&self) -> Result<String> {
        PortalReport::build(self.store.lock().unwrap().requests()).to_json()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
