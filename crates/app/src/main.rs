//! Portal - condominium communication portal
//!
//! Headless session harness: seeds the demo portal and walks the resident
//! and administrator flows end to end. The screen front end drives the
//! same `SessionState` surface.

use portal_core::{Category, PermissionMatrix, PortalAction, Priority};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod seed;
mod state;

use state::SessionState;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting portal session");

    if let Err(e) = run() {
        tracing::error!("Session failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> portal_core::Result<()> {
    let seed::DemoData {
        resident,
        admin,
        store,
    } = seed::demo_data();
    let session = SessionState::with_store(store);

    // Resident side: file a new request and review the personal list
    session.login(resident.clone());
    debug_assert!(PermissionMatrix::can_perform(
        resident.role,
        PortalAction::FileRequest
    ));
    let request_id = session.file_request(
        Category::Complaint,
        "Elevator noise",
        "The service elevator squeals between floors 2 and 3.",
        Priority::Medium,
    )?;
    for request in session.visible_requests()? {
        tracing::info!(
            title = %request.title,
            status = %request.status,
            "Visible to resident"
        );
    }
    session.logout();

    // Administrator side: triage and resolve the new request
    session.login(admin.clone());
    debug_assert!(PermissionMatrix::can_perform(
        admin.role,
        PortalAction::SendResolution
    ));
    session.log_action(request_id, "Maintenance visit scheduled")?;
    session.send_resolution(request_id, "Rails lubricated, noise is gone.")?;

    let stats = session.stats();
    tracing::info!(
        pending = stats.pending,
        resolved = stats.resolved,
        urgent_open = stats.urgent_open,
        total = stats.total,
        "Portal totals"
    );

    // Resident rates the outcome
    session.logout();
    session.login(resident);
    session.rate_resolution(request_id, 5)?;
    session.logout();

    // Management report snapshot
    session.login(admin);
    println!("{}", session.report_json()?);
    session.logout();

    Ok(())
}
