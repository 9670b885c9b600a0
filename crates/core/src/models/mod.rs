//! Data models for the portal

mod actor;
mod request;

pub use actor::*;
pub use request::*;
