//! funcap-audit
//!
//! Structured audit events for wizard actions, emitted through `tracing`
//! so they land in whatever log pipeline the deployment runs.

pub mod events;

pub use events::AuditEvent;
