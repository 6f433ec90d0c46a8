// crates/testbench-server/src/audit.rs
// ============================================================================
// Module: Request Audit
// Description: Audit events and sinks for handled requests.
// Purpose: Provide JSON-lines request logging without hard dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every handled request produces one [`RequestAuditEvent`]. The sink is a
//! trait so deployments can plug in their own collector; the default writes
//! JSON lines to stderr and tests use the no-op sink. Events carry only
//! method, path, and outcome, never payload contents.

use std::io::Write;

use serde::Serialize;

// ============================================================================
// SECTION: Events
// ============================================================================

/// Audit event for one handled request.
///
/// # Invariants
/// - `outcome` is a stable label, not free-form text.
#[derive(Debug, Clone, Serialize)]
pub struct RequestAuditEvent {
    /// Request method.
    pub method: &'static str,
    /// Request path.
    pub path: &'static str,
    /// Response status code.
    pub status: u16,
    /// Normalized outcome label.
    pub outcome: &'static str,
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink for request events.
pub trait AuditSink: Send + Sync {
    /// Records an audit event.
    fn record(&self, event: &RequestAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &RequestAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// No-op audit sink.
///
/// # Invariants
/// - Events are intentionally discarded.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &RequestAuditEvent) {}
}
