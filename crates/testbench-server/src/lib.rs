// crates/testbench-server/src/lib.rs
// ============================================================================
// Module: Testbench Server Library
// Description: Public API surface for the traveller demo service.
// Purpose: Expose configuration, audit, and server types.
// Dependencies: crate::{audit, config, server}
// ============================================================================

//! ## Overview
//! A deliberately small web service used as a functional-test target: a
//! greeting endpoint, a traveller form-submission endpoint, and an HTML index
//! page carrying the form. Configuration is TOML-loaded and fail-closed; every
//! handled request emits a JSON audit line through a pluggable sink.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod config;
pub mod server;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditSink;
pub use audit::NoopAuditSink;
pub use audit::RequestAuditEvent;
pub use audit::StderrAuditSink;
pub use config::ConfigError;
pub use config::ServerConfig;
pub use server::HelloServer;
pub use server::ServerError;
pub use server::TravellerRecord;
pub use server::TravellerSubmission;
