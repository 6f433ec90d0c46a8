// system-tests/src/lib.rs
// ============================================================================
// Module: Testbench System Tests Library
// Description: Shared configuration for functional test scenarios.
// Purpose: Provide common utilities for the system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the functional test binaries
//! in `system-tests/tests`. The scenarios themselves live in the `tests`
//! directory and are gated behind the `system-tests` feature.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
