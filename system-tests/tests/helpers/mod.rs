// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for Testbench system-tests.
// Purpose: Provide server harness, readiness probe, and simulated browser.
// Dependencies: system-tests, testbench-server
// ============================================================================

//! ## Overview
//! Shared helpers for Testbench system-tests: an in-process server harness,
//! a readiness probe, and a simulated browser that fills and submits forms
//! without a rendering engine.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod browser;
