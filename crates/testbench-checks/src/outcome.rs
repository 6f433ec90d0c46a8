// crates/testbench-checks/src/outcome.rs
// ============================================================================
// Module: Check Outcomes
// Description: Failure type and result alias for check predicates.
// Purpose: Carry descriptive, non-panicking assertion failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A failed predicate produces a [`CheckError`] describing what was required,
//! how the actual and expected sides rendered, and any author-supplied
//! annotation. Failures are plain values; raising, collecting, or asserting
//! on them is the caller's choice.

use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Failure raised by a check predicate.
///
/// # Invariants
/// - `actual` and `expected` are human-readable renderings, not payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{reason}: actual {actual}, expected {expected}{}",
    .annotation.as_ref().map_or_else(String::new, |note| format!(" ({note})"))
)]
pub struct CheckError {
    /// What the predicate required.
    pub reason: String,
    /// Rendering of the value under check.
    pub actual: String,
    /// Rendering of the required value, pattern, or bound.
    pub expected: String,
    /// Optional author-supplied annotation.
    pub annotation: Option<String>,
}

impl CheckError {
    /// Builds a failure from its parts.
    #[must_use]
    pub fn new(
        reason: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
        annotation: Option<&str>,
    ) -> Self {
        Self {
            reason: reason.into(),
            actual: actual.into(),
            expected: expected.into(),
            annotation: annotation.map(str::to_owned),
        }
    }
}

/// Result of a check predicate.
pub type CheckResult = Result<(), CheckError>;
