// crates/testbench-checks/src/lib.rs
// ============================================================================
// Module: Testbench Checks Library
// Description: Public API surface for the Testbench assertion toolkit.
// Purpose: Expose check predicates, outcomes, and value classification.
// Dependencies: crate::{checks, outcome, value}
// ============================================================================

//! ## Overview
//! Testbench checks provide deterministic assertion predicates over
//! JSON-shaped values: presence and truthiness, loose/strict/deep equality,
//! numeric ordering with tolerance bands, membership and pattern matching,
//! and property/type/instance classification. Every predicate returns an
//! explicit [`CheckResult`] carrying a descriptive failure instead of
//! panicking, so callers decide how to surface the outcome.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod checks;
pub mod outcome;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use checks::approximately;
pub use checks::array_excludes;
pub use checks::array_includes;
pub use checks::deep_eq;
pub use checks::deep_ne;
pub use checks::does_not_match;
pub use checks::has_property;
pub use checks::is_above;
pub use checks::is_array;
pub use checks::is_at_least;
pub use checks::is_at_most;
pub use checks::is_below;
pub use checks::is_defined;
pub use checks::is_falsy;
pub use checks::is_instance_of;
pub use checks::is_not_array;
pub use checks::is_not_instance_of;
pub use checks::is_not_null;
pub use checks::is_not_true;
pub use checks::is_not_type_of;
pub use checks::is_null;
pub use checks::is_true;
pub use checks::is_truthy;
pub use checks::is_type_of;
pub use checks::is_undefined;
pub use checks::lacks_property;
pub use checks::loose_eq;
pub use checks::loose_ne;
pub use checks::matches;
pub use checks::strict_eq;
pub use checks::strict_ne;
pub use checks::string_contains;
pub use checks::string_excludes;
pub use outcome::CheckError;
pub use outcome::CheckResult;
pub use value::Tagged;
pub use value::TypeTag;
pub use value::ValueKind;
