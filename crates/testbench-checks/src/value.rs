// crates/testbench-checks/src/value.rs
// ============================================================================
// Module: Value Classification
// Description: Runtime kind labels and nominal type tags for checked values.
// Purpose: Classify JSON values and model tag-based instance membership.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`ValueKind`] classifies a JSON value into one of six runtime kinds with a
//! stable lowercase label. [`TypeTag`] is a nominal type descriptor: instance
//! membership is tag equality (or the universal [`TypeTag::VALUE`]), never a
//! runtime class-hierarchy query. Record shapes opt in through [`Tagged`].

use serde_json::Value;

// ============================================================================
// SECTION: Value Kinds
// ============================================================================

/// Runtime classification of a JSON value.
///
/// # Invariants
/// - Variants and labels are stable for failure rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// JSON null.
    Null,
    /// JSON boolean.
    Boolean,
    /// JSON number.
    Number,
    /// JSON string.
    String,
    /// JSON array.
    Array,
    /// JSON object.
    Object,
}

impl ValueKind {
    /// Classifies a JSON value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

// ============================================================================
// SECTION: Type Tags
// ============================================================================

/// Nominal type descriptor for instance checks.
///
/// # Invariants
/// - Tags compare by name; two shapes share a tag only if they share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTag(&'static str);

impl TypeTag {
    /// Universal base tag; every value is an instance of it.
    pub const VALUE: Self = Self("value");

    /// Builds a tag for a named record shape.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self(name)
    }

    /// Builds the tag of a primitive runtime kind.
    #[must_use]
    pub const fn for_kind(kind: ValueKind) -> Self {
        Self(kind.as_str())
    }

    /// Returns the tag name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// Record shapes that carry a nominal type tag.
pub trait Tagged {
    /// Returns the nominal tag of the shape.
    fn type_tag(&self) -> TypeTag;
}
