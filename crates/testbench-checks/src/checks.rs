// crates/testbench-checks/src/checks.rs
// ============================================================================
// Module: Check Predicates
// Description: Assertion predicates over JSON-shaped values.
// Purpose: Convert value comparisons into explicit check outcomes.
// Dependencies: crate::{outcome, value}, regex, serde_json
// ============================================================================

//! ## Overview
//! Every predicate here is a pure boolean check returning [`CheckResult`].
//! Positive and negative forms are exact complements: for fixed inputs,
//! exactly one of the pair succeeds. Numeric comparison is float-based and
//! rejects NaN on either side. "Undefined" is modelled as an absent value
//! (`Option::None`); JSON `null` is a present value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use regex::Regex;
use serde_json::Number;
use serde_json::Value;

use crate::outcome::CheckError;
use crate::outcome::CheckResult;
use crate::value::TypeTag;
use crate::value::ValueKind;

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders a JSON value compactly for failure messages.
fn render(value: &Value) -> String {
    value.to_string()
}

/// Builds a check failure from its parts.
fn failure(
    reason: &str,
    actual: impl Into<String>,
    expected: impl Into<String>,
    annotation: Option<&str>,
) -> CheckError {
    CheckError::new(reason, actual, expected, annotation)
}

/// Converts a boolean verdict into a check outcome.
fn verdict(holds: bool, on_failure: impl FnOnce() -> CheckError) -> CheckResult {
    if holds { Ok(()) } else { Err(on_failure()) }
}

// ============================================================================
// SECTION: Presence and Truthiness
// ============================================================================

/// Checks that the value is JSON null.
///
/// # Errors
/// Returns [`CheckError`] when the value is not null.
pub fn is_null(value: &Value, message: Option<&str>) -> CheckResult {
    verdict(value.is_null(), || failure("value is not null", render(value), "null", message))
}

/// Checks that the value is not JSON null.
///
/// # Errors
/// Returns [`CheckError`] when the value is null.
pub fn is_not_null(value: &Value, message: Option<&str>) -> CheckResult {
    verdict(!value.is_null(), || failure("value is null", render(value), "not null", message))
}

/// Checks that the value is present. JSON null is a present value.
///
/// # Errors
/// Returns [`CheckError`] when the value is absent.
pub fn is_defined(value: Option<&Value>, message: Option<&str>) -> CheckResult {
    verdict(value.is_some(), || {
        failure("value is undefined", "undefined", "a defined value", message)
    })
}

/// Checks that the value is absent.
///
/// # Errors
/// Returns [`CheckError`] when the value is present.
pub fn is_undefined(value: Option<&Value>, message: Option<&str>) -> CheckResult {
    verdict(value.is_none(), || {
        let actual = value.map_or_else(|| "undefined".to_owned(), render);
        failure("value is defined", actual, "undefined", message)
    })
}

/// Checks that the value coerces to true: not null, `false`, zero, NaN, or
/// the empty string.
///
/// # Errors
/// Returns [`CheckError`] when the value is falsy.
pub fn is_truthy(value: &Value, message: Option<&str>) -> CheckResult {
    verdict(truthy(value), || failure("value is falsy", render(value), "a truthy value", message))
}

/// Checks that the value coerces to false.
///
/// # Errors
/// Returns [`CheckError`] when the value is truthy.
pub fn is_falsy(value: &Value, message: Option<&str>) -> CheckResult {
    verdict(!truthy(value), || failure("value is truthy", render(value), "a falsy value", message))
}

/// Checks that the value is exactly boolean `true`.
///
/// # Errors
/// Returns [`CheckError`] when the value is anything other than `true`.
pub fn is_true(value: &Value, message: Option<&str>) -> CheckResult {
    verdict(value == &Value::Bool(true), || {
        failure("value is not true", render(value), "true", message)
    })
}

/// Checks that the value is anything other than boolean `true`.
///
/// # Errors
/// Returns [`CheckError`] when the value is exactly `true`.
pub fn is_not_true(value: &Value, message: Option<&str>) -> CheckResult {
    verdict(value != &Value::Bool(true), || {
        failure("value is true", render(value), "not true", message)
    })
}

/// Returns the truthiness of a JSON value under coercion rules.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ============================================================================
// SECTION: Equality
// ============================================================================

/// Checks coercing equality: numbers and numeric strings compare by numeric
/// value; other scalars compare strictly; composites never compare equal.
///
/// # Errors
/// Returns [`CheckError`] when the values are not loosely equal.
pub fn loose_eq(left: &Value, right: &Value, message: Option<&str>) -> CheckResult {
    verdict(loose_equal(left, right), || {
        failure("values are not loosely equal", render(left), render(right), message)
    })
}

/// Checks coercing inequality.
///
/// # Errors
/// Returns [`CheckError`] when the values are loosely equal.
pub fn loose_ne(left: &Value, right: &Value, message: Option<&str>) -> CheckResult {
    verdict(!loose_equal(left, right), || {
        failure("values are loosely equal", render(left), format!("not {}", render(right)), message)
    })
}

/// Checks strict equality: same kind and same value, no coercion;
/// composites never compare equal.
///
/// # Errors
/// Returns [`CheckError`] when the values are not strictly equal.
pub fn strict_eq(left: &Value, right: &Value, message: Option<&str>) -> CheckResult {
    verdict(strict_equal(left, right), || {
        failure("values are not strictly equal", render(left), render(right), message)
    })
}

/// Checks strict inequality.
///
/// # Errors
/// Returns [`CheckError`] when the values are strictly equal.
pub fn strict_ne(left: &Value, right: &Value, message: Option<&str>) -> CheckResult {
    verdict(!strict_equal(left, right), || {
        failure("values are strictly equal", render(left), format!("not {}", render(right)), message)
    })
}

/// Checks structural equality: objects compare key-order insensitively,
/// arrays compare element-order sensitively.
///
/// # Errors
/// Returns [`CheckError`] when the values differ structurally.
pub fn deep_eq(left: &Value, right: &Value, message: Option<&str>) -> CheckResult {
    verdict(deep_equal(left, right), || {
        failure("values are not deeply equal", render(left), render(right), message)
    })
}

/// Checks structural inequality.
///
/// # Errors
/// Returns [`CheckError`] when the values are deeply equal.
pub fn deep_ne(left: &Value, right: &Value, message: Option<&str>) -> CheckResult {
    verdict(!deep_equal(left, right), || {
        failure("values are deeply equal", render(left), format!("not {}", render(right)), message)
    })
}

/// Compares two JSON numbers by numeric value.
fn numeric_equal(left: &Number, right: &Number) -> bool {
    if let (Some(left_int), Some(right_int)) = (left.as_i64(), right.as_i64()) {
        return left_int == right_int;
    }
    if let (Some(left_uint), Some(right_uint)) = (left.as_u64(), right.as_u64()) {
        return left_uint == right_uint;
    }
    matches!((left.as_f64(), right.as_f64()), (Some(lf), Some(rf)) if lf == rf)
}

/// Parses a string as a loose numeric operand.
fn numeric_string(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Loose equality with number/string coercion; composites are stand-ins for
/// reference identity and never compare equal.
fn loose_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left_num), Value::Number(right_num)) => {
            numeric_equal(left_num, right_num)
        }
        (Value::Number(number), Value::String(text))
        | (Value::String(text), Value::Number(number)) => {
            matches!((number.as_f64(), numeric_string(text)), (Some(lf), Some(rf)) if lf == rf)
        }
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        _ => left == right,
    }
}

/// Strict equality without coercion; composites never compare equal.
fn strict_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left_num), Value::Number(right_num)) => {
            numeric_equal(left_num, right_num)
        }
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        _ => left == right,
    }
}

/// Structural equality over composite values' contents.
fn deep_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left_num), Value::Number(right_num)) => {
            numeric_equal(left_num, right_num)
        }
        (Value::Array(left_items), Value::Array(right_items)) => {
            left_items.len() == right_items.len()
                && left_items.iter().zip(right_items).all(|(li, ri)| deep_equal(li, ri))
        }
        (Value::Object(left_map), Value::Object(right_map)) => {
            left_map.len() == right_map.len()
                && left_map
                    .iter()
                    .all(|(key, lv)| right_map.get(key).is_some_and(|rv| deep_equal(lv, rv)))
        }
        _ => left == right,
    }
}

// ============================================================================
// SECTION: Ordering and Tolerance
// ============================================================================

/// Checks strict numeric ordering: actual is above the floor.
///
/// # Errors
/// Returns [`CheckError`] when actual is not above the floor or either side
/// is NaN.
pub fn is_above(actual: f64, floor: f64, message: Option<&str>) -> CheckResult {
    verdict(actual.partial_cmp(&floor).is_some_and(Ordering::is_gt), || {
        failure("value is not above the floor", actual.to_string(), format!("> {floor}"), message)
    })
}

/// Checks inclusive numeric ordering: actual is at least the floor.
///
/// # Errors
/// Returns [`CheckError`] when actual is below the floor or either side is
/// NaN.
pub fn is_at_least(actual: f64, floor: f64, message: Option<&str>) -> CheckResult {
    verdict(actual.partial_cmp(&floor).is_some_and(Ordering::is_ge), || {
        failure("value is below the floor", actual.to_string(), format!(">= {floor}"), message)
    })
}

/// Checks strict numeric ordering: actual is below the ceiling.
///
/// # Errors
/// Returns [`CheckError`] when actual is not below the ceiling or either
/// side is NaN.
pub fn is_below(actual: f64, ceiling: f64, message: Option<&str>) -> CheckResult {
    verdict(actual.partial_cmp(&ceiling).is_some_and(Ordering::is_lt), || {
        failure(
            "value is not below the ceiling",
            actual.to_string(),
            format!("< {ceiling}"),
            message,
        )
    })
}

/// Checks inclusive numeric ordering: actual is at most the ceiling.
///
/// # Errors
/// Returns [`CheckError`] when actual is above the ceiling or either side is
/// NaN.
pub fn is_at_most(actual: f64, ceiling: f64, message: Option<&str>) -> CheckResult {
    verdict(actual.partial_cmp(&ceiling).is_some_and(Ordering::is_le), || {
        failure("value is above the ceiling", actual.to_string(), format!("<= {ceiling}"), message)
    })
}

/// Checks tolerance-banded equality: succeeds iff
/// `|actual - expected| <= margin` under IEEE arithmetic. NaN operands and
/// negative margins fail by the same formula; an infinite margin accepts
/// any well-defined difference.
///
/// # Errors
/// Returns [`CheckError`] when the difference exceeds the margin, any
/// operand is NaN, or the margin is negative.
pub fn approximately(
    actual: f64,
    expected: f64,
    margin: f64,
    message: Option<&str>,
) -> CheckResult {
    verdict((actual - expected).abs() <= margin, || {
        failure(
            "value is outside the tolerance band",
            actual.to_string(),
            format!("{expected} +/- {margin}"),
            message,
        )
    })
}

// ============================================================================
// SECTION: Arrays and Strings
// ============================================================================

/// Checks that the value is a JSON array.
///
/// # Errors
/// Returns [`CheckError`] when the value is not an array.
pub fn is_array(value: &Value, message: Option<&str>) -> CheckResult {
    verdict(value.is_array(), || failure("value is not an array", render(value), "array", message))
}

/// Checks that the value is not a JSON array.
///
/// # Errors
/// Returns [`CheckError`] when the value is an array.
pub fn is_not_array(value: &Value, message: Option<&str>) -> CheckResult {
    verdict(!value.is_array(), || {
        failure("value is an array", render(value), "not an array", message)
    })
}

/// Checks array membership by JSON equality.
///
/// # Errors
/// Returns [`CheckError`] when the needle is absent from the items.
pub fn array_includes(items: &[Value], needle: &Value, message: Option<&str>) -> CheckResult {
    verdict(items.contains(needle), || {
        failure(
            "array does not include the value",
            render(&Value::Array(items.to_vec())),
            format!("includes {}", render(needle)),
            message,
        )
    })
}

/// Checks array non-membership; the exact complement of [`array_includes`].
///
/// # Errors
/// Returns [`CheckError`] when the needle is present in the items.
pub fn array_excludes(items: &[Value], needle: &Value, message: Option<&str>) -> CheckResult {
    verdict(!items.contains(needle), || {
        failure(
            "array includes the value",
            render(&Value::Array(items.to_vec())),
            format!("excludes {}", render(needle)),
            message,
        )
    })
}

/// Checks substring containment.
///
/// # Errors
/// Returns [`CheckError`] when the needle is not a substring of the
/// haystack.
pub fn string_contains(haystack: &str, needle: &str, message: Option<&str>) -> CheckResult {
    verdict(haystack.contains(needle), || {
        failure(
            "string does not contain the substring",
            haystack.to_owned(),
            format!("contains {needle:?}"),
            message,
        )
    })
}

/// Checks substring absence; the exact complement of [`string_contains`].
///
/// # Errors
/// Returns [`CheckError`] when the needle is a substring of the haystack.
pub fn string_excludes(haystack: &str, needle: &str, message: Option<&str>) -> CheckResult {
    verdict(!haystack.contains(needle), || {
        failure(
            "string contains the substring",
            haystack.to_owned(),
            format!("excludes {needle:?}"),
            message,
        )
    })
}

/// Checks that the value matches the pattern.
///
/// # Errors
/// Returns [`CheckError`] when the pattern does not match.
pub fn matches(value: &str, pattern: &Regex, message: Option<&str>) -> CheckResult {
    verdict(pattern.is_match(value), || {
        failure(
            "value does not match the pattern",
            value.to_owned(),
            format!("matches /{}/", pattern.as_str()),
            message,
        )
    })
}

/// Checks that the value does not match the pattern; the exact complement
/// of [`matches`].
///
/// # Errors
/// Returns [`CheckError`] when the pattern matches.
pub fn does_not_match(value: &str, pattern: &Regex, message: Option<&str>) -> CheckResult {
    verdict(!pattern.is_match(value), || {
        failure(
            "value matches the pattern",
            value.to_owned(),
            format!("does not match /{}/", pattern.as_str()),
            message,
        )
    })
}

// ============================================================================
// SECTION: Objects and Types
// ============================================================================

/// Checks key presence on a JSON object; non-objects have no properties.
///
/// # Errors
/// Returns [`CheckError`] when the key is absent.
pub fn has_property(value: &Value, key: &str, message: Option<&str>) -> CheckResult {
    verdict(value.get(key).is_some(), || {
        failure("object lacks the property", render(value), format!("property {key:?}"), message)
    })
}

/// Checks key absence; the exact complement of [`has_property`].
///
/// # Errors
/// Returns [`CheckError`] when the key is present.
pub fn lacks_property(value: &Value, key: &str, message: Option<&str>) -> CheckResult {
    verdict(value.get(key).is_none(), || {
        failure("object has the property", render(value), format!("no property {key:?}"), message)
    })
}

/// Checks the runtime kind of a value.
///
/// # Errors
/// Returns [`CheckError`] when the value has a different kind.
pub fn is_type_of(value: &Value, kind: ValueKind, message: Option<&str>) -> CheckResult {
    verdict(ValueKind::of(value) == kind, || {
        failure("value has the wrong kind", ValueKind::of(value).as_str(), kind.as_str(), message)
    })
}

/// Checks that a value is not of the given runtime kind.
///
/// # Errors
/// Returns [`CheckError`] when the value has that kind.
pub fn is_not_type_of(value: &Value, kind: ValueKind, message: Option<&str>) -> CheckResult {
    verdict(ValueKind::of(value) != kind, || {
        failure(
            "value has the excluded kind",
            ValueKind::of(value).as_str(),
            format!("not {}", kind.as_str()),
            message,
        )
    })
}

/// Checks nominal membership: the tags are equal, or the expected tag is the
/// universal [`TypeTag::VALUE`].
///
/// # Errors
/// Returns [`CheckError`] when the actual tag is not an instance of the
/// expected tag.
pub fn is_instance_of(actual: TypeTag, expected: TypeTag, message: Option<&str>) -> CheckResult {
    verdict(instance_of(actual, expected), || {
        failure("value is not an instance of the tag", actual.name(), expected.name(), message)
    })
}

/// Checks nominal non-membership; the exact complement of
/// [`is_instance_of`].
///
/// # Errors
/// Returns [`CheckError`] when the actual tag is an instance of the
/// expected tag.
pub fn is_not_instance_of(
    actual: TypeTag,
    expected: TypeTag,
    message: Option<&str>,
) -> CheckResult {
    verdict(!instance_of(actual, expected), || {
        failure(
            "value is an instance of the tag",
            actual.name(),
            format!("not {}", expected.name()),
            message,
        )
    })
}

/// Tag-based instance membership.
fn instance_of(actual: TypeTag, expected: TypeTag) -> bool {
    actual == expected || expected == TypeTag::VALUE
}
