// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized timeout configuration with env overrides.
// Purpose: Keep functional-test timeouts consistent and configurable.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Each test group runs under a fixed ceiling; exceeding it fails the group
//! instead of hanging. `TESTBENCH_SYSTEM_TEST_TIMEOUT_SEC` raises the ceiling
//! as a minimum and never shortens an explicitly longer timeout.

use std::env;
use std::time::Duration;

/// Environment variable carrying the minimum timeout in seconds.
const ENV_TIMEOUT_SECS: &str = "TESTBENCH_SYSTEM_TEST_TIMEOUT_SEC";

/// Default ceiling for one functional test group.
const DEFAULT_GROUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Returns the ceiling for one functional test group.
#[must_use]
pub fn group_timeout() -> Duration {
    resolve_timeout(DEFAULT_GROUP_TIMEOUT)
}

/// Returns the effective timeout, honoring the env override when set.
/// The override acts as a minimum to avoid shortening longer timeouts.
///
/// # Panics
///
/// Panics when the override is set but not a positive integer, so a broken
/// environment fails loudly instead of racing.
#[must_use]
#[allow(clippy::panic, reason = "Misconfigured test environments must fail loudly, not race.")]
pub fn resolve_timeout(requested: Duration) -> Duration {
    match env::var(ENV_TIMEOUT_SECS) {
        Ok(raw) => {
            let floor = parse_timeout_secs(&raw)
                .unwrap_or_else(|err| panic!("{ENV_TIMEOUT_SECS} {err}"));
            std::cmp::max(requested, floor)
        }
        Err(_) => requested,
    }
}

/// Parses a strictly positive integer number of seconds.
fn parse_timeout_secs(raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("must be a positive integer number of seconds".to_owned());
    }
    let secs: u64 =
        trimmed.parse().map_err(|_| "must be a positive integer number of seconds".to_owned())?;
    if secs == 0 {
        return Err("must be greater than zero".to_owned());
    }
    Ok(Duration::from_secs(secs))
}
