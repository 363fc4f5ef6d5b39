//! Process-wide configuration for the failure paths.
//!
//! All toggles live behind this module so a caller that needs different
//! semantics (thread-local, synchronized) can substitute them without
//! touching call sites.
//!
//! The intended lifecycle is: set once during program startup, before
//! concurrent work begins, then treat as read-only. The atomics below make
//! a mid-flight toggle well-defined at the language level, but no ordering
//! is promised between a configuration change on one thread and a check
//! firing on another.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static ABORT_ON_FAILURE: AtomicBool = AtomicBool::new(true);
static STACKTRACE_SUPPRESSED: AtomicBool = AtomicBool::new(false);
static ADDITIONAL_OUTPUT: Mutex<Option<String>> = Mutex::new(None);

/// Switch [`check!`](crate::check) failures from aborting the process to
/// returning a catchable [`Failure`](crate::Failure).
///
/// Useful when logging every failure, or when testing that a check fires;
/// regression tests are the typical caller.
pub fn disable_abort_on_failure() {
    ABORT_ON_FAILURE.store(false, Ordering::Relaxed);
}

/// Restore the default behavior: a failed [`check!`](crate::check) prints
/// its report and aborts the process.
pub fn enable_abort_on_failure() {
    ABORT_ON_FAILURE.store(true, Ordering::Relaxed);
}

/// Stop capturing stack traces in failure reports.
///
/// Traces embed addresses and library paths that differ between machines;
/// suppressing them keeps captured output comparable across systems.
pub fn suppress_stacktrace() {
    STACKTRACE_SUPPRESSED.store(true, Ordering::Relaxed);
}

/// Set (or clear, with `None`) a string appended to every failure report.
///
/// With many processes writing to one console it is convenient to append,
/// say, the host name or rank, so the report identifies which instance
/// failed. The previous value is replaced.
pub fn set_additional_output(text: Option<&str>) {
    *lock_additional() = text.map(String::from);
}

/// Initialize the toggles from environment variables.
///
/// | Variable              | Effect                        |
/// |-----------------------|-------------------------------|
/// | `GCHECK_NO_ABORT`     | `disable_abort_on_failure()`  |
/// | `GCHECK_NO_STACKTRACE`| `suppress_stacktrace()`       |
/// | `GCHECK_EXTRA_OUTPUT` | `set_additional_output(...)`  |
///
/// Booleans accept `1`, `true`, `yes`, `on` (case-insensitive).
pub fn init_from_env() {
    if env_bool("GCHECK_NO_ABORT") {
        disable_abort_on_failure();
    }
    if env_bool("GCHECK_NO_STACKTRACE") {
        suppress_stacktrace();
    }
    if let Ok(text) = std::env::var("GCHECK_EXTRA_OUTPUT") {
        set_additional_output(Some(&text));
    }
}

// ── Readers (issue machinery and rendering) ───────────────────────

#[inline]
pub(crate) fn abort_on_failure() -> bool {
    ABORT_ON_FAILURE.load(Ordering::Relaxed)
}

#[inline]
pub(crate) fn stacktrace_suppressed() -> bool {
    STACKTRACE_SUPPRESSED.load(Ordering::Relaxed)
}

pub(crate) fn additional_output() -> Option<String> {
    lock_additional().clone()
}

fn lock_additional() -> std::sync::MutexGuard<'static, Option<String>> {
    match ADDITIONAL_OUTPUT.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn env_bool(key: &str) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The abort flag itself is exercised in the integration tests, where
    // each toggle runs in its own process.

    #[test]
    fn defaults() {
        assert!(abort_on_failure());
        assert!(!stacktrace_suppressed());
        assert!(additional_output().is_none());
    }

    #[test]
    fn env_bool_accepts_common_spellings() {
        std::env::set_var("GCHECK_TEST_FLAG", "Yes");
        assert!(env_bool("GCHECK_TEST_FLAG"));
        std::env::set_var("GCHECK_TEST_FLAG", "0");
        assert!(!env_bool("GCHECK_TEST_FLAG"));
        std::env::remove_var("GCHECK_TEST_FLAG");
        assert!(!env_bool("GCHECK_TEST_FLAG"));
    }
}
