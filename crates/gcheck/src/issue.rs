//! The decision machinery behind the checking macros.
//!
//! These functions are not for use outside the macro expansions. Each one
//! assembles the [`Failure`] (location, condition text, kind, stack
//! trace) and then performs exactly one of: terminate the process, hand
//! the failure back for the macro to return as `Err`, or log it and
//! return normally.

use crate::config;
use crate::failure::{Failure, Kind};
use crate::sink;

/// Print the report and terminate the process.
///
/// No unwinding, no destructors: in-flight state on other threads is
/// abandoned where it stands.
fn abort_with(failure: &Failure) -> ! {
    sink::emit(failure.message());
    std::process::abort();
}

/// Abort-or-throw policy: abort if the global flag allows it, otherwise
/// hand the failure back to be returned as `Err`.
#[doc(hidden)]
pub fn issue_abort_or_throw<K: Kind>(
    file: &'static str,
    line: u32,
    function: &'static str,
    condition: Option<&'static str>,
    name: &'static str,
    kind: K,
) -> Failure {
    let failure = Failure::assemble(file, line, function, condition, name, kind);
    if config::abort_on_failure() {
        abort_with(&failure);
    }
    failure
}

/// Throw-always policy: hand the failure back unconditionally, ignoring
/// the abort flag. Used by the checks that must stay catchable in every
/// build configuration.
#[doc(hidden)]
pub fn issue_throw<K: Kind>(
    file: &'static str,
    line: u32,
    function: &'static str,
    condition: Option<&'static str>,
    name: &'static str,
    kind: K,
) -> Failure {
    Failure::assemble(file, line, function, condition, name, kind)
}

/// Log-only policy: print the report and return normally. Never panics,
/// never aborts; safe from destructors and other no-unwind contexts.
#[doc(hidden)]
pub fn issue_log<K: Kind>(
    file: &'static str,
    line: u32,
    function: &'static str,
    condition: Option<&'static str>,
    name: &'static str,
    kind: K,
) {
    let failure = Failure::assemble(file, line, function, condition, name, kind);
    sink::emit(failure.message());
}
