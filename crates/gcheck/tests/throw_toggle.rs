//! Abort-or-throw checks with aborting disabled.
//!
//! Everything in this file mutates the process-wide configuration, so it
//! all lives in one test binary and serializes on a lock; the other
//! integration tests run with pristine configuration in their own
//! processes.
#![cfg(debug_assertions)]

use std::sync::{Mutex, MutexGuard};

use gcheck::kinds::{IndexOutOfRange, InternalError, NotImplemented, Unreachable};
use gcheck::{assert_unreachable, check, check_index, not_implemented, Failure};

static CONFIG: Mutex<()> = Mutex::new(());

fn config_guard() -> MutexGuard<'static, ()> {
    match CONFIG.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn failing_check() -> Result<(), Failure> {
    check!(2 + 2 == 5, InternalError::default());
    Ok(())
}

fn unfinished() -> Result<(), Failure> {
    not_implemented!()
}

fn impossible() -> Result<(), Failure> {
    assert_unreachable!()
}

fn element(i: usize, n: usize) -> Result<usize, Failure> {
    check_index!(i, n);
    Ok(i)
}

#[test]
fn toggled_check_throws_the_exact_kind() {
    let _guard = config_guard();
    gcheck::disable_abort_on_failure();

    let err = failing_check().unwrap_err();
    assert!(err.kind_is::<InternalError>());
    assert_eq!(err.condition(), Some("2 + 2 == 5"));
    assert!(err.message().contains("2 + 2 == 5"));
    assert!(err.message().contains("InternalError"));
    assert!(err.function().contains("failing_check"));

    gcheck::enable_abort_on_failure();
}

#[test]
fn markers_throw_their_default_kinds() {
    let _guard = config_guard();
    gcheck::disable_abort_on_failure();

    let err = unfinished().unwrap_err();
    assert!(err.kind_is::<NotImplemented>());
    assert_eq!(err.condition(), None);
    assert!(!err.message().contains("The violated condition was:"));
    assert!(err.message().contains("not implemented"));

    let err = impossible().unwrap_err();
    assert!(err.kind_is::<Unreachable>());
    assert_eq!(err.condition(), None);
    assert!(err.message().contains("unreachable"));

    gcheck::enable_abort_on_failure();
}

#[test]
fn toggled_index_check_carries_the_range() {
    let _guard = config_guard();
    gcheck::disable_abort_on_failure();

    let err = element(7, 4).unwrap_err();
    let kind = err.kind_as::<IndexOutOfRange<usize>>().unwrap();
    assert_eq!((kind.0, kind.1, kind.2), (7, 0, 4));
    assert!(err.message().contains("[0,4)"));

    gcheck::enable_abort_on_failure();
}

#[test]
fn suppressed_stacktrace_leaves_no_trace_section() {
    let _guard = config_guard();
    gcheck::disable_abort_on_failure();
    gcheck::suppress_stacktrace();

    let err = failing_check().unwrap_err();
    assert!(!err.message().contains("Stacktrace:"));

    gcheck::enable_abort_on_failure();
}

#[test]
fn additional_output_is_appended_and_removable() {
    let _guard = config_guard();
    gcheck::disable_abort_on_failure();

    gcheck::set_additional_output(Some("on host alpha, rank 3"));
    let err = failing_check().unwrap_err();
    assert!(err.message().contains("on host alpha, rank 3"));

    gcheck::set_additional_output(None);
    let err = failing_check().unwrap_err();
    assert!(!err.message().contains("on host alpha"));

    gcheck::enable_abort_on_failure();
}
