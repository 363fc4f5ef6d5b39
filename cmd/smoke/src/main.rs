//! Smoke tool for the failure paths.
//!
//! Runs the throw and log-only paths and prints what they produce. With
//! `--abort`, additionally trips an abort-or-throw check while aborting
//! is enabled, so the abort path can be observed: the process prints the
//! report and dies.
//!
//! # Environment Variables
//!
//! - `GCHECK_NO_ABORT=1` - failed `check!`s return errors instead of aborting
//! - `GCHECK_NO_STACKTRACE=1` - suppress stack traces in the reports
//! - `GCHECK_EXTRA_OUTPUT=<text>` - appended to every report

use gcheck::kinds::{DimensionMismatch, InternalError, Message};
use gcheck::{check, check_nothrow, ensure, Failure};

fn dot(a: &[f64], b: &[f64]) -> Result<f64, Failure> {
    ensure!(a.len() == b.len(), DimensionMismatch(a.len(), b.len()));
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

fn invariant(ok: bool) -> Result<(), Failure> {
    check!(ok, InternalError::default());
    Ok(())
}

// GCHECK_EXTRA_OUTPUT="rank 0" cargo run -p gcheck-smoke -- --abort
fn main() {
    gcheck::init_from_env();

    println!("=== gcheck smoke ===\n");

    // Throw path: the always-active check, caught and printed.
    match dot(&[1.0, 2.0, 3.0], &[1.0, 2.0]) {
        Ok(_) => println!("unexpected: mismatched dot product succeeded"),
        Err(failure) => {
            println!(
                "caught {} at {}:{}",
                failure.name(),
                failure.file(),
                failure.line()
            );
            println!("{failure}");
        }
    }

    // Log-only path: prints a report to stderr and keeps going.
    check_nothrow!(1 + 1 == 3, Message::new("log-only demonstration"));
    println!("still running after the log-only check");

    // Abort path (debug builds): prints the report, then SIGABRT.
    if std::env::args().any(|arg| arg == "--abort") {
        println!("tripping an abort-or-throw check with aborting enabled...");
        let _ = invariant(false);
        println!("not reached in debug builds");
    }
}
