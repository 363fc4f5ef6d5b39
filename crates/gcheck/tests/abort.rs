//! The abort path, exercised in a child process.
//!
//! The test re-executes its own binary filtered to itself with a marker
//! variable set; the child trips a check with the default configuration
//! and dies, and the parent inspects exit status and captured stderr.
#![cfg(debug_assertions)]

use std::env;
use std::process::Command;

use gcheck::check;
use gcheck::kinds::InternalError;
use gcheck::Failure;

fn failing_check() -> Result<(), Failure> {
    check!(2 + 2 == 5, InternalError::default());
    Ok(())
}

#[test]
fn failed_check_aborts_with_a_full_report() {
    if env::var("GCHECK_TEST_ABORT_CHILD").is_ok() {
        let _ = failing_check();
        // The check above aborts; getting here means it did not fire.
        std::process::exit(0);
    }

    let exe = env::current_exe().unwrap();
    let output = Command::new(exe)
        .args([
            "failed_check_aborts_with_a_full_report",
            "--exact",
            "--nocapture",
            "--test-threads=1",
        ])
        .env("GCHECK_TEST_ABORT_CHILD", "1")
        .output()
        .unwrap();

    assert!(
        !output.status.success(),
        "child was expected to abort but exited cleanly: {output:?}"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 + 2 == 5"), "no condition text in:\n{stderr}");
    assert!(stderr.contains("InternalError"), "no kind name in:\n{stderr}");
    assert!(stderr.contains("abort.rs"), "no file name in:\n{stderr}");
}
