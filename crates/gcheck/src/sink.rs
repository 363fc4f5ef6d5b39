//! The diagnostic sink failing checks write to.
//!
//! A whole report is written under one stderr lock so concurrent failures
//! on different threads cannot interleave, and flushed unconditionally so
//! the text survives an immediately following abort.

use std::io::Write;

pub(crate) fn emit(text: &str) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = handle.write_all(b"\n");
    let _ = handle.write_all(text.as_bytes());
    let _ = handle.flush();
}
