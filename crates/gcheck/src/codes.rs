//! POSIX errno names for failure reports.
//!
//! A raw error code in a report is only half the story; the name makes
//! it readable without `errno -l` at hand. Only the commonly handled
//! values are listed.

/// Name of a raw errno value, `"unknown errno"` if unlisted.
///
/// ```
/// assert_eq!(gcheck::codes::errno_name(12), "ENOMEM");
/// ```
pub fn errno_name(errno: i32) -> &'static str {
    match errno {
        // ── Process / permission ──────────────────────────────
        1 => "EPERM",
        2 => "ENOENT",
        3 => "ESRCH",
        4 => "EINTR",
        5 => "EIO",
        6 => "ENXIO",
        13 => "EACCES",
        17 => "EEXIST",

        // ── Memory / resources ────────────────────────────────
        11 => "EAGAIN",
        12 => "ENOMEM",
        23 => "ENFILE",
        24 => "EMFILE",

        // ── I/O ───────────────────────────────────────────────
        9 => "EBADF",
        22 => "EINVAL",
        27 => "EFBIG",
        28 => "ENOSPC",
        32 => "EPIPE",

        // ── Networking ────────────────────────────────────────
        98 => "EADDRINUSE",
        99 => "EADDRNOTAVAIL",
        100 => "ENETDOWN",
        101 => "ENETUNREACH",
        103 => "ECONNABORTED",
        104 => "ECONNRESET",
        105 => "ENOBUFS",
        106 => "EISCONN",
        107 => "ENOTCONN",
        110 => "ETIMEDOUT",
        111 => "ECONNREFUSED",
        113 => "EHOSTUNREACH",
        114 => "EALREADY",
        115 => "EINPROGRESS",

        _ => "unknown errno",
    }
}
