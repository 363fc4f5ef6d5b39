//! # gcheck — Generic Check
//!
//! Invariant and precondition checking for numerical code, with typed
//! failure kinds and full call-site diagnostics.
//!
//! ## Design
//!
//! Every check funnels through the same pipeline:
//!
//! 1. A checking macro evaluates a condition. On the non-failing path
//!    nothing else happens; the failure kind expression is not evaluated.
//! 2. On failure, a [`Kind`] value is constructed with whatever contextual
//!    arguments its declaration captures, and handed to the issue machinery
//!    together with file, line, function path, and the literal condition
//!    text.
//! 3. Depending on the macro's policy and the process-wide configuration,
//!    the resulting [`Failure`] either aborts the process after printing a
//!    full report, propagates as a catchable `Err`, or is logged to stderr
//!    and dropped.
//!
//! The report always carries enough context to diagnose without a
//! debugger: location, the violated condition, the kind's own description
//! of its captured arguments, and (by default) a stack trace.
//!
//! ## Check families
//!
//! | Macro                 | Active in        | On failure                     |
//! |-----------------------|------------------|--------------------------------|
//! | [`check!`]            | debug builds     | abort, or `Err` if abort is off|
//! | [`check_nothrow!`]    | debug builds     | log to stderr, continue        |
//! | [`ensure!`]           | every build      | `Err`, always catchable        |
//! | [`not_implemented!`]  | every build      | abort, or `Err` if abort is off|
//! | [`assert_unreachable!`]| every build     | abort, or `Err` if abort is off|
//!
//! ## Quick Start
//!
//! ```rust
//! use gcheck::{ensure, kinds::DimensionMismatch};
//!
//! fn dot(a: &[f64], b: &[f64]) -> Result<f64, gcheck::Failure> {
//!     ensure!(a.len() == b.len(), DimensionMismatch(a.len(), b.len()));
//!     Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
//! }
//!
//! let err = dot(&[1.0, 2.0], &[1.0]).unwrap_err();
//! assert!(err.kind_is::<DimensionMismatch>());
//! assert!(err.message().contains("2 and 1"));
//! ```
//!
//! Declaring a new kind:
//!
//! ```rust
//! use gcheck::decl_kind;
//!
//! decl_kind! {
//!     /// A solver left the admissible residual range.
//!     pub struct ResidualTooLarge(f64, f64);
//!     (residual, bound; out) => {
//!         write!(out, "The iteration residual {residual} exceeds the bound {bound}.")
//!     }
//! }
//! ```
//!
//! ## Configuration
//!
//! Process-wide, set once at startup, read by every failing check:
//!
//! - [`disable_abort_on_failure`] / [`enable_abort_on_failure`]
//! - [`suppress_stacktrace`]
//! - [`set_additional_output`]
//! - [`init_from_env`] (reads `GCHECK_NO_ABORT`, `GCHECK_NO_STACKTRACE`,
//!   `GCHECK_EXTRA_OUTPUT`)
//!
//! ## Feature Flags
//!
//! | Flag        | Effect |
//! |-------------|--------|
//! | `backtrace` | Captures `std::backtrace::Backtrace` at failure time; symbolization is deferred to render time. Enabled by default; without it, capture is a no-op. |

mod config;
mod context;
mod failure;
mod macros;
mod sink;
mod stacktrace;

pub mod codes;
pub mod kinds;

#[doc(hidden)]
pub mod issue;

// ── Public API ────────────────────────────────────────────────────

pub use config::{
    disable_abort_on_failure, enable_abort_on_failure, init_from_env, set_additional_output,
    suppress_stacktrace,
};
pub use failure::{Failure, Kind, KindArg};
