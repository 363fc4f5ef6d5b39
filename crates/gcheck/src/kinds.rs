//! The standard failure kinds.
//!
//! Kinds that occur over and over are declared here once, so call sites
//! can use them instead of declaring their own, and so the wording of
//! recurring failures stays consistent across the whole codebase.
//! Domain-specific kinds are declared next to their call sites with
//! [`decl_kind!`](crate::decl_kind).

use std::any::Any;
use std::fmt::{self, Write};

use crate::{decl_kind, Kind};

// ── Programmer errors ─────────────────────────────────────────────

decl_kind! {
    /// An internal consistency check failed.
    ///
    /// Some condition the author of the code believed must hold at this
    /// point does not. That is a defect in the library, not in the
    /// calling program; there is usually little a caller can do beyond
    /// reporting it with the smallest reproducing input.
    pub struct InternalError =
        "An internal consistency check failed. This indicates a defect in the \
         library itself rather than in the program calling it. Please report it \
         together with the smallest input that still triggers it.";
}

decl_kind! {
    /// Functionality that has not been written yet.
    ///
    /// In many cases this only means there was no need for it so far,
    /// not that it is hard to implement.
    pub struct NotImplemented =
        "You are trying to use functionality that is currently not implemented. \
         Often this merely means that no need for it had come up yet; it may be \
         worth looking at the marked location to see what is missing.";
}

decl_kind! {
    /// A code path the programmer marked as impossible to reach.
    pub struct Unreachable =
        "The program reached a line of code that was marked as unreachable. \
         Either invalid arguments made it into a dispatch, or an assumption \
         about the possible values of some variable does not actually hold.";
}

decl_kind! {
    /// Free-form failure text assembled at the call site.
    ///
    /// The escape hatch for one-off conditions that do not warrant a
    /// declared kind: `Message::new(format!("tolerance {tol} rejected"))`.
    pub struct Message = "(no message given)";
}

decl_kind! {
    /// The object was used before being initialized.
    pub struct NotInitialized;
}

decl_kind! {
    /// The object is in a state unsuitable for the requested operation.
    pub struct InvalidState;
}

// ── Resource failures ─────────────────────────────────────────────

decl_kind! {
    /// An input/output operation failed.
    pub struct IoError =
        "An input/output error has occurred. When reading, the file may not \
         exist, may not be readable, or may not match the expected format. When \
         writing, the target may not be writable; a typical example is an \
         output file in a directory that does not exist.";
}

decl_kind! {
    /// The named file could not be opened.
    pub struct FileNotOpen(String);
    (name; out) => {
        write!(out, "Could not open file {name}.")
    }
}

decl_kind! {
    /// An allocation failed.
    pub struct OutOfMemory(usize);
    (size; out) => {
        write!(
            out,
            "Allocating {size} bytes failed. Either the system is genuinely out \
             of memory, or the requested size is beyond all reason because it \
             was computed incorrectly."
        )
    }
}

// ── Numeric failures ──────────────────────────────────────────────

decl_kind! {
    /// A division by zero was attempted.
    pub struct DivideByZero =
        "A piece of code is attempting a division by zero. This is likely going \
         to lead to results that make no sense.";
}

decl_kind! {
    /// A computed value is infinite or NaN.
    ///
    /// The location reporting this is only the first place that checks
    /// for finiteness; the value may have been produced much earlier.
    pub struct NumberNotFinite(f64);
    (value; out) => {
        write!(
            out,
            "A number in this computation is not finite: its value is {value}. \
             Either an operation here produced it, or one of the arguments \
             already carried it from an earlier computation; in that case this \
             check merely trips first and the actual cause lies upstream."
        )
    }
}

// ── Range and consistency failures ────────────────────────────────

decl_kind! {
    /// Two sizes were supposed to be equal.
    pub struct DimensionMismatch(usize, usize);
    (a, b; out) => {
        write!(
            out,
            "Two sizes or dimensions were supposed to be equal, but aren't. \
             They are {a} and {b}."
        )
    }
}

decl_kind! {
    /// A size was supposed to match one of two admissible values.
    pub struct DimensionMismatch2(usize, usize, usize);
    (size, first, second; out) => {
        write!(
            out,
            "The size or dimension of one object, {size}, was supposed to equal \
             one of two values, but matches neither. The two admissible values \
             are {first} and {second}."
        )
    }
}

decl_kind! {
    /// The first number was supposed to be an integer multiple of the
    /// second.
    pub struct NotMultiple(i64, i64);
    (a, b; out) => {
        write!(out, "Division of {a} by {b} has a remainder different from zero.")
    }
}

decl_kind! {
    /// Index outside its admissible half-open range.
    ///
    /// Generic over the index type so the same declaration serves 32-bit
    /// and 64-bit indices without duplicating the message logic.
    pub struct IndexOutOfRange<T>(T, T, T);
    (index, lower, upper; out) => {
        write!(out, "Index {index} is not in the half-open range [{lower},{upper}).")?;
        if lower == upper {
            write!(
                out,
                " In the current case, this range is in fact empty, suggesting \
                 that you are accessing an element of an empty collection such \
                 as a vector that has not been set to the correct size."
            )?;
        }
        Ok(())
    }
    where T: crate::KindArg + PartialEq
}

// ── Missing capabilities ──────────────────────────────────────────

decl_kind! {
    /// Functionality whose support was not compiled into this build.
    pub struct UnavailableFeature(&'static str);
    (feature; out) => {
        write!(
            out,
            "You are attempting to use functionality that requires support for \
             {feature}, but that support was not compiled into this build. \
             Rebuild with the corresponding feature enabled to use it."
        )
    }
}

// ── External systems ──────────────────────────────────────────────

/// A foreign call set a nonzero error code.
///
/// Carries the raw code; the rendered description adds the POSIX name
/// from [`codes`](crate::codes) so the report is readable without a
/// manual lookup.
#[derive(Debug, Clone)]
pub struct OsError(pub i32);

impl Kind for OsError {
    fn print_info(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "An external call failed with error code {} ({}).",
            self.0,
            crate::codes::errno_name(self.0)
        )
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
