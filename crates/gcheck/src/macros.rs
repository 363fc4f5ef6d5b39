//! The checking macros and the kind-declaration macro.
//!
//! Three checking families share one pipeline but differ in when they are
//! active and what a failure does:
//!
//! - [`check!`]: debug builds only; abort by default, catchable `Err`
//!   after [`disable_abort_on_failure`](crate::disable_abort_on_failure).
//! - [`check_nothrow!`]: debug builds only; logs and continues. For
//!   destructors and other places that must not unwind.
//! - [`ensure!`]: every build; always a catchable `Err`. For user input,
//!   external return codes, and everything else that must stay checked in
//!   optimized builds.
//!
//! Plus the marker operations [`not_implemented!`] and
//! [`assert_unreachable!`], which have no condition and always fail when
//! reached.
//!
//! In optimized builds the debug-only macros expand to a constant-false
//! branch: the condition and the kind expression are never evaluated at
//! run time and the generated code disappears, but both stay visible to
//! the type checker so they cannot bit-rot.

/// Declare a failure kind: a concrete type implementing
/// [`Kind`](crate::Kind).
///
/// # Forms
///
/// ```ignore
/// // Zero-argument: identity only, no payload, empty description.
/// decl_kind! {
///     /// The object was used before initialization.
///     pub struct NotInitialized;
/// }
///
/// // Message-only: one runtime string, compiled-in default text.
/// decl_kind! {
///     /// Generic internal inconsistency.
///     pub struct InternalError = "An internal consistency check failed.";
/// }
///
/// // 1..5 captured arguments plus a render template. The template is an
/// // ordinary expression over the destructured arguments, evaluated at
/// // render time; it may branch on the captured values.
/// decl_kind! {
///     /// Two sizes were supposed to agree.
///     pub struct DimensionMismatch(usize, usize);
///     (a, b; out) => {
///         write!(out, "Two sizes were supposed to be equal, but are {a} and {b}.")
///     }
/// }
///
/// // Generic over the argument type, so one declaration serves every
/// // index width. Bounds go in a trailing where clause.
/// decl_kind! {
///     /// Index outside its admissible half-open range.
///     pub struct IndexOutOfRange<T>(T, T, T);
///     (index, lower, upper; out) => {
///         write!(out, "Index {index} is not in [{lower},{upper}).")
///     }
///     where T: gcheck::KindArg + PartialEq
/// }
/// ```
///
/// Arguments are copied in at construction and immutable afterwards, so
/// the rendered text shows the values at failure time. Constructed
/// values are ordinary tuple structs: `DimensionMismatch(3, 4)`.
#[macro_export]
macro_rules! decl_kind {
    // ── Zero-argument ─────────────────────────────────────────
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $name;

        impl $crate::Kind for $name {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };

    // ── Message-only ──────────────────────────────────────────
    ($(#[$meta:meta])* $vis:vis struct $name:ident = $default:expr;) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name(pub ::std::string::String);

        impl $name {
            /// Replace the compiled-in default text.
            pub fn new(msg: impl ::core::convert::Into<::std::string::String>) -> Self {
                Self(msg.into())
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self(::std::string::String::from($default))
            }
        }

        impl $crate::Kind for $name {
            fn print_info(&self, out: &mut dyn ::core::fmt::Write) -> ::core::fmt::Result {
                ::core::fmt::Write::write_str(out, self.0.as_str())
            }
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };

    // ── 1..5 captured arguments ───────────────────────────────
    ($(#[$meta:meta])* $vis:vis struct $name:ident ( $($ty:ty),+ $(,)? );
     ( $($arg:ident),+ ; $out:ident ) => $body:block) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name( $(pub $ty),+ );

        impl $crate::Kind for $name {
            fn print_info(&self, $out: &mut dyn ::core::fmt::Write) -> ::core::fmt::Result {
                #[allow(unused_imports)]
                use ::core::fmt::Write as _;
                let $name($($arg),+) = self;
                $body
            }
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };

    // ── Generic over the argument type ────────────────────────
    ($(#[$meta:meta])* $vis:vis struct $name:ident < $($g:ident),+ > ( $($ty:ty),+ $(,)? );
     ( $($arg:ident),+ ; $out:ident ) => $body:block
     where $($bound:tt)+) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name< $($g),+ >( $(pub $ty),+ ) where $($bound)+;

        impl< $($g),+ > $crate::Kind for $name< $($g),+ > where $($bound)+ {
            fn print_info(&self, $out: &mut dyn ::core::fmt::Write) -> ::core::fmt::Result {
                #[allow(unused_imports)]
                use ::core::fmt::Write as _;
                let $name($($arg),+) = self;
                $body
            }
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };
}

/// Path of the enclosing function, as a `&'static str`.
///
/// There is no stable built-in for this; the usual trick is to name a
/// local item and strip its suffix from `type_name`.
#[doc(hidden)]
#[macro_export]
macro_rules! __fn_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        &name[..name.len() - 3]
    }};
}

/// Assert an internal invariant. Debug builds only.
///
/// On failure, prints the full report and aborts the process; after
/// [`disable_abort_on_failure`](crate::disable_abort_on_failure) it
/// instead returns the [`Failure`](crate::Failure) as `Err` from the
/// enclosing function, which must return a `Result` whose error type
/// implements `From<Failure>`.
///
/// The kind expression is evaluated only when the condition has already
/// failed, so the passing path costs one branch and nothing else. In
/// optimized builds the whole check compiles away.
///
/// ```ignore
/// check!(matrix.is_square(), DimensionMismatch(matrix.m(), matrix.n()));
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr, $kind:expr $(,)?) => {
        if ::core::cfg!(debug_assertions) {
            if !($cond) {
                return ::core::result::Result::Err(
                    $crate::issue::issue_abort_or_throw(
                        ::core::file!(),
                        ::core::line!(),
                        $crate::__fn_path!(),
                        ::core::option::Option::Some(::core::stringify!($cond)),
                        ::core::stringify!($kind),
                        $kind,
                    )
                    .into(),
                );
            }
        }
    };
}

/// Assert an internal invariant without ever unwinding. Debug builds
/// only.
///
/// On failure, prints the full report to stderr and continues. Never
/// returns early, never aborts; the one checking operation that is safe
/// inside `Drop` implementations.
///
/// ```ignore
/// impl Drop for Workspace {
///     fn drop(&mut self) {
///         check_nothrow!(self.leases == 0, Message::new("workspace dropped with live leases"));
///     }
/// }
/// ```
#[macro_export]
macro_rules! check_nothrow {
    ($cond:expr, $kind:expr $(,)?) => {
        if ::core::cfg!(debug_assertions) {
            if !($cond) {
                $crate::issue::issue_log(
                    ::core::file!(),
                    ::core::line!(),
                    $crate::__fn_path!(),
                    ::core::option::Option::Some(::core::stringify!($cond)),
                    ::core::stringify!($kind),
                    $kind,
                );
            }
        }
    };
}

/// Check a condition in every build profile; failures are always
/// catchable.
///
/// Unlike [`check!`], this ignores the abort toggle and the build
/// profile: the condition is evaluated in optimized builds too, and a
/// failure is always returned as `Err`. Use it for user input, file
/// contents, and return codes of external libraries.
///
/// ```ignore
/// ensure!(header.version <= FORMAT_VERSION, UnavailableFeature("format v3"));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:expr $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err(
                $crate::issue::issue_throw(
                    ::core::file!(),
                    ::core::line!(),
                    $crate::__fn_path!(),
                    ::core::option::Option::Some(::core::stringify!($cond)),
                    ::core::stringify!($kind),
                    $kind,
                )
                .into(),
            );
        }
    };
}

/// Mark a code path that is not implemented yet. Always fails when
/// reached, with the abort-or-throw policy of [`check!`].
#[macro_export]
macro_rules! not_implemented {
    () => {
        return ::core::result::Result::Err(
            $crate::issue::issue_abort_or_throw(
                ::core::file!(),
                ::core::line!(),
                $crate::__fn_path!(),
                ::core::option::Option::None,
                "NotImplemented",
                $crate::kinds::NotImplemented::default(),
            )
            .into(),
        )
    };
}

/// Mark a code path the surrounding logic should make impossible.
/// Always fails when reached, with the abort-or-throw policy of
/// [`check!`].
///
/// ```ignore
/// match format {
///     Format::Vtk => write_vtk(out),
///     Format::Vtu => write_vtu(out),
///     _ => assert_unreachable!(),
/// }
/// ```
#[macro_export]
macro_rules! assert_unreachable {
    () => {
        return ::core::result::Result::Err(
            $crate::issue::issue_abort_or_throw(
                ::core::file!(),
                ::core::line!(),
                $crate::__fn_path!(),
                ::core::option::Option::None,
                "Unreachable",
                $crate::kinds::Unreachable::default(),
            )
            .into(),
        )
    };
}

// ── Convenience wrappers for the checks that repeat everywhere ────

/// [`check!`] that two sizes agree, with the standard
/// [`DimensionMismatch`](crate::kinds::DimensionMismatch) kind.
#[macro_export]
macro_rules! check_dimension {
    ($dim1:expr, $dim2:expr $(,)?) => {
        $crate::check!(
            ($dim1) == ($dim2),
            $crate::kinds::DimensionMismatch(($dim1) as usize, ($dim2) as usize)
        )
    };
}

/// [`check!`] that `index` lies in the half-open range `[0, range)`.
#[macro_export]
macro_rules! check_index {
    ($index:expr, $range:expr $(,)?) => {
        $crate::check!(
            ($index) < ($range),
            $crate::kinds::IndexOutOfRange(($index), 0, ($range))
        )
    };
}

/// [`check!`] that a floating-point value is finite.
#[macro_export]
macro_rules! check_finite {
    ($number:expr $(,)?) => {
        $crate::check!(
            ($number).is_finite(),
            $crate::kinds::NumberNotFinite(($number) as f64)
        )
    };
}

/// [`ensure!`] that an external call returned zero, carrying the raw
/// code in an [`OsError`](crate::kinds::OsError) otherwise.
#[macro_export]
macro_rules! ensure_os {
    ($code:expr $(,)?) => {
        $crate::ensure!(($code) == 0, $crate::kinds::OsError(($code) as i32))
    };
}

#[cfg(test)]
mod tests {
    use crate::kinds::{DimensionMismatch, Message, OsError};
    use crate::{Failure, Kind};

    fn guarded(ok: bool, constructions: &mut usize) -> Result<(), Failure> {
        check!(ok, {
            *constructions += 1;
            Message::new("must never be constructed")
        });
        Ok(())
    }

    #[test]
    fn passing_check_constructs_no_kind() {
        let mut constructions = 0;
        guarded(true, &mut constructions).unwrap();
        assert_eq!(constructions, 0);
    }

    fn bounded(len: usize, cap: usize) -> Result<(), Failure> {
        ensure!(len <= cap, DimensionMismatch(len, cap));
        Ok(())
    }

    #[test]
    fn ensure_passes() {
        assert!(bounded(3, 8).is_ok());
    }

    #[test]
    fn ensure_throws_with_context() {
        let err = bounded(9, 4).unwrap_err();
        assert!(err.kind_is::<DimensionMismatch>());
        assert_eq!(err.condition(), Some("len <= cap"));
        assert!(err.name().contains("DimensionMismatch"));
        assert!(err.function().contains("bounded"));
        assert!(err.message().contains("9 and 4"));
    }

    #[test]
    fn fn_path_names_enclosing_function() {
        let path = __fn_path!();
        assert!(path.contains("fn_path_names_enclosing_function"), "got {path}");
    }

    fn external(ret: i32) -> Result<(), Failure> {
        ensure_os!(ret);
        Ok(())
    }

    #[test]
    fn os_code_is_carried_and_named() {
        assert!(external(0).is_ok());
        let err = external(12).unwrap_err();
        let os = err.kind_as::<OsError>().unwrap();
        assert_eq!(os.0, 12);
        assert!(err.message().contains("ENOMEM"));
    }

    fn normalized(x: f64) -> Result<f64, Failure> {
        check_finite!(x);
        Ok(x)
    }

    #[test]
    fn finite_value_passes() {
        assert_eq!(normalized(2.0).unwrap(), 2.0);
    }

    fn element(i: usize, n: usize) -> Result<usize, Failure> {
        check_index!(i, n);
        Ok(i)
    }

    #[test]
    fn index_in_range_passes() {
        assert_eq!(element(3, 10).unwrap(), 3);
    }

    fn square(m: usize, n: usize) -> Result<(), Failure> {
        check_dimension!(m, n);
        Ok(())
    }

    #[test]
    fn equal_dimensions_pass() {
        assert!(square(7, 7).is_ok());
    }

    // The declaration shapes above arity 3 have no standard kinds; make
    // sure the mechanism itself handles them.

    decl_kind! {
        /// Entry outside the sparsity block.
        struct EntryOutsideBlock(usize, usize, usize, usize);
        (row, col, n_rows, n_cols; out) => {
            write!(out, "Entry ({row},{col}) lies outside the {n_rows}x{n_cols} block.")
        }
    }

    decl_kind! {
        /// Vertex coordinates outside the admissible patch.
        struct VertexOutsidePatch(usize, usize, f64, f64, f64);
        (cell, vertex, x, y, z; out) => {
            write!(
                out,
                "Vertex {vertex} of cell {cell} lies at ({x}, {y}, {z}), outside the patch."
            )
        }
    }

    fn describe(kind: &dyn Kind) -> String {
        let mut s = String::new();
        kind.print_info(&mut s).unwrap();
        s
    }

    #[test]
    fn four_argument_kind_renders_all_arguments() {
        let text = describe(&EntryOutsideBlock(8, 2, 4, 4));
        for needle in ["8", "2", "4x4"] {
            assert!(text.contains(needle), "missing {needle} in: {text}");
        }
    }

    #[test]
    fn five_argument_kind_renders_in_declaration_order() {
        let text = describe(&VertexOutsidePatch(3, 1, 0.5, -1.25, 2.0));
        let positions: Vec<usize> = ["3", "1", "0.5", "-1.25", "2"]
            .iter()
            .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        // cell appears after vertex in the sentence, coordinates in order
        assert!(positions[2] < positions[3] && positions[3] < positions[4]);
    }
}
