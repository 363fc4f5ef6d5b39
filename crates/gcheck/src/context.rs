//! The write-once data carried by every failure.

use crate::config;
use crate::stacktrace::StackTrace;

/// Location and identity of a single failed check.
///
/// Populated exactly once, by the issue machinery, at the moment of
/// failure; immutable afterwards. The kind's captured arguments live next
/// to this in [`Failure`](crate::Failure), not here.
#[derive(Debug)]
pub(crate) struct FailureContext {
    /// Source file of the failed check.
    pub(crate) file: &'static str,
    /// Line of the failed check.
    pub(crate) line: u32,
    /// Path of the enclosing function.
    pub(crate) function: &'static str,
    /// Literal source text of the violated condition. `None` for the
    /// marker operations, which have no condition.
    pub(crate) condition: Option<&'static str>,
    /// Name and call sequence of the kind, as written at the call site.
    pub(crate) name: &'static str,
    /// Call stack at the moment of failure, if captured.
    pub(crate) stacktrace: StackTrace,
}

impl FailureContext {
    pub(crate) fn unset() -> Self {
        Self {
            file: "",
            line: 0,
            function: "",
            condition: None,
            name: "",
            stacktrace: StackTrace::empty(),
        }
    }

    /// Fill the generic fields. Must be called exactly once per context;
    /// this also captures the stack trace unless suppressed.
    pub(crate) fn populate(
        &mut self,
        file: &'static str,
        line: u32,
        function: &'static str,
        condition: Option<&'static str>,
        name: &'static str,
    ) {
        debug_assert!(
            self.file.is_empty() && self.name.is_empty(),
            "failure context populated twice"
        );
        self.file = file;
        self.line = line;
        self.function = function;
        self.condition = condition;
        self.name = name;
        if !config::stacktrace_suppressed() {
            self.stacktrace = StackTrace::capture();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populate_fills_fields() {
        let mut ctx = FailureContext::unset();
        ctx.populate("src/solver.rs", 42, "solver::step", Some("dt > 0.0"), "InvalidState");
        assert_eq!(ctx.file, "src/solver.rs");
        assert_eq!(ctx.line, 42);
        assert_eq!(ctx.function, "solver::step");
        assert_eq!(ctx.condition, Some("dt > 0.0"));
        assert_eq!(ctx.name, "InvalidState");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "populated twice")]
    fn repopulation_is_caught() {
        let mut ctx = FailureContext::unset();
        ctx.populate("a.rs", 1, "f", None, "X");
        ctx.populate("b.rs", 2, "g", None, "Y");
    }
}
