//! The failure value and the rendering contract its kinds implement.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::fmt::Write as _;
use std::sync::OnceLock;

use crate::config;
use crate::context::FailureContext;

const BANNER: &str = "--------------------------------------------------------";

/// The rendering contract every failure kind implements.
///
/// A kind is a small value that captures the contextual arguments of one
/// category of failure (two mismatched sizes, an out-of-range index, a
/// raw OS error code) and knows how to describe them. Kinds are declared
/// with [`decl_kind!`](crate::decl_kind); implement this trait by hand
/// only when the description needs logic the declaration shapes cannot
/// express.
///
/// Rendering is self-contained: a kind needs no state besides its own
/// captured arguments.
pub trait Kind: fmt::Debug + Send + Sync + 'static {
    /// Append the kind-specific description to `out`.
    ///
    /// The default renders nothing, which is what the zero-argument
    /// kinds want: their identity is the whole message.
    fn print_info(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        let _ = out;
        Ok(())
    }

    /// Hook for recovering the concrete kind type from a caught failure.
    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;
}

/// Bound bundle for values captured by generically-typed kinds.
///
/// One declaration such as an index-range kind can then serve every
/// index width without duplicating its message logic.
pub trait KindArg: fmt::Display + fmt::Debug + Clone + Send + Sync + 'static {}

impl<T: fmt::Display + fmt::Debug + Clone + Send + Sync + 'static> KindArg for T {}

/// A single failed check: location, violated condition, kind, and a
/// lazily-rendered report.
///
/// Produced by the checking macros; on the throw path it arrives at the
/// caller as the `Err` variant. The full report is computed on first
/// access to [`message`](Failure::message) (or `Display`) and cached,
/// since symbolizing the stack trace is too expensive to repeat.
pub struct Failure {
    context: FailureContext,
    kind: Box<dyn Kind>,
    rendered: OnceLock<String>,
}

impl Failure {
    /// Build a fully-populated failure. Called by the issue machinery
    /// once the guarding condition has already failed.
    pub(crate) fn assemble<K: Kind>(
        file: &'static str,
        line: u32,
        function: &'static str,
        condition: Option<&'static str>,
        name: &'static str,
        kind: K,
    ) -> Self {
        let mut context = FailureContext::unset();
        context.populate(file, line, function, condition, name);
        Self {
            context,
            kind: Box::new(kind),
            rendered: OnceLock::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────

    /// Source file of the failed check.
    #[inline]
    pub fn file(&self) -> &'static str {
        self.context.file
    }

    /// Source line of the failed check.
    #[inline]
    pub fn line(&self) -> u32 {
        self.context.line
    }

    /// Path of the function containing the failed check.
    #[inline]
    pub fn function(&self) -> &'static str {
        self.context.function
    }

    /// Literal source text of the violated condition, if the failing
    /// operation had one (the marker operations do not).
    #[inline]
    pub fn condition(&self) -> Option<&'static str> {
        self.context.condition
    }

    /// Name and call sequence of the kind, as written at the call site.
    /// Available without rendering the report.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.context.name
    }

    /// The full multi-section report. Rendered once, then cached.
    pub fn message(&self) -> &str {
        self.rendered.get_or_init(|| self.render())
    }

    /// Whether the carried kind is exactly `K`.
    pub fn kind_is<K: Kind>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// The carried kind, if it is exactly `K`.
    pub fn kind_as<K: Kind>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    // ── Rendering ─────────────────────────────────────────────────

    fn render(&self) -> String {
        let c = &self.context;
        let mut out = String::new();
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(
            out,
            "A failure occurred in line <{}> of file <{}> in function",
            c.line, c.file
        );
        let _ = writeln!(out, "    {}", c.function);
        if let Some(cond) = c.condition {
            let _ = writeln!(out, "The violated condition was:");
            let _ = writeln!(out, "    {cond}");
        }
        let _ = writeln!(out, "The name and call sequence of the failure was:");
        let _ = writeln!(out, "    {}", c.name);

        let mut info = String::new();
        let _ = self.kind.print_info(&mut info);
        if !info.is_empty() {
            let _ = writeln!(out, "Additional information:");
            for line in info.lines() {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    let _ = writeln!(out, "    {line}");
                }
            }
        }

        if !c.stacktrace.is_empty() && !config::stacktrace_suppressed() {
            let _ = writeln!(out, "Stacktrace:");
            let _ = writeln!(out, "-----------");
            c.stacktrace.render(&mut out);
        }

        if let Some(extra) = config::additional_output() {
            let _ = writeln!(out, "{extra}");
        }

        let _ = writeln!(out, "{BANNER}");
        out
    }
}

// ── std traits ────────────────────────────────────────────────────

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("name", &self.context.name)
            .field(
                "location",
                &format_args!("{}:{}", self.context.file, self.context.line),
            )
            .field("condition", &self.context.condition)
            .field("kind", &self.kind)
            .finish()
    }
}

impl Error for Failure {}
