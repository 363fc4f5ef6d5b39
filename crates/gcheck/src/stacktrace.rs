//! Best-effort call-stack capture.
//!
//! Capture happens at failure time; symbolization is deferred until the
//! report is actually rendered, since resolving symbols is expensive and
//! only needed when somebody reads the message. Platforms (or builds)
//! without support fall back to an empty capture that renders nothing.

/// Upper bound on rendered stack frames. Failures deep inside iterative
/// solvers can sit under hundreds of frames; past this point the trace
/// stops adding information.
#[cfg(feature = "backtrace")]
const MAX_FRAMES: usize = 25;

cfg_if::cfg_if! {
    if #[cfg(feature = "backtrace")] {
        use std::backtrace::{Backtrace, BacktraceStatus};
        use std::sync::Arc;

        /// A captured, not-yet-symbolized call stack.
        #[derive(Debug, Clone)]
        pub(crate) struct StackTrace {
            frames: Option<Arc<Backtrace>>,
        }

        impl StackTrace {
            pub(crate) const fn empty() -> Self {
                Self { frames: None }
            }

            /// Capture the current call stack. Returns an empty trace on
            /// platforms where capture is unsupported.
            pub(crate) fn capture() -> Self {
                let bt = Backtrace::force_capture();
                match bt.status() {
                    BacktraceStatus::Captured => Self { frames: Some(Arc::new(bt)) },
                    _ => Self::empty(),
                }
            }

            #[inline]
            pub(crate) fn is_empty(&self) -> bool {
                self.frames.is_none()
            }

            /// Symbolize and append the frames, at most [`MAX_FRAMES`] of them.
            pub(crate) fn render(&self, out: &mut String) {
                let Some(bt) = &self.frames else { return };
                let text = bt.to_string();
                let mut frames_seen = 0;
                for line in text.lines() {
                    if is_frame_header(line) {
                        frames_seen += 1;
                        if frames_seen > MAX_FRAMES {
                            out.push_str("<remaining frames omitted>\n");
                            break;
                        }
                    }
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }

        // A frame header line looks like "  4: path::to::function"; the
        // "             at file:line" continuation lines do not count.
        fn is_frame_header(line: &str) -> bool {
            let t = line.trim_start();
            let Some(colon) = t.find(':') else { return false };
            !t[..colon].is_empty() && t[..colon].bytes().all(|b| b.is_ascii_digit())
        }
    } else {
        /// No-op stand-in when backtrace capture is compiled out.
        #[derive(Debug, Clone)]
        pub(crate) struct StackTrace;

        impl StackTrace {
            pub(crate) const fn empty() -> Self {
                Self
            }

            pub(crate) fn capture() -> Self {
                Self
            }

            #[inline]
            pub(crate) fn is_empty(&self) -> bool {
                true
            }

            pub(crate) fn render(&self, _out: &mut String) {}
        }
    }
}
