//! Injectable diagnostics for non-fatal conditions.
//!
//! Nothing in this crate fails on bad theme data or odd widget input; it
//! degrades to a plausible default instead. When that happens a
//! [`Diagnostic`] is handed to whatever [`DiagnosticSink`] the caller
//! injected. The default sink is [`NoopSink`]; [`LogSink`] forwards to the
//! [`log`] facade so the application decides where the output goes.

use std::fmt;

/// A non-fatal condition noticed while resolving or rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A type tag with no fragment registered for the component kind.
    UnknownType { kind: String, tag: String },
    /// A fragment key that is neither a slot nor a semantic attribute.
    IgnoredKey {
        kind: String,
        tag: String,
        key: String,
    },
    /// A letter-spacing override that is not a number.
    InvalidSpacing { value: serde_json::Value },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownType { kind, tag } => {
                write!(f, "no type '{}' registered for '{}'", tag, kind)
            }
            Diagnostic::IgnoredKey { kind, tag, key } => write!(
                f,
                "type '{}' of '{}' sets unknown key '{}', ignored",
                tag, kind, key
            ),
            Diagnostic::InvalidSpacing { value } => {
                write!(f, "letter spacing {} is not a number, ignored", value)
            }
        }
    }
}

/// Receives diagnostics from the resolver and the renderer.
pub trait DiagnosticSink: Send + Sync {
    /// Reports one diagnostic. Must not panic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Discards everything. Used unless a sink is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Forwards diagnostics to the `log` facade under the `themed_text` target.
///
/// Unknown types are common (a theme may simply not define a tag) and are
/// logged at debug level; everything else is a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnknownType { .. } => {
                log::debug!(target: "themed_text", "{}", diagnostic)
            }
            _ => log::warn!(target: "themed_text", "{}", diagnostic),
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic)
    }
}
