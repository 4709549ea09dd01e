//! Non-fatal diagnostics side channel.
//!
//! Rule builders never fail. When a value combination is not legal for a
//! property, the rule is still built (and flagged invalid) and a
//! [`Diagnostic`] is emitted through a [`Diagnostics`] sink.
//!
//! The sink is injected, so callers choose where reports go:
//!
//! - [`TracingDiagnostics`] forwards to `tracing` at WARN level (the default).
//! - [`MemoryDiagnostics`] collects reports for later inspection.
//!
//! # Example
//!
//! ```
//! use ussgen::diagnostics::{report, MemoryDiagnostics};
//!
//! let sink = MemoryDiagnostics::new();
//! report(&sink, Some("padding does not accept auto"));
//! assert_eq!(sink.messages(), vec!["padding does not accept auto"]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::panic::Location;

/// Message used when a report arrives without any text.
pub const MISSING_MESSAGE: &str = "diagnostic reported without a message";

/// A single report, tagged with the call site that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub location: &'static Location<'static>,
}

impl Diagnostic {
    /// Create a diagnostic located at the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}:{})",
            self.message,
            self.location.file(),
            self.location.line()
        )
    }
}

/// A sink for non-fatal reports.
///
/// Implementations must not panic and must not block; `emit` is
/// fire-and-forget.
pub trait Diagnostics {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Report a message through `sink`, capturing the caller's location.
///
/// A missing or empty message is itself reported as a violation, located at
/// the same call site.
#[track_caller]
pub fn report(sink: &dyn Diagnostics, message: Option<&str>) {
    match message {
        Some(text) if !text.is_empty() => sink.emit(Diagnostic::new(text)),
        _ => sink.emit(Diagnostic::new(MISSING_MESSAGE)),
    }
}

/// Forwards every diagnostic to `tracing` as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            file = diagnostic.location.file(),
            line = diagnostic.location.line(),
            "{}",
            diagnostic.message
        );
    }
}

/// Collects diagnostics in memory.
///
/// Single-threaded by construction (`RefCell`); intended for tests and for
/// callers that want to inspect problems after building a sheet.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    entries: RefCell<Vec<Diagnostic>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All collected diagnostics, oldest first.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    /// Just the message text of each collected diagnostic.
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }
}
