//! Validation diagnostics: severity levels and the per-run accumulator.
//!
//! Every check made while assembling a [`Spec`](crate::Spec) reports into a
//! [`Diagnostics`] value passed down by `&mut`. Nothing aborts on a finding;
//! artifact-producing steps ask [`Diagnostics::has_error`] before they run.

use std::fmt;

/// Severity of a recorded diagnostic, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Suspicious but harmless.
    Warning,
    /// The spec is inconsistent; no artifacts may be produced.
    Error,
}

impl Severity {
    /// Lower-case label used in log lines and summaries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How bad it is.
    pub severity: Severity,
    /// The entity or namespace the finding is about (e.g. `core:Widget`).
    pub source: String,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.source, self.message)
    }
}

/// Accumulates diagnostics and the worst severity seen during one run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
    worst: Option<Severity>,
}

impl Diagnostics {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets everything recorded so far.
    pub fn reset(&mut self) {
        self.records.clear();
        self.worst = None;
    }

    /// Records a diagnostic and logs it at the matching level.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => {
                tracing::error!(source = %diagnostic.source, "{}", diagnostic.message);
            }
            Severity::Warning => {
                tracing::warn!(source = %diagnostic.source, "{}", diagnostic.message);
            }
        }
        self.worst = self.worst.max(Some(diagnostic.severity));
        self.records.push(diagnostic);
    }

    /// Records an error.
    pub fn error(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic {
            severity: Severity::Error,
            source: source.into(),
            message: message.into(),
        });
    }

    /// Records a warning.
    pub fn warn(&mut self, source: impl Into<String>, message: impl Into<String>) {
        self.push(Diagnostic {
            severity: Severity::Warning,
            source: source.into(),
            message: message.into(),
        });
    }

    /// Worst severity recorded, if anything was recorded at all.
    #[must_use]
    pub fn worst(&self) -> Option<Severity> {
        self.worst
    }

    /// True once any error has been recorded.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.worst >= Some(Severity::Error)
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.records
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// All recorded diagnostics in the order they were found.
    #[must_use]
    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }
}
