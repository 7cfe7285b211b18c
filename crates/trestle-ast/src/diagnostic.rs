//! Definition of diagnostics reported while translating documents.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// A line and column position within a source file.
///
/// Both coordinates are 1-based, matching what source-language frontends
/// report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// The 1-based line number.
    pub line: usize,
    /// The 1-based column number.
    pub column: usize,
}

impl Position {
    /// Creates a new position from a line and a column.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{line}:{column}", line = self.line, column = self.column)
    }
}

/// A range of source positions attached to an AST node.
///
/// Ranges are produced by the frontend and are carried through every pass
/// unchanged so that diagnostics emitted late in the pipeline still point at
/// the original source.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    /// The inclusive start of the range.
    pub start: Position,
    /// The inclusive end of the range.
    pub end: Position,
}

impl SourceRange {
    /// Creates a new range from start and end positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a range spanning the given lines and columns.
    pub const fn from_coordinates(
        line_start: usize,
        column_start: usize,
        line_end: usize,
        column_end: usize,
    ) -> Self {
        Self {
            start: Position::new(line_start, column_start),
            end: Position::new(line_end, column_end),
        }
    }

    /// Determines if this range fully contains another range.
    pub fn contains(&self, other: &SourceRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{start}-{end}", start = self.start, end = self.end)
    }
}

/// Represents the severity of a diagnostic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub enum Severity {
    /// The diagnostic is displayed as an error.
    Error,
    /// The diagnostic is displayed as a warning.
    Warning,
    /// The diagnostic is displayed as a note.
    Note,
}

impl Severity {
    /// Returns `true` if the severity is [`Error`].
    ///
    /// [`Error`]: Severity::Error
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Returns `true` if the severity is [`Warning`].
    ///
    /// [`Warning`]: Severity::Warning
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Note => write!(f, "note"),
        }
    }
}

/// Represents a diagnostic emitted during translation.
///
/// Presentation is not this crate's concern; a diagnostic is a plain record
/// of what was observed and where.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Diagnostic {
    /// The identifier of the pass that emitted the diagnostic.
    pass: Option<String>,
    /// The severity of the diagnostic.
    severity: Severity,
    /// The diagnostic message.
    message: String,
    /// The source range the diagnostic points at.
    range: Option<SourceRange>,
    /// Additional detail, e.g. the offending syntax rendered as a tree.
    detail: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic error with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            pass: None,
            severity: Severity::Error,
            message: message.into(),
            range: None,
            detail: None,
        }
    }

    /// Creates a new diagnostic warning with the given message.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            pass: None,
            severity: Severity::Warning,
            message: message.into(),
            range: None,
            detail: None,
        }
    }

    /// Creates a new diagnostic note with the given message.
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            pass: None,
            severity: Severity::Note,
            message: message.into(),
            range: None,
            detail: None,
        }
    }

    /// Sets the identifier of the emitting pass.
    pub fn with_pass(mut self, pass: impl Into<String>) -> Self {
        self.pass = Some(pass.into());
        self
    }

    /// Sets the source range for the diagnostic.
    pub fn with_range(mut self, range: impl Into<Option<SourceRange>>) -> Self {
        self.range = range.into();
        self
    }

    /// Sets the detail text for the diagnostic.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Gets the identifier of the pass that emitted the diagnostic.
    pub fn pass(&self) -> Option<&str> {
        self.pass.as_deref()
    }

    /// Gets the severity of the diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Gets the message of the diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the source range of the diagnostic.
    pub fn range(&self) -> Option<SourceRange> {
        self.range
    }

    /// Gets the detail text of the diagnostic.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{severity}: {message}",
            severity = self.severity,
            message = self.message
        )?;

        if let Some(range) = &self.range {
            write!(f, " ({range})")?;
        }

        Ok(())
    }
}

/// A collector of diagnostics, in emission order.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    /// The collected diagnostics.
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates a new, empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic to the collector.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Moves every diagnostic from another collector into this one.
    pub fn append(&mut self, other: &mut Diagnostics) {
        self.diagnostics.append(&mut other.diagnostics);
    }

    /// Gets the number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Determines if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Counts the diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    /// Iterates over the collected diagnostics in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Consumes the collector, returning the diagnostics in emission order.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl IntoIterator for Diagnostics {
    type IntoIter = std::vec::IntoIter<Diagnostic>;
    type Item = Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn diagnostic_display() {
        let diagnostic = Diagnostic::warning("native array may not translate")
            .with_pass("NativeDataStructureWarnings")
            .with_range(SourceRange::from_coordinates(3, 5, 3, 12));
        assert_eq!(
            diagnostic.to_string(),
            "warning: native array may not translate (3:5-3:12)"
        );
        assert_eq!(diagnostic.pass(), Some("NativeDataStructureWarnings"));
    }

    #[test]
    fn range_containment() {
        let outer = SourceRange::from_coordinates(1, 1, 10, 1);
        let inner = SourceRange::from_coordinates(2, 3, 4, 9);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn severity_counts() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add(Diagnostic::error("bad"));
        diagnostics.add(Diagnostic::warning("iffy"));
        diagnostics.add(Diagnostic::warning("also iffy"));
        assert_eq!(diagnostics.count(Severity::Error), 1);
        assert_eq!(diagnostics.count(Severity::Warning), 2);
        assert_eq!(diagnostics.count(Severity::Note), 0);
        assert_eq!(diagnostics.len(), 3);
    }
}
