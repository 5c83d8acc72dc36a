//! Route diagnostics and their display.

use std::fmt;

use owo_colors::OwoColorize;

use crate::log;
use crate::utils::plural_s;

/// The rule a record violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// `name` is not a well-formed key.
    MalformedKey,
    /// `path` is not the projection of `name`.
    PathMismatch,
    /// A `self` component has children.
    SelfWithChildren,
    /// A `multi` component has no children.
    MultiWithoutChildren,
    /// `redirect` points at no path in the tree.
    DanglingRedirect,
    DuplicateKey,
    DuplicatePath,
    /// A child key does not extend its parent's key.
    ChildOutsideParent,
    /// `meta.dynamicPath` is not a legal `:module` variant of the route.
    InvalidDynamicPath,
    /// `meta.permissions` names a role outside the configured set.
    UnknownRole,
    /// A `<key>-parent` record exists but does not host `<key>`.
    ParentCollision,
}

impl Violation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MalformedKey => "malformed key",
            Self::PathMismatch => "path mismatch",
            Self::SelfWithChildren => "self with children",
            Self::MultiWithoutChildren => "multi without children",
            Self::DanglingRedirect => "dangling redirect",
            Self::DuplicateKey => "duplicate key",
            Self::DuplicatePath => "duplicate path",
            Self::ChildOutsideParent => "child outside parent",
            Self::InvalidDynamicPath => "invalid dynamic path",
            Self::UnknownRole => "unknown role",
            Self::ParentCollision => "parent collision",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RouteDiagnostic
// ============================================================================

/// A single rule violation, located by the offending key/path pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDiagnostic {
    /// `name` as written
    pub key: String,
    /// `path` as written
    pub path: String,
    pub violation: Violation,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl RouteDiagnostic {
    pub fn new(
        key: impl Into<String>,
        path: impl Into<String>,
        violation: Violation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            violation,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for RouteDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // key and path in cyan brackets, rule name dimmed
        writeln!(
            f,
            "{}{} {}{} {}",
            "[".dimmed(),
            self.key.cyan(),
            self.path.cyan(),
            "]".dimmed(),
            format!("({})", self.violation).dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// RouteDiagnostics
// ============================================================================

/// Everything validation found in one route table.
#[derive(Debug, Clone, Default)]
pub struct RouteDiagnostics {
    errors: Vec<RouteDiagnostic>,
    /// Suspicious but legal records: (key, message).
    warnings: Vec<(String, String)>,
}

impl RouteDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: RouteDiagnostic) {
        self.errors.push(diagnostic);
    }

    pub fn error(
        &mut self,
        key: impl Into<String>,
        path: impl Into<String>,
        violation: Violation,
        message: impl Into<String>,
    ) {
        self.push(RouteDiagnostic::new(key, path, violation, message));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.warnings.push((key.into(), message.into()));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        log!("warning"; "{} suspicious route{}:", self.warnings.len(), plural_s(self.warnings.len()));
        for (key, message) in &self.warnings {
            eprintln!("- {}: {}", key, message);
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[RouteDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(String, String)] {
        &self.warnings
    }

    /// Errors of one kind.
    pub fn of(&self, violation: Violation) -> impl Iterator<Item = &RouteDiagnostic> {
        self.errors.iter().filter(move |d| d.violation == violation)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for RouteDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "route table validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for RouteDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = RouteDiagnostic::new(
            "about",
            "/info",
            Violation::PathMismatch,
            "path does not match key",
        )
        .with_hint("expected `/about`");
        let display = diag.to_string();
        assert!(display.contains("about"));
        assert!(display.contains("/info"));
        assert!(display.contains("path mismatch"));
        assert!(display.contains("expected `/about`"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let mut diags = RouteDiagnostics::new();
        diags.warn("about", "singleLayout has no effect");
        assert!(diags.clone().into_result().is_ok());

        diags.error("x", "/x", Violation::DuplicateKey, "declared twice");
        diags.error("y", "/y", Violation::DuplicateKey, "declared twice");
        let err = diags.into_result().unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.warnings().len(), 1);
        assert!(err.to_string().contains("found"));
    }

    #[test]
    fn test_filter_by_violation() {
        let mut diags = RouteDiagnostics::new();
        diags.error("a", "/a", Violation::SelfWithChildren, "m");
        diags.error("b", "/b", Violation::DanglingRedirect, "m");
        assert_eq!(diags.of(Violation::SelfWithChildren).count(), 1);
    }
}
