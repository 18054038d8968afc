//! Diagnostics - configuration mismatches found during reflection.
//!
//! A mismatch (for example a `Validate` method whose parameters name no
//! property) skips the affected facet and is reported here and through
//! `tracing`; it never fails reflection.

use std::sync::Arc;

use crate::base::Identifier;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic. Failures are not diagnostics; they
/// abort reflection as a [`ReflectError`](crate::error::ReflectError).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Warning,
}

/// A diagnostic attached to the feature it concerns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReflectDiagnostic {
    pub severity: Severity,
    /// Warning code (e.g., "W0001").
    pub code: Option<Arc<str>>,
    /// The type, member or parameter concerned.
    pub identifier: Identifier,
    pub message: Arc<str>,
}

impl ReflectDiagnostic {
    pub fn warning(identifier: Identifier, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            code: None,
            identifier,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_deref() == Some(code)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Codes for configuration mismatches.
pub mod codes {
    /// `Optionally` on a primitive or enum parameter or property.
    pub const OPTIONAL_ON_PRIMITIVE: &str = "W0001";
    /// `Validate` method parameter names no property.
    pub const VALIDATE_PARAMETER_MISMATCH: &str = "W0002";
    /// `RegEx` on a non-string feature.
    pub const REGEX_ON_NON_STRING: &str = "W0003";
    /// `MultiLine` on a non-string feature.
    pub const MULTILINE_ON_NON_STRING: &str = "W0004";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Accumulates diagnostics across one reflection run.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<ReflectDiagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: ReflectDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record a configuration mismatch and log it.
    pub fn warn(&mut self, identifier: &Identifier, code: &str, message: impl Into<Arc<str>>) {
        let diagnostic = ReflectDiagnostic::warning(identifier.clone(), message).with_code(code);
        tracing::warn!(code, feature = %identifier, "{}", diagnostic.message);
        self.add(diagnostic);
    }

    pub fn diagnostics(&self) -> &[ReflectDiagnostic] {
        &self.diagnostics
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics in a stable order (by feature, then code),
    /// leaving the collector empty.
    pub fn take_sorted(&mut self) -> Vec<ReflectDiagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        diagnostics.sort_by(|a, b| {
            a.identifier
                .cmp(&b.identifier)
                .then_with(|| a.code.cmp(&b.code))
                .then_with(|| a.message.cmp(&b.message))
        });
        diagnostics.dedup();
        diagnostics
    }
}
