//! Catalog completeness checks.
//!
//! Every locale must translate every key of the default catalog. Keys missing
//! from a translation are errors; extra keys and placeholder drift are
//! warnings.

use crate::i18n::MessageCatalog;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the catalog unusable for publishing
    pub errors: Vec<String>,

    /// Non-critical findings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator comparing a translated catalog against the reference catalog.
pub struct CatalogValidator;

// Placeholder pattern, e.g. {year}
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Compare `candidate` with `reference` (normally the default locale).
    pub fn validate(reference: &MessageCatalog, candidate: &MessageCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference_keys: BTreeSet<&str> = reference.keys().collect();
        let candidate_keys: BTreeSet<&str> = candidate.keys().collect();

        for key in reference_keys.difference(&candidate_keys) {
            report.errors.push(format!(
                "'{}' catalog is missing key '{}'",
                candidate.locale(),
                key
            ));
        }

        for key in candidate_keys.difference(&reference_keys) {
            report.warnings.push(format!(
                "'{}' catalog has key '{}' not present in '{}'",
                candidate.locale(),
                key,
                reference.locale()
            ));
        }

        for key in reference_keys.intersection(&candidate_keys) {
            let expected = Self::extract_placeholders(reference.get(key).unwrap_or_default());
            let actual = Self::extract_placeholders(candidate.get(key).unwrap_or_default());
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch for '{}': '{}' has {:?}, '{}' has {:?}",
                    key,
                    reference.locale(),
                    expected,
                    candidate.locale(),
                    actual
                ));
            }
        }

        report
    }

    /// Extract the set of `{name}` placeholders from a message
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").expect("valid placeholder regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
