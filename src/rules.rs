// ABOUTME: RuleSet applies an ordered list of value specifiers to one element.
// ABOUTME: Joins results with a delimiter, short-circuits on html, records failures.

//! Ordered, delimiter-joined application of value specifiers.
//!
//! Key behaviors:
//! - Specs run in declared order; the delimiter sits between every adjacent
//!   pair, including pairs where one spec failed. A failed spec contributes
//!   an empty slot, so positions stay stable.
//! - A spec with the case-insensitive identity "html" returns its own result
//!   immediately, discarding anything accumulated before it, values and
//!   failures alike, and anything after it is never evaluated.
//! - Failures are recorded, never fatal: whatever partial output the other
//!   specs produced is preserved.

use crate::error::{ConfigError, SpecFailure};
use crate::values::{Element, ValueSpec};

/// An ordered, non-empty list of value specifiers plus the delimiter that
/// joins their per-element results.
#[derive(Debug, Clone)]
pub struct RuleSet {
    specs: Vec<ValueSpec>,
    delimiter: String,
}

impl RuleSet {
    /// Build a rule set. An empty spec list is a configuration error, caught
    /// here before any document is ever loaded.
    pub fn new(specs: Vec<ValueSpec>, delimiter: impl Into<String>) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::EmptyValues);
        }
        Ok(Self {
            specs,
            delimiter: delimiter.into(),
        })
    }

    /// Build a rule set from raw value strings, as given on the command line.
    pub fn parse<S: AsRef<str>>(values: &[S], delimiter: &str) -> Result<Self, ConfigError> {
        let specs = values.iter().map(|v| ValueSpec::from(v.as_ref())).collect();
        Self::new(specs, delimiter)
    }

    pub fn specs(&self) -> &[ValueSpec] {
        &self.specs
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Apply every spec to one element, joining results with the delimiter.
    ///
    /// Returns the (possibly partial) joined string together with any
    /// per-spec failures, each tagged with its position and identity.
    pub fn get<E: Element>(&self, element: &E) -> (String, Vec<SpecFailure>) {
        let mut parts = Vec::with_capacity(self.specs.len());
        let mut failures = Vec::new();
        for (index, spec) in self.specs.iter().enumerate() {
            let result = spec.get(element);
            if spec.short_circuits() {
                // html wins outright: whatever came before is discarded.
                return match result {
                    Ok(value) => (value, Vec::new()),
                    Err(source) => (
                        String::new(),
                        vec![SpecFailure {
                            index,
                            value: spec.name().to_string(),
                            source,
                        }],
                    ),
                };
            }
            match result {
                Ok(value) => parts.push(value),
                Err(source) => {
                    failures.push(SpecFailure {
                        index,
                        value: spec.name().to_string(),
                        source,
                    });
                    parts.push(String::new());
                }
            }
        }
        (parts.join(&self.delimiter), failures)
    }
}
