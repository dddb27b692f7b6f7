// ABOUTME: Error types for sift: fatal run errors plus per-element extraction failures.
// ABOUTME: Fatal errors halt a run; extraction failures are aggregated and never do.

use std::fmt;

/// A configuration problem detected before any I/O happens.
///
/// All configuration errors for a run are collected and reported together,
/// in a fixed order, rather than stopping at the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("timeout must not be negative")]
    NegativeTimeout,
    #[error("at least one value is required: text, html, or an attribute name")]
    EmptyValues,
}

/// The fatal error type for a run.
///
/// Any of these halts the run with no partial output. Per-element extraction
/// failures are deliberately not represented here; see [`AggregatedError`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Local file or stdin could not be read.
    #[error("reading {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP acquisition failed: connection, timeout, or transport error.
    #[error("fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Local input could not be decoded as a document.
    #[error("decoding {location}: input is not valid UTF-8")]
    Decode {
        location: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl Error {
    /// Returns true if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns true if this is a local read error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    /// Returns true if this is a network acquisition error.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. })
    }

    /// Returns true if this is an input decoding error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }
}

/// Failure of a single value specifier applied to one element.
///
/// Attribute absence is not an error; the only failure an element backend can
/// report is a subtree that will not serialize.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("serializing inner html: {0}")]
    Serialize(anyhow::Error),
}

/// One specifier's failure, tagged with its position and identity in the
/// rule set it belongs to.
#[derive(Debug)]
pub struct SpecFailure {
    pub index: usize,
    pub value: String,
    pub source: ValueError,
}

impl fmt::Display for SpecFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}, value {}: {}", self.index, self.value, self.source)
    }
}

/// Every specifier failure for one matched element, tagged with the 0-based
/// match index.
#[derive(Debug)]
pub struct ElementFailure {
    pub element: usize,
    pub failures: Vec<SpecFailure>,
}

/// The combined diagnostic for a run where some elements had specifier
/// failures. No individual failure is discarded; each renders on its own
/// line. The run that produced this still counts as successful.
#[derive(Debug, thiserror::Error)]
pub struct AggregatedError {
    pub failures: Vec<ElementFailure>,
}

impl fmt::Display for AggregatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error while getting values")?;
        for element_failure in &self.failures {
            for spec_failure in &element_failure.failures {
                write!(f, "\n  element {}: {}", element_failure.element, spec_failure)?;
            }
        }
        Ok(())
    }
}
