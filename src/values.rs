// ABOUTME: Value specifiers (text / html / attribute) and the Element seam they run against.
// ABOUTME: Keyword dispatch is case-sensitive; the html short-circuit identity is not.

//! Per-element value extraction rules.
//!
//! Key behaviors:
//! - `"text"` and `"html"` are case-sensitive keywords; any other string is
//!   taken as an attribute name.
//! - An absent attribute yields an empty string, never an error. Missing
//!   attributes are a normal outcome when the same rule runs across
//!   heterogeneous elements.
//! - `short_circuits` tests the case-insensitive identity, so an attribute
//!   spec literally named `"HTML"` still wins outright in a rule set even
//!   though it dispatches as an attribute lookup.

use scraper::ElementRef;

use crate::error::ValueError;

/// The pipeline's view of one matched element.
///
/// `inner_html` keeps a failure channel even though the scraper backend never
/// fails: the rule set must tolerate serialization errors from any backend.
pub trait Element {
    fn text(&self) -> String;
    fn inner_html(&self) -> Result<String, ValueError>;
    fn attr(&self, name: &str) -> Option<String>;
}

impl Element for ElementRef<'_> {
    /// Concatenated text content of the element and its descendants,
    /// verbatim, with no whitespace normalization.
    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn inner_html(&self) -> Result<String, ValueError> {
        Ok(ElementRef::inner_html(self))
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }
}

/// A single extraction rule applied to one matched element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSpec {
    Text,
    Html,
    Attr(String),
}

impl From<&str> for ValueSpec {
    fn from(s: &str) -> Self {
        match s {
            "text" => ValueSpec::Text,
            "html" => ValueSpec::Html,
            other => ValueSpec::Attr(other.to_string()),
        }
    }
}

impl ValueSpec {
    /// The identity used in diagnostics and for the short-circuit test.
    pub fn name(&self) -> &str {
        match self {
            ValueSpec::Text => "text",
            ValueSpec::Html => "html",
            ValueSpec::Attr(name) => name,
        }
    }

    /// True when this spec supersedes the rest of its rule set. Inner HTML is
    /// not meaningfully concatenable with plain text fragments, so it wins
    /// outright instead of contributing one delimited slot.
    pub fn short_circuits(&self) -> bool {
        self.name().eq_ignore_ascii_case("html")
    }

    /// Apply this rule to one element.
    ///
    /// `Text` and `Attr` cannot fail; `Html` surfaces serialization failures
    /// from the backend.
    pub fn get<E: Element>(&self, element: &E) -> Result<String, ValueError> {
        match self {
            ValueSpec::Text => Ok(element.text()),
            ValueSpec::Html => element.inner_html(),
            ValueSpec::Attr(name) => Ok(element.attr(name).unwrap_or_default()),
        }
    }
}
