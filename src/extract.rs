// ABOUTME: Extraction driver: runs a CSS selector over a document and applies a rule set.
// ABOUTME: Per-element failures are aggregated; iteration never stops early.

//! The extraction driver.
//!
//! Key behaviors:
//! - Zero matches is a successful, empty run, not a failure.
//! - A selector that fails to compile matches nothing. Selector syntax is the
//!   caller's business and is never validated here.
//! - Empty joined strings are dropped from the output so no blank lines are
//!   ever emitted. This conflates "nothing matched the rules" with "every
//!   rule came back empty"; the quirk is kept deliberately.
//! - Rule failures are wrapped with the 0-based match index and collected;
//!   the remaining elements are always still processed.

use scraper::{Html, Selector};

use crate::error::{AggregatedError, ElementFailure};
use crate::rules::RuleSet;
use crate::values::Element;

/// The outcome of one extraction run: output lines in match order, plus an
/// aggregated error when any element had specifier failures.
///
/// `lines` and `error` are independent; a run with failures still carries
/// every line the other elements produced.
#[derive(Debug, Default)]
pub struct Extraction {
    pub lines: Vec<String>,
    pub error: Option<AggregatedError>,
}

/// Apply `rules` to every element of `doc` matching `selector`, in document
/// order.
pub fn run(doc: &Html, selector: &str, rules: &RuleSet) -> Extraction {
    let Ok(compiled) = Selector::parse(selector) else {
        return Extraction::default();
    };
    collect(doc.select(&compiled), rules)
}

fn collect<E: Element>(elements: impl IntoIterator<Item = E>, rules: &RuleSet) -> Extraction {
    let mut lines = Vec::new();
    let mut failures = Vec::new();
    for (index, element) in elements.into_iter().enumerate() {
        let (value, spec_failures) = rules.get(&element);
        if !spec_failures.is_empty() {
            failures.push(ElementFailure {
                element: index,
                failures: spec_failures,
            });
        }
        if !value.is_empty() {
            lines.push(value);
        }
    }
    let error = if failures.is_empty() {
        None
    } else {
        Some(AggregatedError { failures })
    };
    Extraction { lines, error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;
    use pretty_assertions::assert_eq;

    fn rules(values: &[&str], delimiter: &str) -> RuleSet {
        RuleSet::parse(values, delimiter).unwrap()
    }

    const SAMPLE_HTML: &str = r#"
        <html>
        <body>
            <a href="/one">Hello</a>
            <a href="/two">World</a>
            <div class="x">Hi</div>
            <div>plain</div>
        </body>
        </html>
    "#;

    #[test]
    fn extracts_text_per_match_in_document_order() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let extraction = run(&doc, "a", &rules(&["text"], ","));
        assert_eq!(extraction.lines, vec!["Hello", "World"]);
        assert!(extraction.error.is_none());
    }

    #[test]
    fn joins_multiple_values_with_delimiter() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let extraction = run(&doc, "div.x", &rules(&["text", "class"], "|"));
        assert_eq!(extraction.lines, vec!["Hi|x"]);
        assert!(extraction.error.is_none());
    }

    #[test]
    fn no_matches_is_an_empty_success() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let extraction = run(&doc, "article", &rules(&["text"], ","));
        assert!(extraction.lines.is_empty());
        assert!(extraction.error.is_none());
    }

    #[test]
    fn invalid_selector_matches_nothing() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let extraction = run(&doc, "[[[nonsense", &rules(&["text"], ","));
        assert!(extraction.lines.is_empty());
        assert!(extraction.error.is_none());
    }

    #[test]
    fn empty_values_are_dropped_from_output() {
        // Only one of the two divs has a class; the other joins to the empty
        // string and is silently dropped, with no error recorded.
        let doc = Html::parse_document(SAMPLE_HTML);
        let extraction = run(&doc, "div", &rules(&["class"], ","));
        assert_eq!(extraction.lines, vec!["x"]);
        assert!(extraction.error.is_none());
    }

    #[test]
    fn absent_attribute_everywhere_yields_no_lines_and_no_error() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let extraction = run(&doc, "a", &rules(&["data-missing"], ","));
        assert!(extraction.lines.is_empty());
        assert!(extraction.error.is_none());
    }

    /// Element whose subtree serialization can be made to fail.
    struct Stub {
        html: Option<&'static str>,
    }

    impl Element for Stub {
        fn text(&self) -> String {
            String::new()
        }

        fn inner_html(&self) -> Result<String, ValueError> {
            match self.html {
                Some(html) => Ok(html.to_string()),
                None => Err(ValueError::Serialize(anyhow::anyhow!("malformed subtree"))),
            }
        }

        fn attr(&self, _name: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn one_failing_element_does_not_halt_the_others() {
        let elements = vec![
            Stub { html: Some("zero") },
            Stub { html: Some("one") },
            Stub { html: None },
            Stub { html: Some("three") },
        ];

        let extraction = collect(elements, &rules(&["html"], ","));

        assert_eq!(extraction.lines, vec!["zero", "one", "three"]);
        let error = extraction.error.expect("failures should be aggregated");
        assert_eq!(error.failures.len(), 1);
        assert_eq!(error.failures[0].element, 2);
        assert!(error.to_string().contains("element 2"));
        assert!(error.to_string().contains("malformed subtree"));
    }
}
