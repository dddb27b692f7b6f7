// ABOUTME: Library entry point for sift, a CSS-selector value extraction tool.
// ABOUTME: Re-exports the public API: Client, RuleSet, ValueSpec, Source, errors.

//! sift — extract structured values from HTML documents.
//!
//! Given a CSS selector and an ordered list of value rules (`text`, `html`,
//! or an attribute name), sift emits one delimiter-joined line per matched
//! element. Individual rule failures never abort a run; they are aggregated
//! and reported alongside whatever was extracted.
//!
//! # Example
//!
//! ```no_run
//! use sift::{Client, RuleSet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sift::Error> {
//!     let rules = RuleSet::parse(&["text", "href"], " ")?;
//!     let client = Client::builder().build();
//!     let extraction = client.extract("https://example.com", "a", &rules).await?;
//!     for line in &extraction.lines {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod options;
pub mod rules;
pub mod source;
pub mod values;

pub use crate::client::Client;
pub use crate::error::{
    AggregatedError, ConfigError, ElementFailure, Error, SpecFailure, ValueError,
};
pub use crate::extract::Extraction;
pub use crate::options::{validate, ClientBuilder, Options};
pub use crate::rules::RuleSet;
pub use crate::source::{Input, Source};
pub use crate::values::{Element, ValueSpec};
