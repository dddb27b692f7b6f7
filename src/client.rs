// ABOUTME: Client ties the pipeline together: resolve location, load, parse, extract.
// ABOUTME: Holds the shared reqwest client configured from Options.

use crate::error::Error;
use crate::extract::{self, Extraction};
use crate::options::{ClientBuilder, Options};
use crate::rules::RuleSet;
use crate::source::Source;

/// The extraction client.
///
/// One client owns one HTTP connection pool and can run any number of
/// extractions; each run is independent and owns its own accumulators.
pub struct Client {
    opts: Options,
    http: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http = opts.http_client.clone().unwrap_or_else(|| {
            let mut builder = reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .gzip(true)
                .brotli(true)
                .deflate(true);
            if !opts.timeout.is_zero() {
                builder = builder.timeout(opts.timeout);
            }
            builder.build().expect("failed to build HTTP client")
        });
        Self { opts, http }
    }

    /// The options this client was built with.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Run the whole pipeline for one location.
    ///
    /// Acquisition and document decoding failures halt the run with no
    /// partial output. Per-element rule failures never do; they come back
    /// aggregated inside the [`Extraction`] next to every line the other
    /// elements produced.
    pub async fn extract(
        &self,
        location: &str,
        selector: &str,
        rules: &RuleSet,
    ) -> Result<Extraction, Error> {
        let input = Source::resolve(location).load(&self.http).await?;
        let doc = input.into_document()?;
        Ok(extract::run(&doc, selector, rules))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn rules(values: &[&str], delimiter: &str) -> RuleSet {
        RuleSet::parse(values, delimiter).unwrap()
    }

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<a href="/one">Hello</a>
<a href="/two">World</a>
</body>
</html>"#;

    #[tokio::test]
    async fn extracts_from_fetched_page() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/page");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(PAGE);
        });

        let client = Client::builder().build();
        let extraction = client
            .extract(&server.url("/page"), "a", &rules(&["text", "href"], " "))
            .await
            .expect("extract should succeed");
        mock.assert();

        assert_eq!(extraction.lines, vec!["Hello /one", "World /two"]);
        assert!(extraction.error.is_none());
    }

    #[tokio::test]
    async fn extracts_from_local_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, PAGE).unwrap();

        let client = Client::builder().build();
        let extraction = client
            .extract(path.to_str().unwrap(), "a", &rules(&["href"], ","))
            .await
            .expect("extract should succeed");

        assert_eq!(extraction.lines, vec!["/one", "/two"]);
    }

    #[tokio::test]
    async fn missing_file_halts_with_io_error() {
        let client = Client::builder().build();
        let err = client
            .extract("no-such-page.html", "a", &rules(&["text"], ","))
            .await
            .unwrap_err();
        assert!(err.is_io());
    }

    #[tokio::test]
    async fn slow_response_hits_the_configured_deadline() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_millis(500))
                .body(PAGE);
        });

        let client = Client::builder()
            .timeout(Duration::from_millis(50))
            .build();
        let err = client
            .extract(&server.url("/slow"), "a", &rules(&["text"], ","))
            .await
            .unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn zero_timeout_leaves_transport_default() {
        let client = Client::builder().build();
        assert!(client.options().timeout.is_zero());
    }
}
