// ABOUTME: Input source resolution: stdin, local file, or HTTP GET by location shape.
// ABOUTME: Acquired bytes are decoded (charset-aware for network bodies) and parsed.

//! Input acquisition.
//!
//! Key behaviors:
//! - An empty location means stdin; a location starting with "http" is
//!   fetched over the network; anything else is opened as a local file. The
//!   prefix test is deliberately naive, so a file named "httpx-notes.txt"
//!   resolves as a URL. Kept as-is from the original tool.
//! - HTTP status codes are not checked; any reachable response body is handed
//!   to the parser, which copes with non-HTML content on its own.
//! - Network bodies are decoded using the Content-Type charset when present,
//!   falling back to detection. Local input must already be UTF-8.

use std::io::Read;
use std::path::PathBuf;

use bytes::Bytes;
use scraper::Html;

use crate::error::Error;

/// Where a location string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
    Http(String),
}

impl Source {
    /// Classify a location string. Never fails; bad paths and unreachable
    /// URLs only surface on load.
    pub fn resolve(location: &str) -> Self {
        if location.is_empty() {
            Source::Stdin
        } else if location.starts_with("http") {
            Source::Http(location.to_string())
        } else {
            Source::File(PathBuf::from(location))
        }
    }

    /// Acquire the raw bytes for this source.
    ///
    /// The HTTP path goes through `http`; any acquisition deadline is part of
    /// that client's configuration. File and stdin reads have no deadline,
    /// local I/O is assumed fast.
    pub async fn load(&self, http: &reqwest::Client) -> Result<Input, Error> {
        match self {
            Source::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|source| Error::Io {
                        location: "<stdin>".to_string(),
                        source,
                    })?;
                Ok(Input::local("<stdin>", buf.into()))
            }
            Source::File(path) => {
                let bytes = std::fs::read(path).map_err(|source| Error::Io {
                    location: path.display().to_string(),
                    source,
                })?;
                Ok(Input::local(path.display().to_string(), bytes.into()))
            }
            Source::Http(url) => {
                let response = http.get(url).send().await.map_err(|source| Error::Network {
                    url: url.clone(),
                    source,
                })?;
                let content_type = response
                    .headers()
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .map(|s| s.to_lowercase());
                let body = response.bytes().await.map_err(|source| Error::Network {
                    url: url.clone(),
                    source,
                })?;
                Ok(Input {
                    label: url.clone(),
                    bytes: body,
                    content_type,
                    from_network: true,
                })
            }
        }
    }
}

/// An acquired input body, ready to decode and parse. Owning the bytes here
/// means the underlying stream is already released on every exit path.
#[derive(Debug)]
pub struct Input {
    label: String,
    bytes: Bytes,
    content_type: Option<String>,
    from_network: bool,
}

impl Input {
    fn local(label: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            label: label.into(),
            bytes,
            content_type: None,
            from_network: false,
        }
    }

    /// Decode the body and parse it into a queryable document.
    ///
    /// scraper's HTML parser is lenient and accepts any string, so the only
    /// full-stop parse failure left is local input that is not valid UTF-8.
    pub fn into_document(self) -> Result<Html, Error> {
        let text = if self.from_network {
            decode_network(&self.bytes, self.content_type.as_deref())
        } else {
            std::str::from_utf8(&self.bytes)
                .map_err(|source| Error::Decode {
                    location: self.label.clone(),
                    source,
                })?
                .to_string()
        };
        Ok(Html::parse_document(&text))
    }
}

/// Decode network body bytes using the Content-Type charset when declared,
/// falling back to detection for unlabeled bodies.
fn decode_network(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract the charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    for part in content_type.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}
