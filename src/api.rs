// API client module: a small blocking HTTP client that posts form bodies to
// the reducer service and hands back the raw reply. It never interprets the
// status code; the caller prints whatever comes back.

use anyhow::{Context, Result};
use hyper::ext::ReasonPhrase;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;

use crate::config::Config;
use crate::form;

/// Blocking client bound to one reducer service for the whole run.
pub struct UploadClient {
    client: Client,
    base_url: String,
}

/// What the service answered for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    pub status: u16,
    pub reason: String,
    pub body: Vec<u8>,
}

impl UploadResponse {
    /// `"<status> <reason>"`, e.g. `200 OK`.
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status, self.reason)
    }
}

impl UploadClient {
    /// Build a client for the service named by `config`.
    ///
    /// Each request runs on a fresh connection that is dropped once the
    /// response has been read. There is no timeout and redirects are
    /// returned to the caller rather than followed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<std::time::Duration>)
            .pool_max_idle_per_host(0)
            .redirect(Policy::none())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(UploadClient {
            client,
            base_url: config.base_url(),
        })
    }

    /// POST an already-encoded form body to `path` and read the full reply.
    pub fn post_form(&self, path: &str, body: String) -> Result<UploadResponse> {
        let url = format!("{}{}", &self.base_url, path);
        log::debug!("POST {} ({} bytes)", url, body.len());

        let res = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, form::CONTENT_TYPE)
            .body(body)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = res.status();
        // hyper only records the phrase when it differs from the canonical one.
        let reason = match res.extensions().get::<ReasonPhrase>() {
            Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
            None => status.canonical_reason().unwrap_or("").to_string(),
        };
        let body = res
            .bytes()
            .with_context(|| format!("Failed to read response body from {}", url))?;

        Ok(UploadResponse {
            status: status.as_u16(),
            reason,
            body: body.to_vec(),
        })
    }
}
