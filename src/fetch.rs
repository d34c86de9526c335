//! Page retrieval.
//!
//! The crawler only sees the [`Fetcher`] trait. [`HttpFetcher`] is the
//! network implementation; any `Fn(&Url, &FetchSettings) -> Result<String>`
//! closure is a fetcher too, which is how tests and offline callers supply
//! pages.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::redirect::Policy;
use url::Url;

use crate::encoding::decode_body;
use crate::error::{Error, Result};
use crate::options::Options;

/// Redirect hops followed before a request fails.
const MAX_REDIRECTS: usize = 10;

/// Per-request parameters handed to a [`Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Timeout covering connect, redirects and body.
    pub timeout: Duration,
}

impl FetchSettings {
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            user_agent: options.user_agent.clone(),
            timeout: options.timeout,
        }
    }
}

/// Page fetcher collaborator.
///
/// Ordinary network trouble is reported as [`Error::FetchFailure`], never a
/// panic; the crawler turns it into "skip this page".
pub trait Fetcher {
    /// Retrieve the markup at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FetchFailure`] on transport errors, timeouts,
    /// non-success statuses and empty bodies.
    fn fetch(&self, url: &Url, settings: &FetchSettings) -> Result<String>;
}

impl<F> Fetcher for F
where
    F: Fn(&Url, &FetchSettings) -> Result<String>,
{
    fn fetch(&self, url: &Url, settings: &FetchSettings) -> Result<String> {
        self(url, settings)
    }
}

/// Blocking HTTP fetcher backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher that follows up to ten redirects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] when the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url, settings: &FetchSettings) -> Result<String> {
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, settings.user_agent.as_str())
            .timeout(settings.timeout)
            .send()
            .map_err(|e| Error::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(url, format!("HTTP {status}")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(|e| Error::fetch(url, e))?;

        let html = decode_body(&body, content_type.as_deref());
        if html.trim().is_empty() {
            return Err(Error::fetch(url, "empty body"));
        }

        tracing::debug!(url = %url, bytes = body.len(), "fetched page");
        Ok(html)
    }
}
