// src/fetch.rs

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (+compliance; data collection for personal use)";
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// What the transport hands to the record assembler: page text, or an
/// explicit failure signal. The core never sees transport errors directly.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Page(String),
    Failed,
}

#[derive(Debug)]
pub enum FetchError {
    Init(String),
    Network(String),
    Status(u16),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Init(msg) => write!(f, "Client init error: {msg}"),
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status: {code}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Blocking page fetcher. One attempt per URL; redirects are followed and any
/// failure (transport or non-2xx status) degrades to [`FetchOutcome::Failed`].
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Init(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> FetchOutcome {
        match self.try_fetch(url) {
            Ok(body) => FetchOutcome::Page(body),
            Err(e) => {
                eprintln!("⚠️ Fetch failed for {url}: {e}");
                FetchOutcome::Failed
            }
        }
    }

    fn try_fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.text().map_err(|e| FetchError::Network(e.to_string()))
    }
}

/// Derives the site identifier used for profile dispatch: the URL's host with
/// the scheme and any `www.` prefix stripped. Unparseable input falls back to
/// a best-effort manual strip so dispatch still gets something to match on.
pub fn source_id(url: &str) -> String {
    let host = match Url::parse(url) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
        Err(_) => {
            let stripped = url
                .trim_start_matches("https://")
                .trim_start_matches("http://");
            stripped.split('/').next().unwrap_or_default().to_string()
        }
    };

    host.strip_prefix("www.").unwrap_or(&host).to_string()
}
