use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::fs;
use std::io::ErrorKind;

use super::{FetchResponse, StateFetcher, ViewerError};

/// Fetches the state document over HTTP with caching disabled
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl StateFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, ViewerError> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .map_err(|e| ViewerError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ViewerError::Transport(e.to_string()))?;

        Ok(FetchResponse { status, body })
    }
}

/// Reads the state document from a local path.
///
/// Query strings are ignored and a missing file is reported as `404`, so a
/// local wall behaves like one served over HTTP.
pub struct FileFetcher;

impl StateFetcher for FileFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, ViewerError> {
        let path = url.split('?').next().unwrap_or(url);
        let path = path.strip_prefix("file://").unwrap_or(path);

        match fs::read_to_string(path) {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FetchResponse {
                status: 404,
                body: String::new(),
            }),
            Err(e) => Err(ViewerError::Transport(format!("{}: {}", path, e))),
        }
    }
}

/// Pick a fetcher for a state URL
pub fn fetcher_for(state_url: &str) -> Box<dyn StateFetcher> {
    if state_url.starts_with("http://") || state_url.starts_with("https://") {
        Box::new(HttpFetcher::new())
    } else {
        Box::new(FileFetcher)
    }
}
