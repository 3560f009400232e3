//! Blocking HTTP client used by the nodes.
//!
//! Nodes run synchronously inside the host's executor, so requests block the
//! calling thread. There are no retries; a timeout applies only when one is
//! configured.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::{NodeError, Result};

/// HTTP client for JSON fetches and file downloads
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
}

impl FetchClient {
    /// Create a client from configuration
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// Transport failures and non-success statuses map to
    /// [`NodeError::Fetch`]; a body that is not JSON maps to
    /// [`NodeError::InvalidJson`].
    #[instrument(skip(self), fields(url = %url))]
    pub fn get_json(&self, url: &str) -> Result<Value> {
        debug!("Fetching JSON");
        let fetch_err = |e: reqwest::Error| NodeError::Fetch(e.to_string());

        let response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(fetch_err)?;

        debug!(status = %response.status(), "Response received");
        let body = response.text().map_err(fetch_err)?;
        serde_json::from_str(&body).map_err(NodeError::InvalidJson)
    }

    /// Download `url` to `dest`, returning the number of bytes written.
    ///
    /// The body is streamed into `<dest>.part` and renamed into place once
    /// complete, so `dest` either does not exist or holds the whole file.
    #[instrument(skip(self, dest), fields(url = %url))]
    pub fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let download_err = |e: reqwest::Error| NodeError::Download(e.to_string());

        let mut response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(download_err)?;

        let part = part_path(dest);
        let written = File::create(&part)
            .map_err(NodeError::from)
            .and_then(|mut file| {
                let n = response.copy_to(&mut file).map_err(download_err)?;
                file.flush()?;
                Ok(n)
            });

        let finished = written.and_then(|n| {
            fs::rename(&part, dest)?;
            Ok(n)
        });

        match finished {
            Ok(n) => {
                info!(bytes = n, path = %dest.display(), "Download complete");
                Ok(n)
            }
            Err(e) => {
                let _ = fs::remove_file(&part);
                Err(e)
            }
        }
    }
}

fn part_path(dest: &Path) -> std::path::PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}
