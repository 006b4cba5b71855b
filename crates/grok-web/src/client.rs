//! REST client for the service configuration API

use std::path::Path;
use std::time::Duration;

use reqwest::Response;
use url::Url;

use crate::{Error, Result};

/// How much of an error response body is kept for diagnostics.
const BODY_SNIPPET_LEN: usize = 256;

/// Client for one service endpoint.
///
/// Holds a single HTTP client with a bounded per-request timeout for the
/// lifetime of the run.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    base: String,
    http: reqwest::Client,
}

impl ServiceClient {
    /// Create a client for the service at `uri` (the webapp URI including
    /// its context path, e.g. `http://localhost:8080/source`).
    pub fn new(uri: &str, timeout: Duration) -> Result<Self> {
        // Validate early so a malformed URI is a startup error, not a
        // mid-operation one.
        Url::parse(uri).map_err(|source| Error::Uri {
            uri: uri.to_string(),
            source,
        })?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self {
            base: uri.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The service URI this client talks to.
    pub fn uri(&self) -> &str {
        &self.base
    }

    /// Fetch the current service configuration as opaque text.
    pub async fn get_configuration(&self) -> Result<String> {
        let url = format!("{}/api/v1/configuration", self.base);
        tracing::debug!("GET {}", url);
        let resp = self.send(self.http.get(&url), &url).await?;
        resp.text().await.map_err(|source| Error::Request { url, source })
    }

    /// Upload the configuration file at `path` to the service.
    pub async fn set_configuration(&self, path: &Path) -> Result<()> {
        let body = tokio::fs::read(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let url = format!("{}/api/v1/configuration", self.base);
        tracing::debug!("PUT {} ({} bytes)", url, body.len());
        self.send(
            self.http
                .put(&url)
                .header(reqwest::header::CONTENT_TYPE, "application/xml")
                .body(body),
            &url,
        )
        .await?;
        Ok(())
    }

    /// Register a new project with the service.
    pub async fn add_project(&self, name: &str) -> Result<()> {
        let url = format!("{}/api/v1/projects", self.base);
        tracing::debug!("POST {} ({})", url, name);
        self.send(
            self.http
                .post(&url)
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(name.to_string()),
            &url,
        )
        .await?;
        Ok(())
    }

    /// Remove a project's registration and its indexed data.
    pub async fn delete_project(&self, name: &str) -> Result<()> {
        let url = format!("{}/api/v1/projects/{}", self.base, name);
        tracing::debug!("DELETE {}", url);
        self.send(self.http.delete(&url), &url).await?;
        Ok(())
    }

    /// Read a single configuration value (e.g. `sourceRoot`) as text.
    pub async fn get_config_value(&self, key: &str) -> Result<String> {
        let url = format!("{}/api/v1/configuration/{}", self.base, key);
        tracing::debug!("GET {}", url);
        let resp = self.send(self.http.get(&url), &url).await?;
        resp.text().await.map_err(|source| Error::Request { url, source })
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<Response> {
        let resp = request.send().await.map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })?;
        Self::check_status(resp, url).await
    }

    async fn check_status(resp: Response, url: &str) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = snippet(resp.text().await.unwrap_or_default());
        Err(Error::Status {
            status,
            url: url.to_string(),
            body,
        })
    }
}

fn snippet(body: String) -> String {
    if body.len() <= BODY_SNIPPET_LEN {
        return body;
    }
    let mut end = BODY_SNIPPET_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
