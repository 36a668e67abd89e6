//! Resume data loading: primary endpoint first, local fallback second.
//!
//! The two attempts are sequential suspending calls on one logical task,
//! never concurrent. The first success wins and the other source is never
//! tried; if both fail the caller gets a single `LoadError` carrying both
//! causes for the log, with no detail surfaced to the user.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::model::ResumeDocument;
use crate::PageConfig;

/// Fetches the Resume Document with a two-step fallback policy.
pub struct ResumeLoader {
    client: reqwest::Client,
    api_url: String,
    fallback_path: PathBuf,
}

impl ResumeLoader {
    pub fn new(config: &PageConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::ConfigError(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            fallback_path: config.fallback_path.clone(),
        })
    }

    /// GET the primary endpoint. A transport error or non-success status is a
    /// `FetchError`; a body that is not a Resume Document is a `ParseError`.
    pub async fn fetch_primary(&self) -> Result<ResumeDocument> {
        let response = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| Error::FetchError(format!("primary source: {}", e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchError(format!(
                "primary source returned HTTP {}",
                status
            )));
        }
        let body = response
            .text()
            .await
            .map_err(|e| Error::FetchError(format!("primary source body: {}", e)))?;
        serde_json::from_str(&body).map_err(|e| Error::ParseError(format!("primary source: {}", e)))
    }

    /// Read the local fallback resource.
    pub fn read_fallback(&self) -> Result<ResumeDocument> {
        let body = fs::read_to_string(&self.fallback_path).map_err(|e| {
            Error::FetchError(format!("fallback {}: {}", self.fallback_path.display(), e))
        })?;
        serde_json::from_str(&body).map_err(|e| {
            Error::ParseError(format!("fallback {}: {}", self.fallback_path.display(), e))
        })
    }

    /// Try the primary source, then the fallback exactly once. The diagnostic
    /// detail stays in the log and the returned error; it is not part of the
    /// user-visible contract.
    pub async fn load(&self) -> Result<ResumeDocument> {
        debug!("trying primary source {}", self.api_url);
        let primary_err = match self.fetch_primary().await {
            Ok(doc) => {
                info!("resume data retrieved from primary source");
                return Ok(doc);
            }
            Err(e) => e,
        };
        warn!(
            "primary source failed ({}); trying fallback {}",
            primary_err,
            self.fallback_path.display()
        );
        match self.read_fallback() {
            Ok(doc) => {
                info!("resume data retrieved from fallback");
                Ok(doc)
            }
            Err(fallback_err) => Err(Error::LoadError(format!(
                "primary: {}; fallback: {}",
                primary_err, fallback_err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(api_url: &str, fallback: PathBuf) -> PageConfig {
        PageConfig {
            api_url: api_url.to_string(),
            fallback_path: fallback,
            ..Default::default()
        }
    }

    #[test]
    fn fallback_io_error_is_fetch_error() {
        let config = config_with("http://localhost:1", PathBuf::from("/nonexistent/resume.json"));
        let loader = ResumeLoader::new(&config).unwrap();
        match loader.read_fallback() {
            Err(Error::FetchError(msg)) => assert!(msg.contains("resume.json")),
            other => panic!("expected FetchError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn fallback_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");
        fs::write(&path, "{not json").unwrap();
        let loader = ResumeLoader::new(&config_with("http://localhost:1", path)).unwrap();
        assert!(matches!(loader.read_fallback(), Err(Error::ParseError(_))));
    }

    #[tokio::test]
    async fn load_reports_both_causes_when_everything_fails() {
        // Port 1 refuses connections; the fallback path does not exist.
        let config = config_with("http://127.0.0.1:1/api/resume", PathBuf::from("/nope.json"));
        let loader = ResumeLoader::new(&config).unwrap();
        match loader.load().await {
            Err(Error::LoadError(msg)) => {
                assert!(msg.contains("primary:"));
                assert!(msg.contains("fallback:"));
            }
            other => panic!("expected LoadError, got {:?}", other.map(|_| ())),
        }
    }
}
