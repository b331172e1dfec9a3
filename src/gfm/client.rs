//! HTTP client for the markdown rendering API

use super::{Flavor, HtmlRenderer};
use crate::error::ReportError;
use serde::Serialize;
use std::time::Duration;

/// Configuration for the rendering client
#[derive(Debug, Clone)]
pub struct GfmConfig {
    /// Rendering endpoint URL
    pub endpoint: String,
    /// Authorization token, sent as `Authorization: token <value>`
    pub token: Option<String>,
    /// Bound on the whole request; a hung endpoint must not hang the run
    pub timeout: Duration,
}

impl Default for GfmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.github.com/markdown".to_string(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Blocking client for the rendering endpoint. The pipeline makes exactly
/// one call per run.
pub struct GfmClient {
    config: GfmConfig,
    client: reqwest::blocking::Client,
}

/// Request body for the render call
#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    text: &'a str,
    mode: &'a str,
}

impl GfmClient {
    /// Create a new rendering client
    pub fn new(config: GfmConfig) -> Result<Self, ReportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("weeklyreport/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReportError::Network {
                reason: format!("could not build HTTP client: {}", e),
            })?;

        Ok(Self { config, client })
    }
}

impl HtmlRenderer for GfmClient {
    fn render(&self, markdown: &str, flavor: Flavor) -> Result<String, ReportError> {
        let request = RenderRequest {
            text: markdown,
            mode: flavor.as_str(),
        };

        let mut builder = self.client.post(&self.config.endpoint).json(&request);
        if let Some(ref token) = self.config.token {
            builder = builder.header("Authorization", format!("token {}", token));
        }

        tracing::debug!("rendering {} bytes of markdown as {}", markdown.len(), flavor);

        let response = builder.send().map_err(|e| ReportError::Network {
            reason: format!("request to {} failed: {}", self.config.endpoint, e),
        })?;

        let status = response.status();
        if !status.is_success() {
            // An error body is not a rendered report
            let body = response.text().unwrap_or_default();
            return Err(ReportError::Network {
                reason: format!(
                    "{} returned {}: {}",
                    self.config.endpoint,
                    status,
                    body.trim()
                ),
            });
        }

        response.text().map_err(|e| ReportError::Network {
            reason: format!("could not read response from {}: {}", self.config.endpoint, e),
        })
    }
}

/// Canned renderer for tests; returns a fixed response, or echoes the
/// markdown wrapped in an `<article>` when none is configured.
pub struct MockRenderer {
    response: Option<String>,
}

impl MockRenderer {
    /// Echoing mock
    pub fn new() -> Self {
        Self { response: None }
    }

    /// Mock with a fixed response body
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
        }
    }
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer for MockRenderer {
    fn render(&self, markdown: &str, _flavor: Flavor) -> Result<String, ReportError> {
        Ok(match self.response {
            Some(ref response) => response.clone(),
            None => format!("<article>{}</article>", markdown),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_echoes_markdown() {
        let renderer = MockRenderer::new();
        let html = renderer.render("# Hi", Flavor::Gfm).unwrap();
        assert_eq!(html, "<article># Hi</article>");
    }

    #[test]
    fn test_mock_fixed_response() {
        let renderer = MockRenderer::with_response("<p>fixed</p>");
        let html = renderer.render("anything", Flavor::Markdown).unwrap();
        assert_eq!(html, "<p>fixed</p>");
    }

    #[test]
    fn test_default_config() {
        let config = GfmConfig::default();
        assert!(config.endpoint.contains("api.github.com"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_render_request_wire_format() {
        let request = RenderRequest {
            text: "# Title",
            mode: Flavor::Gfm.as_str(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["text"], "# Title");
        assert_eq!(json["mode"], "gfm");
    }

    #[test]
    fn test_unreachable_endpoint_is_network_error() {
        let client = GfmClient::new(GfmConfig {
            endpoint: "http://127.0.0.1:1/markdown".to_string(),
            token: None,
            timeout: Duration::from_millis(200),
        })
        .unwrap();

        let err = client.render("# Hi", Flavor::Gfm).unwrap_err();
        assert!(matches!(err, ReportError::Network { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
