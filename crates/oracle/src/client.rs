//! Client for the prediction service.
//!
//! One request per consultation: no retries and no streaming. Callers that
//! must always show something use [`OracleClient::consult`].

use std::sync::Arc;
use std::time::Instant;

use arcana_core::ResultExt;
use tracing::{debug, info};
use url::Url;

use crate::config::OracleConfig;
use crate::error::{Error, Result};
use crate::reading::Reading;
use crate::types::{PredictionRequest, PredictionResponse};

/// Client for requesting predictions.
#[derive(Debug, Clone)]
pub struct OracleClient {
    /// Configuration for the client.
    config: Arc<OracleConfig>,
    /// HTTP client with the configured timeout.
    http_client: reqwest::Client,
}

impl OracleClient {
    /// Create a new OracleClient with default configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(OracleConfig::default())
    }

    /// Create a new OracleClient with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the HTTP client cannot be built.
    pub fn with_config(config: OracleConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::connection_failed(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    /// Create a new OracleClient for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionFailed` if the HTTP client cannot be built.
    pub fn with_url(base_url: Url) -> Result<Self> {
        Self::with_config(OracleConfig::with_url(base_url))
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    /// Ask the service to interpret the selected cards.
    ///
    /// # Errors
    ///
    /// - `Timeout` / `ConnectionFailed` when the service cannot be reached
    /// - `Status` for a non-2xx answer
    /// - `InvalidResponse` when the body is not a prediction
    pub async fn predict(&self, question: &str, selected_indices: &[usize]) -> Result<PredictionResponse> {
        let url = self.config.predict_url()?;
        let request = PredictionRequest::new(question, selected_indices);

        info!(cards = ?selected_indices, question_len = question.len(), "Requesting prediction");
        let start = Instant::now();

        let response = self
            .http_client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::status(status.as_u16(), body));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let prediction: PredictionResponse = serde_json::from_str(&body)
            .map_err(|e| Error::invalid_response(format!("undecodable prediction: {e}")))?;

        debug!(
            duration_ms = start.elapsed().as_millis(),
            cards = prediction.cards.len(),
            "Prediction received"
        );
        Ok(prediction)
    }

    /// Request a prediction and turn it into a [`Reading`].
    ///
    /// Never fails: any error is logged and replaced by the configured
    /// fallback message with no cards.
    pub async fn consult(&self, question: &str, selected_indices: &[usize]) -> Reading {
        self.predict(question, selected_indices)
            .await
            .map(|response| Reading::from_response(question, response))
            .or_else_logged("Prediction failed", || {
                Reading::fallback(question, &self.config.fallback_message)
            })
    }

    fn classify(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            let timeout_ms = u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX);
            Error::timeout(timeout_ms)
        } else if error.is_connect() {
            Error::connection_failed(error.to_string())
        } else {
            Error::Http(error)
        }
    }
}

impl Default for OracleClient {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self {
            config: Arc::new(OracleConfig::default()),
            http_client: reqwest::Client::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> std::result::Result<OracleClient, Box<dyn std::error::Error>> {
        let config = OracleConfig::with_url(Url::parse(&server.uri())?).timeout(Duration::from_secs(2));
        Ok(OracleClient::with_config(config)?)
    }

    #[test]
    fn test_client_default() {
        let client = OracleClient::default();
        assert_eq!(client.config().base_url.as_str(), "http://localhost:8000/");
    }

    #[tokio::test]
    async fn test_predict_success() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/predict"))
            .and(body_json(serde_json::json!({
                "question": "Love?",
                "selected_indices": [0, 21]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cards": [
                    {"name": "The Fool", "img": "00.jpg", "position": "Past"},
                    {"name": "The World", "img": "21.jpg", "position": "Future"}
                ],
                "prediction": "Endings are beginnings."
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server)?;
        let response = client.predict("Love?", &[0, 21]).await?;

        assert_eq!(response.cards.len(), 2);
        assert_eq!(response.cards[1].position, "Future");
        assert_eq!(response.prediction, "Endings are beginnings.");
        Ok(())
    }

    #[tokio::test]
    async fn test_predict_under_path_prefix() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tarot/api/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cards": [],
                "prediction": "Quiet."
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base = Url::parse(&format!("{}/tarot/", mock_server.uri()))?;
        let client = OracleClient::with_url(base)?;
        let response = client.predict("q", &[5]).await?;

        assert_eq!(response.prediction, "Quiet.");
        Ok(())
    }

    #[tokio::test]
    async fn test_predict_error_status() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/predict"))
            .respond_with(ResponseTemplate::new(422).set_body_string("bad indices"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server)?;
        let result = client.predict("q", &[99]).await;

        match result {
            Err(Error::Status { status, body }) => {
                assert_eq!(status, 422);
                assert_eq!(body, "bad indices");
            }
            other => return Err(format!("expected status error, got {other:?}").into()),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_predict_malformed_body() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server)?;
        let result = client.predict("q", &[1]).await;
        assert!(matches!(result, Err(Error::InvalidResponse { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_predict_timeout() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/predict"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let config = OracleConfig::with_url(Url::parse(&mock_server.uri())?)
            .timeout(Duration::from_millis(200));
        let client = OracleClient::with_config(config)?;

        let result = client.predict("q", &[1]).await;
        assert!(matches!(result, Err(Error::Timeout { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_consult_falls_back_on_server_error() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/predict"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server)?;
        let reading = client.consult("q", &[1, 2, 3]).await;

        assert!(reading.fallback);
        assert!(reading.cards.is_empty());
        assert_eq!(reading.prediction.intro, crate::config::DEFAULT_FALLBACK_MESSAGE);
        assert!(reading.prediction.sections.is_empty());
        Ok(())
    }
}
