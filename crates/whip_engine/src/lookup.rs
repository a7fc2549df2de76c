use std::time::Duration;

use whip_core::CanonicalRecord;

use crate::types::LookupError;
use crate::wire::LookupResponse;

/// Connection parameters for the lookup service. Timeouts are explicit
/// rather than inherited from the transport's defaults.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://songwhip.com/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait LookupClient: Send + Sync {
    /// Resolves an arbitrary platform URL into the service's canonical
    /// record. One attempt, no retries.
    async fn lookup(&self, source_url: &str) -> Result<CanonicalRecord, LookupError>;
}

/// Reqwest-backed client speaking the service's JSON contract:
/// `POST {"url": ...}`, canonical record back on 200.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    settings: LookupSettings,
}

impl HttpLookupClient {
    pub fn new(settings: LookupSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, LookupError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| LookupError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl LookupClient for HttpLookupClient {
    async fn lookup(&self, source_url: &str) -> Result<CanonicalRecord, LookupError> {
        let client = self.build_client()?;
        let response = client
            .post(&self.settings.endpoint)
            .json(&serde_json::json!({ "url": source_url }))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let decoded: LookupResponse =
            serde_json::from_str(&body).map_err(|err| LookupError::Decode(err.to_string()))?;
        Ok(decoded.into_record())
    }
}

fn map_transport_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        return LookupError::Timeout;
    }
    LookupError::Network(err.to_string())
}
