//! Network-backed source client
//!
//! GETs `{base_url}{id}/` and decodes the JSON document. The body is read
//! chunk by chunk and its length checked against `Content-Length`, so a
//! connection that closes early is reported as `IncompleteRead` rather than
//! handed to the parser.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use types::ids::SourceId;
use types::payload::RawPayload;

use crate::client::SourceClient;
use crate::config::ClientConfig;
use crate::error::FetchError;

/// Cap on the buffer reserved up front from an advertised length.
const MAX_PREALLOC: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct HttpSourceClient {
    http: Client,
    config: ClientConfig,
}

impl HttpSourceClient {
    pub fn new(config: ClientConfig) -> reqwest::Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl SourceClient for HttpSourceClient {
    async fn fetch(&self, source_id: SourceId) -> Result<RawPayload, FetchError> {
        let url = self.config.source_url(source_id);
        debug!(source_id = %source_id, url = %url, "Fetching source");

        let mut response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let expected = response.content_length();
        let capacity = expected.unwrap_or(0).min(MAX_PREALLOC) as usize;
        let mut body = Vec::with_capacity(capacity);

        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(e) if e.is_timeout() => return Err(FetchError::Timeout),
                Err(e) => {
                    let received = body.len() as u64;
                    return Err(match expected {
                        Some(expected) if received < expected => {
                            FetchError::IncompleteRead { received, expected }
                        }
                        _ => FetchError::Transport(e.to_string()),
                    });
                }
            }
        }

        let received = body.len() as u64;
        if let Some(expected) = expected {
            if received < expected {
                warn!(source_id = %source_id, received, expected, "Short body");
                return Err(FetchError::IncompleteRead { received, expected });
            }
        }

        let payload = RawPayload::from_json(&body)?;
        debug!(
            source_id = %source_id,
            bytes = received,
            entries = payload.len(),
            "Source payload received"
        );
        Ok(payload)
    }

    fn label(&self) -> &'static str {
        "http"
    }
}
