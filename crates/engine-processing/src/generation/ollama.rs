use crate::{error::GenerationError, generation::GenerationBackend};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Generation can take minutes on small hardware; the call must still end in
/// bounded time rather than hang the poll loop forever.
const GENERATION_TIMEOUT: Duration = Duration::from_secs(300);
const TEMPERATURE: f32 = 0.3;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    error: Option<String>,
}

/// Ollama `/api/generate` client.
pub struct OllamaBackend {
    client: reqwest::Client,
    base_url: String,
}

impl OllamaBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(GENERATION_TIMEOUT)
            .build()
            .map_err(|e| GenerationError::BackendUnreachable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GenerationBackend for OllamaBackend {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Rejected(format!("HTTP {status}: {body}")));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Rejected(format!("unexpected response shape: {e}")))?;

        if let Some(error) = reply.error {
            return Err(GenerationError::Rejected(error));
        }

        Ok(reply.response)
    }
}

fn classify_transport_error(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::BackendTimeout(err.to_string())
    } else {
        GenerationError::BackendUnreachable(err.to_string())
    }
}
