use crate::error::GenerationError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

pub mod models;
pub mod ollama;
mod prompt;

/// Seam to the text-generation backend; implemented by [`ollama::OllamaBackend`]
/// in production and by doubles in tests.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Sends one prompt to the named model and returns the generated text
    /// verbatim. The output is never altered, truncated, or re-validated
    /// here; the report structure is the backend's best-effort contract.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError>;
}

/// Builds the analysis prompt for one batch and delegates to the backend.
pub struct GenerationInvoker {
    backend: Arc<dyn GenerationBackend>,
}

impl GenerationInvoker {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    pub async fn invoke(
        &self,
        review_text: &str,
        range_label: &str,
        model_label: &str,
    ) -> Result<String, GenerationError> {
        let model = models::resolve_model_label(model_label);
        let prompt = prompt::build_prompt(range_label, review_text);

        debug!(model, batch = range_label, "Invoking generation backend");
        self.backend.generate(model, &prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingBackend {
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl GenerationBackend for RecordingBackend {
        async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
            self.calls
                .lock()
                .unwrap()
                .push((model.to_string(), prompt.to_string()));
            Ok("### Report for Batch 1-3\n…".to_string())
        }
    }

    #[tokio::test]
    async fn resolves_label_and_interpolates_range() {
        let backend = Arc::new(RecordingBackend {
            calls: Mutex::new(Vec::new()),
        });
        let invoker = GenerationInvoker::new(backend.clone());

        let report = invoker
            .invoke("Great coffee | 5", "1-3", "DeepSeek R1 (8B)")
            .await
            .unwrap();
        assert!(report.starts_with("### Report"));

        let calls = backend.calls.lock().unwrap();
        let (model, prompt) = &calls[0];
        assert_eq!(model, "deepseek-r1:8b");
        assert!(prompt.contains("Report for Batch 1-3"));
        assert!(prompt.ends_with("Here are the reviews:\nGreat coffee | 5"));
        // The placeholder itself must be gone.
        assert!(!prompt.contains("{batch_range}"));
    }

    #[tokio::test]
    async fn unknown_label_uses_default_model() {
        let backend = Arc::new(RecordingBackend {
            calls: Mutex::new(Vec::new()),
        });
        let invoker = GenerationInvoker::new(backend.clone());

        invoker.invoke("text", "1-3", "GPT-9 (stale UI)").await.unwrap();

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls[0].0, models::DEFAULT_MODEL);
    }
}
