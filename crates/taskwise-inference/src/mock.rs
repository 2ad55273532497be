//! Mock inference backend for deterministic testing.
//!
//! Implements the backend traits with canned responses and optional forced
//! failures, so downstream crates can exercise both the remote-success and
//! the degradation paths without a live server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use taskwise_core::{
    EmbeddingBackend, Error, GenerationBackend, GenerationOptions, InferenceBackend, Result,
    Vector,
};

use crate::local::local_embedding;

#[derive(Debug, Clone)]
struct MockConfig {
    dimension: usize,
    fixed_responses: HashMap<String, String>,
    default_response: String,
    failure_rate: f64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            dimension: 384,
            fixed_responses: HashMap::new(),
            default_response: "{}".to_string(),
            failure_rate: 0.0,
        }
    }
}

/// A logged backend call, for assertions.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: String,
    pub input: String,
}

/// Mock inference backend for testing.
#[derive(Clone, Default)]
pub struct MockInferenceBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

impl MockInferenceBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embedding dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        Arc::make_mut(&mut self.config).dimension = dimension;
        self
    }

    /// Set a fixed response for all generation requests.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).default_response = response.into();
        self
    }

    /// Add a response mapping for prompts containing the given marker.
    pub fn with_response_mapping(
        mut self,
        marker: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.config)
            .fixed_responses
            .insert(marker.into(), output.into());
        self
    }

    /// Set failure rate (0.0 - 1.0). Use 1.0 to force every call to fail.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        Arc::make_mut(&mut self.config).failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Get all logged calls.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of embed calls observed.
    pub fn embed_call_count(&self) -> usize {
        self.count_calls("embed")
    }

    /// Number of generation calls observed.
    pub fn generate_call_count(&self) -> usize {
        self.count_calls("generate")
    }

    fn count_calls(&self, operation: &str) -> usize {
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    fn log_call(&self, operation: &str, input: &str) {
        self.call_log.lock().unwrap().push(MockCall {
            operation: operation.to_string(),
            input: input.to_string(),
        });
    }

    fn should_fail(&self) -> bool {
        use rand::Rng;
        if self.config.failure_rate >= 1.0 {
            true
        } else if self.config.failure_rate > 0.0 {
            rand::thread_rng().gen::<f64>() < self.config.failure_rate
        } else {
            false
        }
    }
}

#[async_trait]
impl EmbeddingBackend for MockInferenceBackend {
    async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vector>> {
        for text in texts {
            self.log_call("embed", text);
        }
        if self.should_fail() {
            return Err(Error::Embedding("simulated failure".to_string()));
        }
        // Deterministic: reuse the local algorithm, resized to the mock
        // dimension by truncation or zero-padding.
        Ok(texts
            .iter()
            .map(|t| {
                let mut v = local_embedding(t);
                v.resize(self.config.dimension, 0.0);
                v
            })
            .collect())
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn model_name(&self) -> &str {
        "mock-embed"
    }
}

#[async_trait]
impl GenerationBackend for MockInferenceBackend {
    async fn generate(&self, prompt: &str, _options: GenerationOptions) -> Result<String> {
        self.log_call("generate", prompt);
        if self.should_fail() {
            return Err(Error::Inference("simulated failure".to_string()));
        }
        for (marker, response) in &self.config.fixed_responses {
            if prompt.contains(marker.as_str()) {
                return Ok(response.clone());
            }
        }
        Ok(self.config.default_response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-gen"
    }
}

#[async_trait]
impl InferenceBackend for MockInferenceBackend {
    async fn health_check(&self) -> Result<bool> {
        Ok(self.config.failure_rate < 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_embed_dimension() {
        let backend = MockInferenceBackend::new().with_dimension(128);
        let vectors = backend.embed_texts(&["test".to_string()]).await.unwrap();
        assert_eq!(vectors[0].len(), 128);
    }

    #[tokio::test]
    async fn test_mock_embed_deterministic() {
        let backend = MockInferenceBackend::new();
        let a = backend.embed_texts(&["quantum".to_string()]).await.unwrap();
        let b = backend.embed_texts(&["quantum".to_string()]).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_mock_generate_fixed_response() {
        let backend = MockInferenceBackend::new().with_fixed_response("{\"priority\": \"high\"}");
        let out = backend
            .generate("anything", GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(out, "{\"priority\": \"high\"}");
    }

    #[tokio::test]
    async fn test_mock_generate_response_mapping() {
        let backend = MockInferenceBackend::new()
            .with_response_mapping("suggest 1-5 relevant tags", "{\"tags\": [\"work\"]}")
            .with_fixed_response("{}");

        let tagged = backend
            .generate(
                "Analyze this task and suggest 1-5 relevant tags.",
                GenerationOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(tagged, "{\"tags\": [\"work\"]}");

        let other = backend
            .generate("unrelated", GenerationOptions::default())
            .await
            .unwrap();
        assert_eq!(other, "{}");
    }

    #[tokio::test]
    async fn test_mock_forced_failure() {
        let backend = MockInferenceBackend::new().with_failure_rate(1.0);
        assert!(backend.embed_texts(&["x".to_string()]).await.is_err());
        assert!(backend
            .generate("x", GenerationOptions::default())
            .await
            .is_err());
        assert!(!backend.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_call_logging() {
        let backend = MockInferenceBackend::new();
        backend.embed_texts(&["a".to_string()]).await.unwrap();
        backend.embed_texts(&["b".to_string()]).await.unwrap();
        backend
            .generate("p", GenerationOptions::default())
            .await
            .unwrap();

        assert_eq!(backend.embed_call_count(), 2);
        assert_eq!(backend.generate_call_count(), 1);
        assert_eq!(backend.get_calls().len(), 3);
    }
}
