//! The assistance engine: orchestration of remote extraction and
//! deterministic fallback across the six assistance operations.

use tracing::{debug, warn};

use taskwise_core::{
    CategoryResult, Error, GenerationOptions, InferenceBackend, ParsedTask, PrioritySuggestion,
    Result, TagSuggestion, TaskBreakdown, TaskRecord, Vector,
};
use taskwise_inference::{LocalEmbedder, OpenAiBackend, RemoteConfig};
use taskwise_search::{rank_tasks, ScoredTask};

use crate::{extract, heuristics, prompts};

const PARSE_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.3,
    max_tokens: 500,
};
const TAG_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.5,
    max_tokens: 200,
};
const PRIORITY_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.3,
    max_tokens: 150,
};
const BREAKDOWN_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.7,
    max_tokens: 800,
};
const CATEGORIZE_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.3,
    max_tokens: 300,
};
const SUMMARY_OPTIONS: GenerationOptions = GenerationOptions {
    temperature: 0.5,
    max_tokens: 300,
};

/// Dual-mode assistance engine.
///
/// The mode is chosen once at construction: when credentials are configured
/// a remote backend handles generation and embeddings, otherwise every
/// operation runs on deterministic heuristics. Remote failures of any kind
/// (transport, malformed output) degrade to the same heuristics, so the
/// only error an operation ever returns is [`Error::InvalidInput`].
pub struct AssistEngine {
    remote: Option<Box<dyn InferenceBackend>>,
    local: LocalEmbedder,
}

impl AssistEngine {
    /// Build from configuration. Absent credentials select local-only mode;
    /// that is a normal state, not an error.
    pub fn from_config(config: RemoteConfig) -> Result<Self> {
        let remote: Option<Box<dyn InferenceBackend>> = if config.has_credentials() {
            debug!(model = %config.gen_model, "assistance engine in remote mode");
            Some(Box::new(OpenAiBackend::new(config)?))
        } else {
            debug!("assistance engine in local-only mode");
            None
        };

        Ok(Self {
            remote,
            local: LocalEmbedder::new(),
        })
    }

    /// Build from `OPENAI_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_config(RemoteConfig::from_env())
    }

    /// Heuristics-only engine, no remote dependency.
    pub fn local_only() -> Self {
        Self {
            remote: None,
            local: LocalEmbedder::new(),
        }
    }

    /// Engine over an explicit backend, remote mode regardless of config.
    pub fn with_backend(backend: Box<dyn InferenceBackend>) -> Self {
        Self {
            remote: Some(backend),
            local: LocalEmbedder::new(),
        }
    }

    /// Whether a remote backend is configured.
    pub fn is_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Whether the remote backend (if any) is reachable. Local-only mode
    /// reports healthy.
    pub async fn remote_healthy(&self) -> bool {
        match &self.remote {
            Some(backend) => backend.health_check().await.unwrap_or(false),
            None => true,
        }
    }

    /// Run the prompt through the remote backend, absorbing failures.
    async fn generate_remote(&self, prompt: &str, options: GenerationOptions) -> Option<String> {
        let remote = self.remote.as_ref()?;
        match remote.generate(prompt, options).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "remote generation failed, falling back");
                None
            }
        }
    }

    fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str> {
        if value.trim().is_empty() {
            Err(Error::InvalidInput(format!("{} must not be empty", field)))
        } else {
            Ok(value)
        }
    }

    /// Parse free-form text into a structured task draft.
    pub async fn parse_task(&self, text: &str) -> Result<ParsedTask> {
        let text = Self::require_text(text, "text")?;

        if let Some(response) = self
            .generate_remote(&prompts::parse_task(text), PARSE_OPTIONS)
            .await
        {
            match extract::parsed_task(&response, text) {
                Ok(parsed) => return Ok(parsed),
                Err(e) => warn!(error = %e, "unusable parse response, falling back"),
            }
        }

        Ok(heuristics::parse_task(text))
    }

    /// Suggest up to five tags for a task.
    pub async fn suggest_tags(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<TagSuggestion> {
        let title = Self::require_text(title, "title")?;

        if let Some(response) = self
            .generate_remote(&prompts::suggest_tags(title, description), TAG_OPTIONS)
            .await
        {
            match extract::tag_suggestion(&response) {
                Ok(suggestion) => return Ok(suggestion),
                Err(e) => warn!(error = %e, "unusable tags response, falling back"),
            }
        }

        Ok(heuristics::suggest_tags(title, description))
    }

    /// Suggest a priority level for a task.
    pub async fn suggest_priority(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<PrioritySuggestion> {
        let title = Self::require_text(title, "title")?;

        if let Some(response) = self
            .generate_remote(
                &prompts::suggest_priority(title, description),
                PRIORITY_OPTIONS,
            )
            .await
        {
            match extract::priority_suggestion(&response) {
                Ok(suggestion) => return Ok(suggestion),
                Err(e) => warn!(error = %e, "unusable priority response, falling back"),
            }
        }

        Ok(heuristics::suggest_priority(title, description))
    }

    /// Break a task into ordered subtasks. `count` is a recommendation
    /// forwarded to the model, not enforced on the result.
    pub async fn breakdown(
        &self,
        title: &str,
        description: Option<&str>,
        count: Option<usize>,
    ) -> Result<TaskBreakdown> {
        let title = Self::require_text(title, "title")?;

        if let Some(response) = self
            .generate_remote(
                &prompts::breakdown(title, description, count),
                BREAKDOWN_OPTIONS,
            )
            .await
        {
            match extract::breakdown(&response) {
                Ok(result) if !result.subtasks.is_empty() => return Ok(result),
                Ok(_) => warn!("remote breakdown returned no subtasks, falling back"),
                Err(e) => warn!(error = %e, "unusable breakdown response, falling back"),
            }
        }

        Ok(heuristics::breakdown(title))
    }

    /// Classify a task into the fixed category list.
    pub async fn categorize(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<CategoryResult> {
        let title = Self::require_text(title, "title")?;

        if let Some(response) = self
            .generate_remote(&prompts::categorize(title, description), CATEGORIZE_OPTIONS)
            .await
        {
            match extract::category_result(&response) {
                Ok(result) => return Ok(result),
                Err(e) => warn!(error = %e, "unusable category response, falling back"),
            }
        }

        Ok(heuristics::categorize(title, description))
    }

    /// Summarize a task collection in a few sentences.
    ///
    /// An empty collection short-circuits to the templated fallback even in
    /// remote mode; there is nothing for a model to add.
    pub async fn summarize(&self, tasks: &[TaskRecord]) -> String {
        if tasks.is_empty() {
            return heuristics::summarize(tasks);
        }

        if let Some(response) = self
            .generate_remote(&prompts::summarize(tasks), SUMMARY_OPTIONS)
            .await
        {
            let summary = response.trim();
            if !summary.is_empty() {
                return summary.to_string();
            }
            warn!("remote summary was empty, falling back");
        }

        heuristics::summarize(tasks)
    }

    /// Embed a text for similarity comparison. Never fails: remote errors
    /// degrade to the deterministic local embedding.
    pub async fn embed(&self, text: &str) -> Vector {
        if let Some(remote) = &self.remote {
            match remote.embed_texts(&[text.to_string()]).await {
                Ok(mut vectors) if !vectors.is_empty() => return vectors.remove(0),
                Ok(_) => warn!("remote embedding returned no vectors, falling back"),
                Err(e) => warn!(error = %e, "remote embedding failed, falling back"),
            }
        }

        taskwise_inference::local_embedding(text)
    }

    /// Find tasks similar to a (title, description) pair. Candidates
    /// without a stored embedding are skipped.
    pub async fn find_similar(
        &self,
        title: &str,
        description: Option<&str>,
        candidates: &[TaskRecord],
        limit: usize,
    ) -> Result<Vec<ScoredTask>> {
        let title = Self::require_text(title, "title")?;

        let query_text = format!("{} {}", title, description.unwrap_or(""));
        let query = self.embed(&query_text).await;
        Ok(rank_tasks(&query, candidates, limit))
    }

    /// Semantic search over task records with stored embeddings.
    pub async fn semantic_search(
        &self,
        query: &str,
        tasks: &[TaskRecord],
        limit: usize,
    ) -> Result<Vec<ScoredTask>> {
        let query = Self::require_text(query, "query")?;

        let vector = self.embed(query).await;
        Ok(rank_tasks(&vector, tasks, limit))
    }

    /// Reference to the local embedder, for callers that need the fallback
    /// dimension.
    pub fn local_embedder(&self) -> &LocalEmbedder {
        &self.local
    }
}
