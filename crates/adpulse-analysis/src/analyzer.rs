//! Chat-completions client for ad-copy audits.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AnalysisError;
use crate::types::CopyAnalysisResult;

/// Settings for the copy analyzer, usually derived from [`adpulse_core::AppConfig`].
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Bearer token for the completion API. `None` puts the analyzer in
    /// fallback-only mode: no network calls are made.
    pub api_key: Option<String>,
    /// OpenAI-compatible API root, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl AnalyzerConfig {
    #[must_use]
    pub fn from_app_config(config: &adpulse_core::AppConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.clone(),
            model: config.openai_model.clone(),
            max_tokens: config.openai_max_tokens,
            temperature: config.openai_temperature,
            timeout_secs: config.openai_timeout_secs,
        }
    }
}

/// Client for LLM-backed copy audits.
///
/// Use [`CopyAnalyzer::new`] in production; point `base_url` at a mock server
/// in tests.
pub struct CopyAnalyzer {
    client: Client,
    config: AnalyzerConfig,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl CopyAnalyzer {
    /// Creates a new analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("adpulse/0.1 (copy-analysis)")
            .build()?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self {
            client,
            config: AnalyzerConfig { base_url, ..config },
        })
    }

    /// Audit one piece of ad copy for a campaign objective.
    ///
    /// Never fails the caller: without an API key, and on any HTTP, API, or
    /// parse failure, the static [`CopyAnalysisResult::fallback`] is returned
    /// and a warning is logged.
    pub async fn analyze(&self, ad_text: &str, objective: &str) -> CopyAnalysisResult {
        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::warn!("no completion API key configured; returning fallback analysis");
            return CopyAnalysisResult::fallback();
        };

        match self.request_analysis(api_key, ad_text, objective).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "copy analysis call failed; returning fallback");
                CopyAnalysisResult::fallback()
            }
        }
    }

    async fn request_analysis(
        &self,
        api_key: &str,
        ad_text: &str,
        objective: &str,
    ) -> Result<CopyAnalysisResult, AnalysisError> {
        let prompt = format!(
            "Analyze the following ad copy for a {objective} campaign.\n\n\
             Ad Copy:\n\"{ad_text}\"\n\n\
             Return a JSON object with:\n\
             - score (0-100 float)\n\
             - hooks (list of strong opening lines found)\n\
             - ctas (list of call to actions found)\n\
             - improvements (list of specific suggestions)\n\
             - winning_patterns (list of abstract patterns found, e.g. \"Scarcity\", \"Social Proof\")"
        );

        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "response_format": { "type": "json_object" },
            "messages": [
                {
                    "role": "system",
                    "content": "You are a world-class Direct Response Copywriter."
                },
                { "role": "user", "content": prompt }
            ],
        });

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: ChatResponse = response.json().await?;
        let content = envelope
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| {
                AnalysisError::ApiError("completion response has no choices".to_string())
            })?;

        let data: Value =
            serde_json::from_str(content).map_err(|e| AnalysisError::Deserialize {
                context: "completion message content".to_string(),
                source: e,
            })?;

        // Field-by-field defaults: a partially-shaped answer still produces a result.
        Ok(CopyAnalysisResult {
            score: data.get("score").and_then(Value::as_f64).unwrap_or(0.0),
            hooks: string_list(&data, "hooks"),
            ctas: string_list(&data, "ctas"),
            improvements: string_list(&data, "improvements"),
            winning_patterns: string_list(&data, "winning_patterns"),
        })
    }
}

fn string_list(data: &Value, key: &str) -> Vec<String> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
