//! Model access: the `ModelClient` seam plus the live multi-provider
//! implementation. Text goes through the `llm` crate; image generation hits
//! the provider HTTP endpoints directly since the `llm` crate does not cover
//! them. Single attempt per call, no retry, no timeout.

use async_trait::async_trait;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;

use fundao_core::AiSettings;

const OPENAI_IMAGE_URL: &str = "https://api.openai.com/v1/images/generations";
const OPENAI_IMAGE_MODEL: &str = "gpt-image-1";
const GOOGLE_IMAGE_MODEL: &str = "imagen-4.0-fast-generate-001";

/// The hosted model, reduced to the two operations the flows need.
/// Inject a fake implementation for reproducible tests.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// One text completion. `system` frames the task, `user` carries the data.
    async fn generate(&self, system: &str, user: &str) -> Result<String, String>;

    /// One image generation. `Ok(None)` means the provider answered but the
    /// reply carried no image payload, which is kept separate from transport
    /// errors.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<Option<String>, String>;
}

fn map_backend(provider: &str) -> Result<LLMBackend, String> {
    match provider {
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "google" => Ok(LLMBackend::Google),
        "ollama" => Ok(LLMBackend::Ollama),
        "groq" => Ok(LLMBackend::Groq),
        "mistral" => Ok(LLMBackend::Mistral),
        "deepseek" => Ok(LLMBackend::DeepSeek),
        other => Err(format!("unknown provider: {other}")),
    }
}

/// Live client configured from [`AiSettings`].
pub struct LlmClient {
    settings: AiSettings,
    http: reqwest::Client,
}

impl LlmClient {
    pub fn new(settings: AiSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
        }
    }

    async fn openai_image(&self, prompt: &str) -> Result<Option<String>, String> {
        let body = serde_json::json!({
            "model": OPENAI_IMAGE_MODEL,
            "prompt": prompt,
            "n": 1,
            // The contract asks for a square image; 1:1 maps to 1024x1024.
            "size": "1024x1024",
        });

        let response = self
            .http
            .post(OPENAI_IMAGE_URL)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("image request: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("image API returned {status}: {body}"));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("image response: {e}"))?;

        let url = data
            .get("data")
            .and_then(|d| d.as_array())
            .and_then(|a| a.first())
            .and_then(|item| {
                if let Some(b64) = item.get("b64_json").and_then(|v| v.as_str()) {
                    Some(format!("data:image/png;base64,{b64}"))
                } else {
                    item.get("url").and_then(|v| v.as_str()).map(String::from)
                }
            });

        Ok(url)
    }

    async fn google_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<Option<String>, String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{GOOGLE_IMAGE_MODEL}:predict?key={}",
            self.settings.api_key
        );
        let body = serde_json::json!({
            "instances": [{ "prompt": prompt }],
            "parameters": { "sampleCount": 1, "aspectRatio": aspect_ratio },
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("image request: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("image API returned {status}: {body}"));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| format!("image response: {e}"))?;

        let url = data
            .get("predictions")
            .and_then(|p| p.as_array())
            .and_then(|a| a.first())
            .and_then(|p| p.get("bytesBase64Encoded"))
            .and_then(|v| v.as_str())
            .map(|b64| format!("data:image/png;base64,{b64}"));

        Ok(url)
    }
}

#[async_trait]
impl ModelClient for LlmClient {
    async fn generate(&self, system: &str, user: &str) -> Result<String, String> {
        let backend = map_backend(&self.settings.provider)?;

        let mut builder = LLMBuilder::new()
            .backend(backend)
            .model(&self.settings.model)
            .system(system);

        if !self.settings.api_key.is_empty() {
            builder = builder.api_key(&self.settings.api_key);
        }

        let llm = builder.build().map_err(|e| format!("build LLM: {e}"))?;

        let messages = vec![ChatMessage::user().content(user).build()];

        let response = llm.chat(&messages).await.map_err(|e| format!("chat: {e}"))?;

        match response.text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            Some(_) => Err("LLM returned empty text".to_string()),
            None => Err("LLM returned no text".to_string()),
        }
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<Option<String>, String> {
        match self.settings.provider.as_str() {
            "openai" => self.openai_image(prompt).await,
            "google" => self.google_image(prompt, aspect_ratio).await,
            other => Err(format!("provider '{other}' has no image generation endpoint")),
        }
    }
}
