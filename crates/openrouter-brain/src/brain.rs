//! OpenRouterBrain implementation using the OpenRouter chat API.

use std::time::Duration;

use assistant_core::{
    async_trait, hash_prompt, Assistant, AssistantError, ChatMessage, ConversationHistory,
    SYSTEM_PROMPT,
};
use booking_tools::{default_registry, BookingApi, ToolSplicer};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse};
use crate::config::OpenRouterConfig;

/// Reply used when no API key is configured.
pub const MISSING_KEY_REPLY: &str = "Error: OpenRouter API key not configured";

/// Timeout for chat completion requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An assistant backed by OpenRouter's chat-completions API.
///
/// OpenRouterBrain keeps one shared conversation history, forwards each
/// operator message to the configured model, and pipes every reply through
/// the tool splicer so textual tool calls execute before the reply is
/// returned. Provider failures become reply text rather than errors, so
/// the chat surface always answers.
pub struct OpenRouterBrain {
    client: Client,
    config: OpenRouterConfig,
    history: ConversationHistory,
    splicer: ToolSplicer,
    system_prompt: String,
    system_prompt_hash: String,
}

impl OpenRouterBrain {
    /// Create a new OpenRouterBrain with the given configuration and splicer.
    pub fn new(config: OpenRouterConfig, splicer: ToolSplicer) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                AssistantError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let history = ConversationHistory::new(config.max_history_messages);
        let system_prompt = config
            .system_prompt
            .clone()
            .unwrap_or_else(|| SYSTEM_PROMPT.to_string());
        let system_prompt_hash = hash_prompt(&system_prompt);

        info!(
            "OpenRouterBrain system prompt fingerprint: {}",
            system_prompt_hash
        );
        info!(
            "OpenRouterBrain initialized with model: {}, api_key configured: {}",
            config.model,
            config.api_key.is_some()
        );

        Ok(Self {
            client,
            config,
            history,
            splicer,
            system_prompt,
            system_prompt_hash,
        })
    }

    /// Create an OpenRouterBrain from environment variables.
    ///
    /// Reads [`OpenRouterConfig::from_env`] plus `BOOKING_API_URL`
    /// (default: http://localhost:3000) for the tool backend.
    pub fn from_env() -> Result<Self, AssistantError> {
        let config = OpenRouterConfig::from_env();

        let base_url = std::env::var("BOOKING_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let api = BookingApi::new(base_url).map_err(|e| {
            AssistantError::Configuration(format!("Failed to create booking client: {}", e))
        })?;
        let splicer = ToolSplicer::new(default_registry(api)).map_err(|e| {
            AssistantError::Configuration(format!("Failed to build tool splicer: {}", e))
        })?;

        Self::new(config, splicer)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Get the system prompt fingerprint.
    pub fn system_prompt_hash(&self) -> &str {
        &self.system_prompt_hash
    }

    /// Clear the conversation history.
    pub async fn clear_history(&self) {
        self.history.clear().await;
    }

    /// Build the messages array for a chat completion request.
    async fn build_messages(&self, user_text: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::new();

        messages.push(ChatMessage::system(self.system_prompt.clone()));
        messages.extend(self.history.snapshot().await);
        messages.push(ChatMessage::user(user_text));

        messages
    }

    /// Make a chat completion request to the OpenRouter API.
    async fn chat_completion(
        &self,
        api_key: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<String, AssistantError> {
        let url = format!("{}/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(
            "Sending request to OpenRouter: model={}, messages={}",
            request.model,
            request.messages.len()
        );

        let mut builder = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("X-Title", self.config.app_title.as_str());

        if let Some(ref referer) = self.config.app_referer {
            builder = builder.header("HTTP-Referer", referer.as_str());
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(AssistantError::Completion(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(AssistantError::Completion(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AssistantError::Completion(format!("Failed to parse response: {}", e))
        })?;

        if let Some(ref usage) = completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AssistantError::Completion("response contained no content".to_string()))
    }
}

#[async_trait]
impl Assistant for OpenRouterBrain {
    async fn handle_message(&self, message: &str) -> Result<String, AssistantError> {
        debug!("Handling operator message: {}", message);

        let reply = match self.config.api_key.as_deref() {
            None => {
                warn!("No OpenRouter API key configured, returning canned reply");
                MISSING_KEY_REPLY.to_string()
            }
            Some(api_key) => {
                let messages = self.build_messages(message).await;
                match self.chat_completion(api_key, messages).await {
                    Ok(text) => text,
                    Err(e) => {
                        warn!("Chat completion failed: {}", e);
                        format!("Error calling OpenRouter API: {}", e)
                    }
                }
            }
        };

        // Execute any tool calls the model wrote into its reply
        let spliced = self.splicer.process(&reply).await;

        self.history.record_exchange(message, &spliced).await;

        Ok(spliced)
    }

    fn name(&self) -> &str {
        "OpenRouterBrain"
    }
}
