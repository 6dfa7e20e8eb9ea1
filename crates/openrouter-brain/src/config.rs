//! Configuration for OpenRouterBrain.

use std::env;
use std::path::Path;

use assistant_core::DEFAULT_MAX_MESSAGES;

/// Default system prompt file name.
pub const DEFAULT_PROMPT_FILE: &str = "SYSTEM_PROMPT.md";

const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "anthropic/claude-3-haiku";
const DEFAULT_APP_TITLE: &str = "Booking Admin Assistant";

/// Configuration for OpenRouterBrain.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// OpenRouter API base URL.
    pub api_url: String,

    /// API key for authentication. Absence degrades the chat call to a
    /// fixed reply instead of failing startup.
    pub api_key: Option<String>,

    /// Model identifier to request.
    pub model: String,

    /// Optional system prompt override. When unset the brain uses the
    /// built-in booking assistant prompt.
    pub system_prompt: Option<String>,

    /// Maximum tokens for the completion.
    pub max_tokens: u32,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: f32,

    /// Maximum number of history messages to keep.
    pub max_history_messages: usize,

    /// Optional HTTP-Referer attribution header value.
    pub app_referer: Option<String>,

    /// X-Title attribution header value.
    pub app_title: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
            max_tokens: 1000,
            temperature: 0.7,
            max_history_messages: DEFAULT_MAX_MESSAGES,
            app_referer: None,
            app_title: DEFAULT_APP_TITLE.to_string(),
        }
    }
}

impl OpenRouterConfig {
    /// Create configuration from environment variables.
    ///
    /// Every variable is optional:
    /// - `OPENROUTER_API_KEY` - API key (empty counts as unset)
    /// - `OPENROUTER_API_URL` - API URL (default: https://openrouter.ai/api/v1)
    /// - `OPENROUTER_MODEL` - Model name (default: anthropic/claude-3-haiku)
    /// - `OPENROUTER_SYSTEM_PROMPT` - System prompt (overrides prompt file)
    /// - `OPENROUTER_PROMPT_FILE` - Path to system prompt file (default: SYSTEM_PROMPT.md)
    /// - `OPENROUTER_MAX_TOKENS` - Max tokens (default: 1000)
    /// - `OPENROUTER_TEMPERATURE` - Temperature (default: 0.7)
    /// - `OPENROUTER_MAX_HISTORY_MESSAGES` - Max history messages (default: 40)
    /// - `OPENROUTER_APP_REFERER` - HTTP-Referer attribution header
    /// - `OPENROUTER_APP_TITLE` - X-Title attribution header (default: Booking Admin Assistant)
    ///
    /// System prompt priority:
    /// 1. `OPENROUTER_SYSTEM_PROMPT` env var (if set)
    /// 2. Contents of prompt file (if exists)
    /// 3. None (the brain falls back to the built-in prompt)
    pub fn from_env() -> Self {
        let api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_url =
            env::var("OPENROUTER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        // System prompt: env var takes precedence, then try loading from file
        let system_prompt = if let Ok(prompt) = env::var("OPENROUTER_SYSTEM_PROMPT") {
            Some(prompt)
        } else {
            let prompt_file = env::var("OPENROUTER_PROMPT_FILE")
                .unwrap_or_else(|_| DEFAULT_PROMPT_FILE.to_string());
            load_prompt_file(&prompt_file)
        };

        let max_tokens = env::var("OPENROUTER_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let temperature = env::var("OPENROUTER_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.7);

        let max_history_messages = env::var("OPENROUTER_MAX_HISTORY_MESSAGES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_MESSAGES);

        let app_referer = env::var("OPENROUTER_APP_REFERER")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let app_title =
            env::var("OPENROUTER_APP_TITLE").unwrap_or_else(|_| DEFAULT_APP_TITLE.to_string());

        Self {
            api_url,
            api_key,
            model,
            system_prompt,
            max_tokens,
            temperature,
            max_history_messages,
            app_referer,
            app_title,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> OpenRouterConfigBuilder {
        OpenRouterConfigBuilder::default()
    }
}

/// Builder for OpenRouterConfig.
#[derive(Debug, Default)]
pub struct OpenRouterConfigBuilder {
    config: OpenRouterConfig,
}

impl OpenRouterConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the system prompt.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = tokens;
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = temp;
        self
    }

    /// Set the max history messages.
    pub fn max_history_messages(mut self, messages: usize) -> Self {
        self.config.max_history_messages = messages;
        self
    }

    /// Set the HTTP-Referer attribution header.
    pub fn app_referer(mut self, referer: impl Into<String>) -> Self {
        self.config.app_referer = Some(referer.into());
        self
    }

    /// Set the X-Title attribution header.
    pub fn app_title(mut self, title: impl Into<String>) -> Self {
        self.config.app_title = title.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OpenRouterConfig {
        self.config
    }

    /// Load system prompt from a file.
    ///
    /// If the file exists and is non-empty, sets the system prompt.
    /// Returns self for chaining.
    pub fn load_prompt_file(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(prompt) = load_prompt_file(path) {
            self.config.system_prompt = Some(prompt);
        }
        self
    }
}

/// Load a prompt file, returning None if not found or empty.
fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => None,
    }
}
