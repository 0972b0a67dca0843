use super::Generator;
use crate::prelude::*;
use autodocs_core::documenter::{has_usable_content, strip_fences, system_prompt, Provider};
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::{ollama, openai};
use std::time::Duration;

/// Connection settings for the hosted backends.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub ollama_url: String,
}

impl BackendConfig {
    pub const DEFAULT_OLLAMA_URL: &'static str = "http://localhost:11434";

    /// Load configuration from environment variables
    /// Uses OPENAI_API_KEY and OPENAI_BASE_URL for OpenAI models
    /// Uses OLLAMA_URL with default fallback for local models
    pub fn from_env() -> Self {
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            ollama_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| Self::DEFAULT_OLLAMA_URL.to_string()),
        }
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, ollama_url: Option<String>) -> Self {
        if let Some(url) = ollama_url {
            self.ollama_url = url;
        }
        self
    }
}

enum Client {
    OpenAi(openai::Client),
    Ollama(ollama::Client),
}

/// Documenter calling a hosted text generation model.
pub struct RemoteDocumenter {
    provider: Provider,
    model: String,
    preamble: String,
    client: Client,
    timeout: Duration,
    retries: u32,
}

impl std::fmt::Debug for RemoteDocumenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteDocumenter")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .finish()
    }
}

fn create_openai_client(config: &BackendConfig) -> std::result::Result<openai::Client, Error> {
    let api_key = config.openai_api_key.as_deref().ok_or_else(|| {
        Error::Configuration("OPENAI_API_KEY environment variable not set".to_string())
    })?;

    let builder = openai::Client::builder().api_key(api_key);
    let builder = match config.openai_base_url.as_deref() {
        Some(url) => builder.base_url(url),
        None => builder,
    };

    builder
        .build()
        .map_err(|e| Error::Configuration(f!("Failed to create OpenAI client: {}", e)))
}

fn create_ollama_client(ollama_url: &str) -> std::result::Result<ollama::Client, Error> {
    use rig::client::Nothing;

    ollama::Client::builder()
        .api_key(Nothing)
        .base_url(ollama_url)
        .build()
        .map_err(|e| Error::Configuration(f!("Failed to create Ollama client: {}", e)))
}

impl RemoteDocumenter {
    pub fn new(
        provider: Provider,
        model: String,
        extension: &str,
        config: &BackendConfig,
        timeout: Duration,
        retries: u32,
    ) -> std::result::Result<Self, Error> {
        let client = match provider {
            Provider::OpenAi => Client::OpenAi(create_openai_client(config)?),
            Provider::Ollama => Client::Ollama(create_ollama_client(&config.ollama_url)?),
        };

        Ok(Self {
            provider,
            model,
            preamble: system_prompt(extension),
            client,
            timeout,
            retries,
        })
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, content: &str) -> std::result::Result<String, String> {
        let response = match &self.client {
            Client::OpenAi(client) => {
                let agent = client.agent(&self.model).preamble(&self.preamble).build();
                agent.prompt(content.to_string()).await
            }
            Client::Ollama(client) => {
                let agent = client.agent(&self.model).preamble(&self.preamble).build();
                agent.prompt(content.to_string()).await
            }
        };

        response.map_err(|e| e.to_string())
    }
}

impl Generator for RemoteDocumenter {
    async fn generate(&self, content: &str) -> std::result::Result<String, Error> {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let failure = match tokio::time::timeout(self.timeout, self.complete(content)).await {
                Ok(Ok(response)) => return finish_response(&response),
                Ok(Err(e)) => f!("{} request failed: {}", self.provider, e),
                Err(_) => f!(
                    "{} request timed out after {}s",
                    self.provider,
                    self.timeout.as_secs()
                ),
            };

            if attempt > self.retries {
                return Err(Error::Generation(f!(
                    "{} (gave up after {} attempt(s))",
                    failure,
                    attempt
                )));
            }

            log::warn!(
                "{} (attempt {}/{}), retrying",
                failure,
                attempt,
                self.retries + 1
            );
        }
    }
}

/// Turn a raw completion into the text written back to disk.
fn finish_response(response: &str) -> std::result::Result<String, Error> {
    let content = strip_fences(response);

    if !has_usable_content(&content) {
        return Err(Error::Generation(
            "Model returned an empty response".to_string(),
        ));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> BackendConfig {
        BackendConfig {
            openai_api_key: api_key.map(str::to_string),
            openai_base_url: None,
            ollama_url: BackendConfig::DEFAULT_OLLAMA_URL.to_string(),
        }
    }

    #[test]
    fn test_finish_response_strips_fences() {
        let content = finish_response("```python\nx = 1\n```").unwrap();
        assert_eq!(content, "x = 1\n");
    }

    #[test]
    fn test_finish_response_keeps_plain_text() {
        let content = finish_response("x = 1\n").unwrap();
        assert_eq!(content, "x = 1\n");
    }

    #[test]
    fn test_finish_response_rejects_empty() {
        assert!(matches!(finish_response(""), Err(Error::Generation(_))));
        assert!(matches!(
            finish_response("```\n```"),
            Err(Error::Generation(_))
        ));
    }

    #[test]
    fn test_finish_response_rejects_lone_fence_line() {
        assert!(matches!(finish_response("```"), Err(Error::Generation(_))));
        assert!(matches!(
            finish_response("```python x = 1 ```"),
            Err(Error::Generation(_))
        ));
    }

    #[test]
    fn test_openai_requires_api_key() {
        let result = RemoteDocumenter::new(
            Provider::OpenAi,
            "gpt-4".to_string(),
            "py",
            &config(None),
            Duration::from_secs(100),
            3,
        );

        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_with_overrides() {
        let config = config(None).with_overrides(Some("http://gpu-box:11434".to_string()));
        assert_eq!(config.ollama_url, "http://gpu-box:11434");

        let config = config.with_overrides(None);
        assert_eq!(config.ollama_url, "http://gpu-box:11434");
    }

    #[tokio::test]
    async fn test_unreachable_backend_fails_after_retries() {
        let config = BackendConfig {
            openai_api_key: None,
            openai_base_url: None,
            // Nothing listens on the discard port.
            ollama_url: "http://127.0.0.1:9".to_string(),
        };
        let documenter = RemoteDocumenter::new(
            Provider::Ollama,
            "llama3".to_string(),
            "py",
            &config,
            Duration::from_secs(5),
            1,
        )
        .unwrap();

        let result = documenter.generate("x = 1\n").await;

        match result {
            Err(Error::Generation(message)) => assert!(message.contains("2 attempt(s)")),
            other => panic!("expected a generation error, got {:?}", other),
        }
    }
}
