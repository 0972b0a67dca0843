//! Documenter selection
//!
//! Maps the `--documenter` string onto the backend that serves it.

use serde::{Deserialize, Serialize};

/// Model used when the legacy `ChatGPT` name is given.
pub const CHATGPT_DEFAULT_MODEL: &str = "gpt-4";

/// Reserved names selecting the offline stub.
pub const MOCK_SELECTORS: &[&str] = &["mock", "mockdocumenter"];

/// Model family tokens served through the OpenAI API.
pub const OPENAI_FAMILIES: &[&str] = &["gpt"];

/// Model family tokens served through a local Ollama instance.
pub const OLLAMA_FAMILIES: &[&str] = &[
    "llama", "qwen", "mistral", "codellama", "deepseek", "gemma", "phi",
];

/// Hosted text generation service behind a remote documenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Ollama,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::OpenAi => write!(f, "OpenAI"),
            Provider::Ollama => write!(f, "Ollama"),
        }
    }
}

/// Which documenter a selector string resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumenterKind {
    Remote { provider: Provider, model: String },
    Mock,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Unknown documenter '{0}'. Use a gpt or Ollama model name (e.g. gpt-4, llama3), or 'mock'")]
    Unknown(String),
}

/// Resolve a documenter selector.
///
/// Matching is case insensitive. The debug names select the stub, a name
/// containing a known model family token selects the matching provider
/// with the given string as the model, anything else is rejected.
pub fn parse_selector(selector: &str) -> Result<DocumenterKind, SelectorError> {
    let model = selector.trim();
    let lowered = model.to_ascii_lowercase();

    if MOCK_SELECTORS.contains(&lowered.as_str()) {
        return Ok(DocumenterKind::Mock);
    }

    if lowered == "chatgpt" {
        return Ok(DocumenterKind::Remote {
            provider: Provider::OpenAi,
            model: CHATGPT_DEFAULT_MODEL.to_string(),
        });
    }

    let provider = if OPENAI_FAMILIES.iter().any(|t| lowered.contains(t)) {
        Provider::OpenAi
    } else if OLLAMA_FAMILIES.iter().any(|t| lowered.contains(t)) {
        Provider::Ollama
    } else {
        return Err(SelectorError::Unknown(selector.to_string()));
    };

    Ok(DocumenterKind::Remote {
        provider,
        model: model.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(provider: Provider, model: &str) -> DocumenterKind {
        DocumenterKind::Remote {
            provider,
            model: model.to_string(),
        }
    }

    #[test]
    fn test_gpt_models_select_openai() {
        assert_eq!(parse_selector("gpt-4").unwrap(), remote(Provider::OpenAi, "gpt-4"));
        assert_eq!(
            parse_selector("gpt-3.5-turbo-1106").unwrap(),
            remote(Provider::OpenAi, "gpt-3.5-turbo-1106")
        );
        assert_eq!(
            parse_selector(" GPT-4o ").unwrap(),
            remote(Provider::OpenAi, "GPT-4o")
        );
    }

    #[test]
    fn test_chatgpt_alias() {
        assert_eq!(
            parse_selector("ChatGPT").unwrap(),
            remote(Provider::OpenAi, CHATGPT_DEFAULT_MODEL)
        );
    }

    #[test]
    fn test_local_models_select_ollama() {
        assert_eq!(
            parse_selector("llama3.1:8b").unwrap(),
            remote(Provider::Ollama, "llama3.1:8b")
        );
        assert_eq!(
            parse_selector("qwen2.5-coder").unwrap(),
            remote(Provider::Ollama, "qwen2.5-coder")
        );
    }

    #[test]
    fn test_mock_selectors() {
        assert_eq!(parse_selector("mock").unwrap(), DocumenterKind::Mock);
        assert_eq!(parse_selector("MockDocumenter").unwrap(), DocumenterKind::Mock);
    }

    #[test]
    fn test_unknown_selector() {
        assert_eq!(
            parse_selector("bard"),
            Err(SelectorError::Unknown("bard".to_string()))
        );
        assert!(parse_selector("").is_err());
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(Provider::OpenAi.to_string(), "OpenAI");
        assert_eq!(Provider::Ollama.to_string(), "Ollama");
    }
}
