use crate::llm_provider::LLMProvider;
use crate::openai_provider::{OpenAIConfig, OpenAIProvider};
use anyhow::Result;
use bizplan_core::LLMConfig;
use std::sync::Arc;

/// Factory for creating LLM providers based on configuration
pub struct LLMProviderFactory;

impl LLMProviderFactory {
    /// Create the completion provider, or `None` when no usable API key is
    /// configured and callers should stay offline.
    pub fn create_from_config(config: &LLMConfig) -> Result<Option<Arc<dyn LLMProvider>>> {
        let Some(openai_config) = OpenAIConfig::from_llm_config(config) else {
            tracing::info!("No usable OpenAI API key configured; using offline pitch template");
            return Ok(None);
        };

        let provider = OpenAIProvider::new(openai_config)?;
        Ok(Some(Arc::new(provider)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_means_no_provider() {
        let config = LLMConfig::default();
        assert!(LLMProviderFactory::create_from_config(&config)
            .unwrap()
            .is_none());
    }

    #[test]
    fn key_yields_openai_provider() {
        let config = LLMConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let provider = LLMProviderFactory::create_from_config(&config)
            .unwrap()
            .unwrap();
        assert_eq!(provider.provider_name(), "openai");
        assert_eq!(provider.model_name(), "gpt-3.5-turbo");
    }
}
