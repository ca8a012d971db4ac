//! Pitch generation: a completion request when a provider is configured,
//! otherwise a fixed markdown template filled from the form.

use crate::llm_factory::LLMProviderFactory;
use crate::llm_provider::{GenerationConfig, LLMProvider, Message};
use async_trait::async_trait;
use bizplan_core::{BizPlanError, LLMConfig, PitchGenerator, PitchRequest, Result};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const SYSTEM_PROMPT: &str = "You are a professional business consultant and pitch writer. \
Create compelling, well-structured project pitches.";

const PITCH_OUTLINE: [&str; 10] = [
    "Executive Summary",
    "Problem Statement",
    "Solution Overview",
    "Market Opportunity",
    "Business Model",
    "Implementation Plan",
    "Financial Projections",
    "Team Requirements",
    "Risk Assessment",
    "Call to Action",
];

/// User message sent to the completion API.
pub fn build_user_prompt(request: &PitchRequest) -> String {
    let outline = PITCH_OUTLINE
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}. {}", i + 1, section))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Create a compelling project pitch for the following project:\n\n\
         Project Name: {}\n\
         Industry: {}\n\
         Problem: {}\n\
         Solution: {}\n\
         Target Audience: {}\n\
         Budget: {}\n\
         Timeline: {}\n\n\
         Please create a professional, persuasive pitch that includes:\n\
         {}\n\n\
         Make it engaging and suitable for investors or stakeholders.",
        request.project_name,
        request.industry,
        request.problem,
        request.solution,
        request.target,
        request.budget,
        request.timeline,
        outline
    )
}

/// Deterministic pitch used when no API key is configured.
pub fn sample_pitch(request: &PitchRequest) -> String {
    format!(
        "# {} - Project Pitch\n\n\
         ## Problem Statement\n{}\n\n\
         ## Solution Overview\n{}\n\n\
         ## Target Market\n{}\n\n\
         ## Project Timeline\n{}\n\n\
         ## Budget Requirements\n{}\n\n\
         ## Why This Matters\n\
         This project addresses a critical need in the {} industry and has the potential to make a significant impact.\n\n\
         ## Next Steps\n\
         1. Secure funding and resources\n\
         2. Assemble the development team\n\
         3. Begin implementation phase\n\
         4. Launch and iterate based on feedback\n\n\
         *Note: This is a sample pitch. Connect your OpenAI API key to generate AI-powered pitches.*",
        request.project_name,
        request.problem,
        request.solution,
        request.target,
        request.timeline,
        request.budget,
        request.industry
    )
}

/// Generates pitches through an optional completion provider.
#[derive(Clone)]
pub struct PitchService {
    provider: Option<Arc<dyn LLMProvider>>,
    generation: GenerationConfig,
}

impl PitchService {
    /// Service that never touches the network.
    pub fn offline() -> Self {
        Self {
            provider: None,
            generation: GenerationConfig::default(),
        }
    }

    pub fn with_provider(provider: Arc<dyn LLMProvider>) -> Self {
        Self {
            provider: Some(provider),
            generation: GenerationConfig::default(),
        }
    }

    pub fn from_config(config: &LLMConfig) -> anyhow::Result<Self> {
        let provider = LLMProviderFactory::create_from_config(config)?;
        Ok(Self {
            provider,
            generation: GenerationConfig {
                temperature: config.temperature,
                max_tokens: Some(config.max_tokens),
            },
        })
    }

    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn generate_pitch(&self, request: &PitchRequest) -> Result<String> {
        let Some(provider) = &self.provider else {
            return Ok(sample_pitch(request));
        };

        info!(
            provider = provider.provider_name(),
            model = provider.model_name(),
            project = %request.project_name,
            "Requesting pitch"
        );

        let messages = [
            Message::system(SYSTEM_PROMPT),
            Message::user(build_user_prompt(request)),
        ];

        match provider.generate_chat(&messages, &self.generation).await {
            Ok(response) => {
                info!(
                    model = %response.model,
                    total_tokens = ?response.total_tokens,
                    finish_reason = ?response.finish_reason,
                    "Pitch received"
                );
                if response.is_truncated() {
                    warn!("Pitch was cut off at the token limit");
                }
                Ok(response.content)
            }
            Err(e) => {
                error!("Error generating pitch: {:#}", e);
                Err(BizPlanError::PitchGeneration)
            }
        }
    }
}

#[async_trait]
impl PitchGenerator for PitchService {
    async fn generate_pitch(&self, request: &PitchRequest) -> Result<String> {
        PitchService::generate_pitch(self, request).await
    }
}
