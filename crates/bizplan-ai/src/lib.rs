pub mod llm_factory;
pub mod llm_provider;
pub mod openai_provider;
pub mod pitch;

pub use llm_factory::LLMProviderFactory;
pub use llm_provider::*;
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
pub use pitch::{build_user_prompt, sample_pitch, PitchService, SYSTEM_PROMPT};
