use crate::{PitchRequest, Result};
use async_trait::async_trait;

/// Produces a pitch document for a filled-in pitch form.
///
/// Implementations may resolve immediately or after a network round trip;
/// callers must not assume either.
#[async_trait]
pub trait PitchGenerator: Send + Sync {
    async fn generate_pitch(&self, request: &PitchRequest) -> Result<String>;
}
