use crate::{BizPlanError, PitchField, PitchGenerator, PitchRequest, Result};
use tracing::{debug, error, info};

/// Pitch form state: the seven input fields, the last generated pitch and a
/// busy flag that blocks resubmission while a request is outstanding.
#[derive(Debug, Clone, Default)]
pub struct PitchGeneratorPage {
    form: PitchRequest,
    generated: Option<String>,
    busy: bool,
}

impl PitchGeneratorPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: PitchRequest) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn form(&self) -> &PitchRequest {
        &self.form
    }

    /// Overwrites one field. Values outside the suggested choices are kept.
    pub fn set_field(&mut self, field: PitchField, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() && !field.is_suggested(&value) {
            debug!(field = %field, value = %value, "Value is not one of the suggested choices");
        }
        self.form.set(field, value);
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn generated_pitch(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    /// Validates the form and marks the page busy. The result area is cleared
    /// so a failed request never leaves stale or partial text behind.
    pub fn begin_submit(&mut self) -> Result<PitchRequest> {
        if self.busy {
            return Err(BizPlanError::AlreadyGenerating);
        }
        if let Some(field) = self.form.first_missing() {
            return Err(BizPlanError::MissingField(field.to_string()));
        }

        self.busy = true;
        self.generated = None;
        Ok(self.form.clone())
    }

    /// Stores the outcome of a request started with [`begin_submit`](Self::begin_submit)
    /// and clears the busy flag whether it succeeded or not.
    pub fn finish_submit(&mut self, outcome: Result<String>) -> Result<()> {
        self.busy = false;
        match outcome {
            Ok(text) => {
                info!(chars = text.len(), "Pitch generated");
                self.generated = Some(text);
                Ok(())
            }
            Err(e) => {
                error!("Error generating pitch: {}", e);
                self.generated = None;
                Err(e)
            }
        }
    }

    pub async fn submit(&mut self, generator: &dyn PitchGenerator) -> Result<()> {
        let request = self.begin_submit()?;
        let outcome = generator.generate_pitch(&request).await;
        self.finish_submit(outcome)
    }

    /// Generated pitch as markdown for copying or downloading.
    pub fn export_markdown(&self) -> Option<String> {
        self.generated.clone()
    }
}
