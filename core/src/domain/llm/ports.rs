use crate::domain::common::entities::app_errors::CoreError;

/// LLM Client trait for calling generative text models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends a single prompt and returns the raw text of the first candidate.
    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
