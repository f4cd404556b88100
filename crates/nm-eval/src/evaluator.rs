use nm_common::openai::{ChatCompletionRequest, OpenAiClient, OpenAiClientConfig};
use tracing::{debug, error};

use crate::error::AppError;
use crate::prompt;

/// Produces an evaluation for one notional machine.
///
/// Failures are handled inside the implementation and surface as `None`, so a run can skip
/// the document and move on to the next one.
#[allow(async_fn_in_trait)]
pub trait Evaluator {
    async fn evaluate(&self, nm_content: &str, criteria: &str, template: &str) -> Option<String>;
}

/// Evaluates through one chat completion request per document.
pub struct OpenAiEvaluator {
    client: OpenAiClient,
    model: String,
}

impl OpenAiEvaluator {
    pub fn new(client: OpenAiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Build the HTTP client and wrap it.
    pub fn from_config(
        config: OpenAiClientConfig,
        model: impl Into<String>,
    ) -> Result<Self, AppError> {
        Ok(Self::new(OpenAiClient::new(config)?, model))
    }

    fn request(&self, nm_content: &str, criteria: &str, template: &str) -> ChatCompletionRequest {
        let prompt = prompt::build_prompt(nm_content, criteria, template);
        ChatCompletionRequest::new(&self.model, prompt::build_messages(prompt))
    }
}

impl Evaluator for OpenAiEvaluator {
    async fn evaluate(&self, nm_content: &str, criteria: &str, template: &str) -> Option<String> {
        let request = self.request(nm_content, criteria, template);
        debug!(model = %self.model, "sending evaluation request");

        match self.client.complete_text(&request).await {
            Ok(text) => Some(text),
            Err(e) => {
                error!(model = %self.model, error = %e, "chat completion failed");
                None
            }
        }
    }
}
