use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use tracing::{info, warn};

use crate::core::error::AppError;
use crate::features::generation::client::{FragmentStream, GenerationBackend};
use crate::features::generation::dto::GenerateDebateRequestDto;
use crate::features::generation::prompt::{DEFAULT_SIDE, build_debate_prompt};

pub const UPSTREAM_ERROR_PREFIX: &str = "Error connecting to Ollama:";

pub struct GenerationService {
    backend: Arc<dyn GenerationBackend>,
}

impl GenerationService {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Validates the request and returns the prompt to send upstream.
    pub fn prepare_prompt(&self, request: &GenerateDebateRequestDto) -> Result<String, AppError> {
        let article = request.article.trim();
        if article.is_empty() {
            return Err(AppError::bad_request("No article text provided".to_string()));
        }

        let side = request.side.as_deref().unwrap_or(DEFAULT_SIDE);
        Ok(build_debate_prompt(article, side))
    }

    /// Relays upstream fragments in arrival order. Any upstream failure ends
    /// the stream with a single error fragment.
    pub fn stream_debate(&self, prompt: String) -> BoxStream<'static, String> {
        let backend = self.backend.clone();
        info!(target: "generation", prompt_chars = prompt.len(), "starting debate stream");

        stream::once(async move { backend.generate(prompt).await })
            .flat_map(|opened| match opened {
                Ok(fragments) => relay_until_error(fragments),
                Err(error) => stream::iter([error_fragment(&error)]).boxed(),
            })
            .boxed()
    }
}

fn relay_until_error(fragments: FragmentStream) -> BoxStream<'static, String> {
    stream::unfold(Some(fragments), |state| async move {
        let mut fragments = state?;
        match fragments.next().await {
            Some(Ok(fragment)) => Some((fragment, Some(fragments))),
            Some(Err(error)) => Some((error_fragment(&error), None)),
            None => {
                info!(target: "generation", "debate stream finished");
                None
            }
        }
    })
    .boxed()
}

fn error_fragment(error: &AppError) -> String {
    warn!(target: "generation", %error, "generation backend unavailable");
    format!("{UPSTREAM_ERROR_PREFIX} {}", error.message())
}
