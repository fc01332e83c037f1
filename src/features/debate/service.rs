use std::sync::Arc;

use tracing::{debug, info};

use crate::core::error::AppError;
use crate::features::debate::classifier::DebatabilityPolicy;
use crate::features::debate::dto::{DebateRequestDto, DebateResponseDto};
use crate::features::debate::extractor::KeyPointExtractor;
use crate::features::debate::synthesizer::{FACT_MARKER, synthesize_debate};
use crate::features::nlp::LanguageToolkit;

pub struct DebateService {
    toolkit: Arc<dyn LanguageToolkit>,
    policy: DebatabilityPolicy,
    default_max_points: usize,
}

impl DebateService {
    pub fn new(
        toolkit: Arc<dyn LanguageToolkit>,
        policy: DebatabilityPolicy,
        default_max_points: usize,
    ) -> Self {
        Self {
            toolkit,
            policy,
            default_max_points,
        }
    }

    pub fn run_debate(&self, request: DebateRequestDto) -> Result<DebateResponseDto, AppError> {
        if request.text.trim().is_empty() {
            return Err(AppError::bad_request("No text provided.".to_string()));
        }

        let max_points = self.resolve_max_points(request.max_points)?;
        let key_points = KeyPointExtractor::new(self.toolkit.as_ref(), &self.policy)
            .extract(&request.text, max_points);
        let debate = synthesize_debate(&key_points, &self.policy);

        let debatable = debate
            .iter()
            .filter(|entry| entry.pro != FACT_MARKER)
            .count();
        debug!(target: "debate", ?key_points, "extracted key points");
        info!(
            target: "debate",
            chars = request.text.len(),
            max_points,
            points = key_points.len(),
            debatable,
            "debate generated"
        );

        Ok(DebateResponseDto { key_points, debate })
    }

    fn resolve_max_points(&self, requested: Option<i64>) -> Result<usize, AppError> {
        match requested {
            None => Ok(self.default_max_points),
            Some(value) if value >= 1 => usize::try_from(value)
                .map_err(|err| AppError::bad_request(format!("invalid max_points: {err}"))),
            Some(value) => Err(AppError::bad_request(format!(
                "max_points must be at least 1, received {value}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::RuleBasedToolkit;

    fn service() -> DebateService {
        DebateService::new(
            Arc::new(RuleBasedToolkit::default()),
            DebatabilityPolicy::standard(),
            15,
        )
    }

    fn request(text: &str, max_points: Option<i64>) -> DebateRequestDto {
        DebateRequestDto {
            text: text.to_string(),
            max_points,
        }
    }

    #[test]
    fn rejects_blank_text() {
        let error = service()
            .run_debate(request(" \n\t", None))
            .expect_err("blank text should fail");
        match error {
            AppError::BadRequest(message) => assert_eq!(message, "No text provided."),
            other => panic!("expected bad request error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_positive_limits() {
        for max_points in [0, -3] {
            let error = service()
                .run_debate(request("Cities grow.", Some(max_points)))
                .expect_err("limit should fail");
            assert!(matches!(error, AppError::BadRequest(_)), "{error:?}");
        }
    }

    #[test]
    fn builds_entries_for_the_reference_passage() {
        let response = service()
            .run_debate(request("AI should replace doctors. The sky is blue.", None))
            .expect("debate");

        assert_eq!(response.key_points.len(), 2);
        assert_eq!(response.debate.len(), 2);
        assert!(response.key_points[0].contains("should"));
        assert_eq!(response.debate[0].point, response.key_points[0]);
        assert_eq!(
            response.debate[0].pro,
            format!(
                "Pro: The point '{}' has arguments in its favor.",
                response.key_points[0]
            )
        );
        assert_ne!(response.debate[0].con, FACT_MARKER);
    }

    #[test]
    fn applies_requested_limit() {
        let response = service()
            .run_debate(request(
                "Taxes should rise. Schools need more funding. Trade has a complex impact.",
                Some(2),
            ))
            .expect("debate");

        assert_eq!(response.key_points.len(), 2);
        assert_eq!(response.debate.len(), 2);
    }
}
