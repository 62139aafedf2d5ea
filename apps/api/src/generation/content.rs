//! Flyer copy generation — produces a headline/body copy block for a flyer
//! from a title, description, and optional target audience.
//!
//! Unlike template generation, this operation never surfaces a generation
//! error: any provider or parse failure falls back to character-bounded
//! truncations of the caller's own inputs.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::generation::normalizer::extract_json_span;
use crate::generation::prompts::compose_content_prompt;
use crate::llm_client::TextGenerator;

const FALLBACK_CALL_TO_ACTION: &str = "詳細はこちら";

const HEADLINE_MAX_CHARS: usize = 20;
const SUBHEADLINE_MAX_CHARS: usize = 30;
const BODY_MAX_CHARS: usize = 100;

/// A generated copy block for a flyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyerContent {
    pub headline: String,
    pub subheadline: String,
    pub body_text: String,
    pub call_to_action: String,
}

/// Generates flyer copy, falling back to truncated inputs on any failure.
pub async fn generate_flyer_content(
    generator: &dyn TextGenerator,
    title: &str,
    description: &str,
    target_audience: Option<&str>,
) -> FlyerContent {
    let prompt = compose_content_prompt(title, description, target_audience);

    let raw = match generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Flyer copy generation failed, using fallback: {e}");
            return fallback_content(title, description);
        }
    };

    match parse_content(&raw) {
        Some(content) => content,
        None => {
            warn!("Flyer copy response was not valid JSON, using fallback");
            fallback_content(title, description)
        }
    }
}

fn parse_content(raw: &str) -> Option<FlyerContent> {
    let span = extract_json_span(raw)?;
    serde_json::from_str(span).ok()
}

fn fallback_content(title: &str, description: &str) -> FlyerContent {
    FlyerContent {
        headline: truncate_chars(title, HEADLINE_MAX_CHARS),
        subheadline: truncate_chars(description, SUBHEADLINE_MAX_CHARS),
        body_text: truncate_chars(description, BODY_MAX_CHARS),
        call_to_action: FALLBACK_CALL_TO_ACTION.to_string(),
    }
}

// Char-based, not byte-based: titles and descriptions are routinely Japanese.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use async_trait::async_trait;

    struct FixedGenerator(String);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            Err(AppError::Provider("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_valid_response_is_parsed() {
        let generator = FixedGenerator(
            r#"以下が生成結果です：
            {"headline": "夏祭り開催", "subheadline": "今週末です", "bodyText": "ご家族でどうぞ", "callToAction": "今すぐ来場"}"#
                .to_string(),
        );

        let content = generate_flyer_content(&generator, "夏祭り", "地域のお祭り", None).await;
        assert_eq!(content.headline, "夏祭り開催");
        assert_eq!(content.call_to_action, "今すぐ来場");
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_to_truncated_inputs() {
        let title = "あ".repeat(25);
        let description = "い".repeat(120);

        let content =
            generate_flyer_content(&FailingGenerator, &title, &description, Some("学生")).await;

        assert_eq!(content.headline.chars().count(), HEADLINE_MAX_CHARS);
        assert_eq!(content.subheadline.chars().count(), SUBHEADLINE_MAX_CHARS);
        assert_eq!(content.body_text.chars().count(), BODY_MAX_CHARS);
        assert_eq!(content.call_to_action, FALLBACK_CALL_TO_ACTION);
    }

    #[tokio::test]
    async fn test_unparsable_response_falls_back() {
        let generator = FixedGenerator("ここにはJSONがありません".to_string());

        let content = generate_flyer_content(&generator, "開店セール", "全品2割引", None).await;
        assert_eq!(content.headline, "開店セール");
        assert_eq!(content.body_text, "全品2割引");
        assert_eq!(content.call_to_action, FALLBACK_CALL_TO_ACTION);
    }

    #[tokio::test]
    async fn test_incomplete_json_shape_falls_back() {
        // Parses as JSON but is missing required copy fields
        let generator = FixedGenerator(r#"{"headline": "見出しのみ"}"#.to_string());

        let content = generate_flyer_content(&generator, "タイトル", "説明", None).await;
        assert_eq!(content.headline, "タイトル");
        assert_eq!(content.call_to_action, FALLBACK_CALL_TO_ACTION);
    }

    #[test]
    fn test_truncate_chars_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("こんにちは", 3), "こんに");
        assert_eq!(truncate_chars("short", 100), "short");
    }
}
