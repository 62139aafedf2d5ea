//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::content::{generate_flyer_content, FlyerContent};
use crate::generation::normalizer::normalize_template;
use crate::generation::prompts::compose_template_prompt;
use crate::models::template::FlyerTemplate;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateTemplateRequest {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub title: String,
    pub description: String,
    pub target_audience: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/templates/generate
///
/// Full generation pipeline: compose prompt → provider call → brace-span
/// extraction → parse → default fill. Returns a complete `FlyerTemplate`;
/// any failure maps to a typed error response, never a partial record.
pub async fn handle_generate_template(
    State(state): State<AppState>,
    Json(request): Json<GenerateTemplateRequest>,
) -> Result<Json<FlyerTemplate>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let prompt = compose_template_prompt(&request.prompt);
    let raw = state.generator.generate(&prompt).await?;
    let template = normalize_template(&raw)?;

    info!(
        "Generated template: imageArea={}, colorTheme={}",
        template.image_area, template.color_theme
    );

    Ok(Json(template))
}

/// POST /api/v1/templates/content
///
/// Generates a flyer copy block. Falls back to truncations of the caller's
/// own inputs on provider or parse failure, so this endpoint only fails on
/// invalid input.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> Result<Json<FlyerContent>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let content = generate_flyer_content(
        state.generator.as_ref(),
        &request.title,
        &request.description,
        request.target_audience.as_deref(),
    )
    .await;

    Ok(Json(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::{DEFAULT_COLOR_THEME, DEFAULT_IMAGE_AREA};
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::config::Config;
    use crate::llm_client::TextGenerator;

    /// Stub provider that echoes a fixed response regardless of prompt.
    struct EchoGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, AppError> {
            Err(AppError::Provider("503 from provider".to_string()))
        }
    }

    fn test_state(generator: impl TextGenerator + 'static) -> AppState {
        AppState {
            generator: Arc::new(generator),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    const FULL_RESPONSE: &str = r##"{
        "imageArea": "right-half",
        "catchCopy": "週末限定タイムセール",
        "description": "お買い得商品を多数ご用意して、皆さまのご来店をお待ちしております",
        "storeInfo": {
            "name": "サンプル商店",
            "address": "東京都千代田区1-1",
            "hours": "10:00-19:00",
            "tel": "03-0000-0000",
            "access": "駅から徒歩5分"
        },
        "colorTheme": "#EC4899"
    }"##;

    #[tokio::test]
    async fn test_generate_round_trips_stubbed_provider_output() {
        let state = test_state(EchoGenerator(FULL_RESPONSE));
        let expected: FlyerTemplate = serde_json::from_str(FULL_RESPONSE).unwrap();

        let Json(template) = handle_generate_template(
            State(state),
            Json(GenerateTemplateRequest {
                prompt: "週末セールのチラシ".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(template, expected);
    }

    #[tokio::test]
    async fn test_generate_fills_defaults_for_sparse_provider_output() {
        let state = test_state(EchoGenerator("Sure! {\"catchCopy\":\"Grand Opening\"}"));

        let Json(template) = handle_generate_template(
            State(state),
            Json(GenerateTemplateRequest {
                prompt: "開店チラシ".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(template.catch_copy, "Grand Opening");
        assert_eq!(template.image_area, DEFAULT_IMAGE_AREA);
        assert_eq!(template.color_theme, DEFAULT_COLOR_THEME);
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_prompt() {
        let state = test_state(EchoGenerator(FULL_RESPONSE));

        let err = handle_generate_template(
            State(state),
            Json(GenerateTemplateRequest {
                prompt: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_generate_surfaces_provider_failure() {
        let state = test_state(FailingGenerator);

        let err = handle_generate_template(
            State(state),
            Json(GenerateTemplateRequest {
                prompt: "チラシ".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Provider(_)));
    }

    #[tokio::test]
    async fn test_generate_surfaces_format_error_for_braceless_output() {
        let state = test_state(EchoGenerator("生成できませんでした"));

        let err = handle_generate_template(
            State(state),
            Json(GenerateTemplateRequest {
                prompt: "チラシ".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::GenerationFormat));
    }

    #[tokio::test]
    async fn test_content_endpoint_rejects_empty_title() {
        let state = test_state(EchoGenerator("{}"));

        let err = handle_generate_content(
            State(state),
            Json(GenerateContentRequest {
                title: "".to_string(),
                description: "説明".to_string(),
                target_audience: None,
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_content_endpoint_succeeds_even_when_provider_fails() {
        let state = test_state(FailingGenerator);

        let Json(content) = handle_generate_content(
            State(state),
            Json(GenerateContentRequest {
                title: "開店セール".to_string(),
                description: "全品2割引".to_string(),
                target_audience: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(content.headline, "開店セール");
    }
}
