//! Axum route handlers for the Lead Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::parser::{parse_analysis, LeadAnalysis};
use crate::analysis::prompts::LEAD_ANALYZE_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeLeadRequest {
    pub lead_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeLeadResponse {
    pub analysis: LeadAnalysis,
    /// Raw model text, so the page can show it when nothing was extracted.
    pub raw: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/leads/analyze
///
/// Embeds the lead in the fixed instruction prompt, relays it to the model,
/// and returns the parsed judgment alongside the raw model text.
pub async fn handle_analyze_lead(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeLeadRequest>,
) -> Result<Json<AnalyzeLeadResponse>, AppError> {
    if request.lead_text.trim().is_empty() {
        return Err(AppError::Validation(
            "lead_text cannot be empty".to_string(),
        ));
    }

    let prompt = LEAD_ANALYZE_PROMPT_TEMPLATE.replace("{lead_text}", &request.lead_text);

    let response = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("lead analysis failed: {e}")))?;

    // An absent candidate/content/part path degrades to an empty JSON
    // object, which parses to a judgment with every field absent.
    let raw = response.text().unwrap_or("{}").to_string();
    let analysis = parse_analysis(&raw);

    if analysis.is_empty() {
        debug!("no fields extracted from model output; page will fall back to raw text");
    }

    Ok(Json(AnalyzeLeadResponse { analysis, raw }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::GeminiClient;

    #[tokio::test]
    async fn test_empty_lead_is_rejected_before_any_call() {
        let state = AppState {
            llm: GeminiClient::new("test-key".to_string()),
        };
        let request = AnalyzeLeadRequest {
            lead_text: "   \n  ".to_string(),
        };

        let result = handle_analyze_lead(State(state), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
