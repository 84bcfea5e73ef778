use axum::extract::State;
use axum::Json;

use crate::score::requests::{ScoreLeadRequest, ScoreTextRequest};
use crate::score::responses::ScoreResponse;
use crate::AppState;

pub async fn score_text(
    State(state): State<AppState>,
    Json(req): Json<ScoreTextRequest>,
) -> Json<ScoreResponse> {
    let result = state.scorer.score_text(req.text.as_deref().unwrap_or(""));

    tracing::debug!(
        score = result.total_score,
        tier = result.tier.as_str(),
        matches = result.matches.len(),
        "scored text"
    );

    Json(result.into())
}

pub async fn score_lead(
    State(state): State<AppState>,
    Json(req): Json<ScoreLeadRequest>,
) -> Json<ScoreResponse> {
    let messages = req.messages.unwrap_or_default();
    let result = state
        .scorer
        .score_lead(req.notes.as_deref(), req.bio.as_deref(), &messages);

    tracing::debug!(
        score = result.total_score,
        tier = result.tier.as_str(),
        sources = 2 + messages.len(),
        "scored lead"
    );

    Json(result.into())
}
