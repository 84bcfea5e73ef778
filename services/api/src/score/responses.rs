use leadlight_scoring::ScoringResult;
use serde::Serialize;

/// The engine's wire-contract result plus a display summary line.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: ScoringResult,
    pub summary: String,
}

impl From<ScoringResult> for ScoreResponse {
    fn from(result: ScoringResult) -> Self {
        let summary = result.summary();
        Self { result, summary }
    }
}
