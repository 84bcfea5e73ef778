use serde::Deserialize;

/// Absent or null fields are scored as empty text, never rejected.
#[derive(Debug, Deserialize)]
pub struct ScoreTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreLeadRequest {
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub messages: Option<Vec<String>>,
}
