use crate::matcher::find_matches;
use crate::result::ScoringResult;
use crate::signals::{Signal, INTENT_SIGNALS};

/// Scores lead text against the intent signal catalog.
///
/// Pure and stateless beyond the immutable catalog reference; safe to call
/// concurrently from any number of threads without synchronization.
#[derive(Debug, Clone, Copy)]
pub struct LeadScorer {
    signals: &'static [Signal],
}

impl Default for LeadScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadScorer {
    /// Scorer over the built-in catalog.
    pub fn new() -> Self {
        Self {
            signals: INTENT_SIGNALS,
        }
    }

    /// Scorer over a custom catalog. The signal table must outlive the
    /// process; typically a `const` like the built-in one.
    pub fn with_signals(signals: &'static [Signal]) -> Self {
        Self { signals }
    }

    /// Run the full pipeline on one string. Empty text yields the zero
    /// result (score 0, tier cold, no matches), never an error.
    pub fn score_text(&self, text: &str) -> ScoringResult {
        ScoringResult::from_matches(find_matches(self.signals, text))
    }

    /// Score a lead from multiple text sources.
    ///
    /// Non-empty sources are concatenated notes, then bio, then each
    /// message, and scored as a single corpus, so a phrase appearing in
    /// several sources still counts once.
    pub fn score_lead(
        &self,
        notes: Option<&str>,
        bio: Option<&str>,
        messages: &[String],
    ) -> ScoringResult {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(notes) = notes.filter(|s| !s.is_empty()) {
            parts.push(notes);
        }
        if let Some(bio) = bio.filter(|s| !s.is_empty()) {
            parts.push(bio);
        }
        parts.extend(messages.iter().map(String::as_str).filter(|s| !s.is_empty()));

        self.score_text(&parts.join(" "))
    }
}

/// Score text against the built-in catalog and return just the total.
pub fn quick_score(text: &str) -> i32 {
    LeadScorer::new().score_text(text).total_score
}
