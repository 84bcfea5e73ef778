use std::collections::BTreeMap;

use serde::Serialize;

use crate::matcher::SignalMatch;
use crate::signals::SignalCategory;

/// Lowest total score that lands in the hot tier.
pub const HOT_MIN: i32 = 150;
/// Lowest total score that lands in the warm tier.
pub const WARM_MIN: i32 = 75;
/// Lowest total score that lands in the lukewarm tier.
pub const LUKEWARM_MIN: i32 = 25;

/// Coarse priority label, a pure step function of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Hot,
    Warm,
    Lukewarm,
    Cold,
    Negative,
}

impl Tier {
    pub fn from_score(score: i32) -> Tier {
        if score < 0 {
            Tier::Negative
        } else if score >= HOT_MIN {
            Tier::Hot
        } else if score >= WARM_MIN {
            Tier::Warm
        } else if score >= LUKEWARM_MIN {
            Tier::Lukewarm
        } else {
            Tier::Cold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Hot => "hot",
            Tier::Warm => "warm",
            Tier::Lukewarm => "lukewarm",
            Tier::Cold => "cold",
            Tier::Negative => "negative",
        }
    }
}

/// Result of scoring one piece of lead text.
///
/// Serializes per the dashboard wire contract: `score`, `tier`, `matches`
/// (flat signal objects), `category_scores` keyed by external category
/// label. Category subtotals are sparse: only categories with at least one
/// match appear.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringResult {
    #[serde(rename = "score")]
    pub total_score: i32,
    pub tier: Tier,
    pub matches: Vec<SignalMatch>,
    pub category_scores: BTreeMap<SignalCategory, i32>,
    pub is_negative: bool,
}

impl ScoringResult {
    /// Aggregate matched weights into a total, sparse per-category
    /// subtotals, and the derived tier. Linear sum, no capping.
    pub fn from_matches(matches: Vec<SignalMatch>) -> Self {
        let total_score: i32 = matches.iter().map(|m| m.signal.weight).sum();

        let mut category_scores: BTreeMap<SignalCategory, i32> = BTreeMap::new();
        for m in &matches {
            *category_scores.entry(m.signal.category).or_insert(0) += m.signal.weight;
        }

        Self {
            total_score,
            tier: Tier::from_score(total_score),
            matches,
            category_scores,
            // Computed from the score directly, not derived from the tier
            is_negative: total_score < 0,
        }
    }

    /// The category with the highest positive subtotal, if any.
    pub fn primary_category(&self) -> Option<SignalCategory> {
        self.category_scores
            .iter()
            .filter(|(_, score)| **score > 0)
            .max_by_key(|(_, score)| **score)
            .map(|(category, _)| *category)
    }

    /// One-line summary: the top three matches by weight.
    pub fn summary(&self) -> String {
        if self.matches.is_empty() {
            return "No intent signals detected".to_owned();
        }

        let mut ranked: Vec<&SignalMatch> = self.matches.iter().collect();
        ranked.sort_by_key(|m| std::cmp::Reverse(m.signal.weight));

        ranked
            .iter()
            .take(3)
            .map(|m| format!("{:?} ({:+})", m.signal.phrase, m.signal.weight))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Multi-line breakdown of every matched signal and category subtotal.
    pub fn explain(&self) -> String {
        let mut lines = vec![
            format!(
                "Total Score: {} ({})",
                self.total_score,
                self.tier.as_str().to_uppercase()
            ),
            String::new(),
            "Matched Signals:".to_owned(),
        ];

        if self.matches.is_empty() {
            lines.push("  (none)".to_owned());
        } else {
            let mut ranked: Vec<&SignalMatch> = self.matches.iter().collect();
            ranked.sort_by_key(|m| std::cmp::Reverse(m.signal.weight));
            for m in ranked {
                lines.push(format!(
                    "  {:+}: {:?} [{}]",
                    m.signal.weight,
                    m.signal.phrase,
                    m.signal.category.as_str()
                ));
            }
        }

        if !self.category_scores.is_empty() {
            lines.push(String::new());
            lines.push("Category Breakdown:".to_owned());
            let mut ranked: Vec<(&SignalCategory, &i32)> = self.category_scores.iter().collect();
            ranked.sort_by_key(|(_, score)| std::cmp::Reverse(**score));
            for (category, score) in ranked {
                lines.push(format!("  {}: {:+}", category.as_str(), score));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::Signal;

    fn m(phrase: &'static str, weight: i32, category: SignalCategory) -> SignalMatch {
        SignalMatch {
            signal: Signal {
                phrase,
                weight,
                category,
            },
        }
    }

    #[test]
    fn tier_band_boundaries() {
        assert_eq!(Tier::from_score(200), Tier::Hot);
        assert_eq!(Tier::from_score(150), Tier::Hot);
        assert_eq!(Tier::from_score(100), Tier::Warm);
        assert_eq!(Tier::from_score(75), Tier::Warm);
        assert_eq!(Tier::from_score(50), Tier::Lukewarm);
        assert_eq!(Tier::from_score(25), Tier::Lukewarm);
        assert_eq!(Tier::from_score(10), Tier::Cold);
        assert_eq!(Tier::from_score(0), Tier::Cold);
        assert_eq!(Tier::from_score(-50), Tier::Negative);
    }

    #[test]
    fn is_negative_tracks_score_sign() {
        assert!(ScoringResult::from_matches(vec![m(
            "unsubscribe",
            -100,
            SignalCategory::Negative
        )])
        .is_negative);
        assert!(!ScoringResult::from_matches(vec![]).is_negative);
        assert!(
            !ScoringResult::from_matches(vec![m("powell", 30, SignalCategory::Location)])
                .is_negative
        );
    }

    #[test]
    fn total_is_sum_of_matched_weights() {
        let result = ScoringResult::from_matches(vec![
            m("preapproved", 90, SignalCategory::BuyerActive),
            m("powell", 30, SignalCategory::Location),
            m("unsubscribe", -100, SignalCategory::Negative),
        ]);
        assert_eq!(result.total_score, 20);
        assert_eq!(result.tier, Tier::Cold);
    }

    #[test]
    fn category_scores_are_sparse() {
        let result = ScoringResult::from_matches(vec![
            m("powell", 30, SignalCategory::Location),
            m("dublin", 30, SignalCategory::Location),
        ]);
        assert_eq!(result.category_scores.len(), 1);
        assert_eq!(result.category_scores[&SignalCategory::Location], 60);
        assert!(!result
            .category_scores
            .contains_key(&SignalCategory::BuyerActive));
    }

    #[test]
    fn primary_category_ignores_negative_subtotals() {
        let result = ScoringResult::from_matches(vec![
            m("powell", 30, SignalCategory::Location),
            m("preapproved", 90, SignalCategory::BuyerActive),
            m("unsubscribe", -100, SignalCategory::Negative),
        ]);
        assert_eq!(result.primary_category(), Some(SignalCategory::BuyerActive));

        let all_negative =
            ScoringResult::from_matches(vec![m("unsubscribe", -100, SignalCategory::Negative)]);
        assert_eq!(all_negative.primary_category(), None);
    }

    #[test]
    fn summary_ranks_top_matches_by_weight() {
        let result = ScoringResult::from_matches(vec![
            m("powell", 30, SignalCategory::Location),
            m("preapproved", 90, SignalCategory::BuyerActive),
            m("lease is up", 75, SignalCategory::Timeline),
            m("ohio", 10, SignalCategory::Location),
        ]);
        let summary = result.summary();
        assert!(summary.starts_with("\"preapproved\" (+90)"), "{summary}");
        assert!(!summary.contains("ohio"), "{summary}");

        assert_eq!(
            ScoringResult::from_matches(vec![]).summary(),
            "No intent signals detected"
        );
    }

    #[test]
    fn explain_lists_signals_and_categories() {
        let result = ScoringResult::from_matches(vec![
            m("preapproved", 90, SignalCategory::BuyerActive),
            m("unsubscribe", -100, SignalCategory::Negative),
        ]);
        let text = result.explain();
        assert!(text.contains("Total Score: -10 (NEGATIVE)"), "{text}");
        assert!(text.contains("+90: \"preapproved\" [buyer_active]"), "{text}");
        assert!(text.contains("-100: \"unsubscribe\" [negative]"), "{text}");
        assert!(text.contains("negative: -100"), "{text}");
    }

    #[test]
    fn result_serializes_per_wire_contract() {
        let result = ScoringResult::from_matches(vec![
            m("preapproved", 90, SignalCategory::BuyerActive),
            m("powell", 30, SignalCategory::Location),
        ]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 120);
        assert_eq!(json["tier"], "warm");
        assert_eq!(json["is_negative"], false);
        assert_eq!(json["matches"][0]["phrase"], "preapproved");
        assert_eq!(json["matches"][0]["weight"], 90);
        assert_eq!(json["matches"][0]["category"], "buyer_active");
        assert_eq!(json["category_scores"]["buyer_active"], 90);
        assert_eq!(json["category_scores"]["location"], 30);
    }
}
