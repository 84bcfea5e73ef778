use std::collections::HashSet;

use serde::Serialize;

use crate::signals::Signal;

/// A signal detected in a scored text. At most one per distinct phrase per
/// call; serializes as the flat `{phrase, weight, category}` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignalMatch {
    pub signal: Signal,
}

/// Find every catalog phrase contained in `text`, case-insensitively.
///
/// The input is lowercased once, then each phrase is tested for substring
/// containment. A phrase contributes at most one match no matter how often
/// it recurs; match order follows catalog order. Overlapping and
/// sub-phrase entries match independently.
pub fn find_matches(signals: &'static [Signal], text: &str) -> Vec<SignalMatch> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matches = Vec::new();

    for signal in signals {
        if lowered.contains(signal.phrase) && seen.insert(signal.phrase) {
            matches.push(SignalMatch { signal: *signal });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{SignalCategory, INTENT_SIGNALS};

    const TINY: &[Signal] = &[
        Signal {
            phrase: "buyer",
            weight: 10,
            category: SignalCategory::BuyerActive,
        },
        Signal {
            phrase: "first time buyer",
            weight: 80,
            category: SignalCategory::BuyerActive,
        },
        Signal {
            phrase: "powell",
            weight: 30,
            category: SignalCategory::Location,
        },
    ];

    #[test]
    fn empty_text_matches_nothing() {
        assert!(find_matches(INTENT_SIGNALS, "").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let upper = find_matches(TINY, "FIRST TIME BUYER IN POWELL");
        let lower = find_matches(TINY, "first time buyer in powell");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 3);
    }

    #[test]
    fn repeated_phrase_matches_once() {
        let matches = find_matches(TINY, "powell powell powell");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].signal.phrase, "powell");
    }

    #[test]
    fn sub_phrases_match_independently() {
        // "buyer" is contained in "first time buyer"; both are catalog
        // entries, both match.
        let matches = find_matches(TINY, "first time buyer");
        let phrases: Vec<&str> = matches.iter().map(|m| m.signal.phrase).collect();
        assert_eq!(phrases, vec!["buyer", "first time buyer"]);
    }

    #[test]
    fn match_order_follows_catalog_order() {
        let matches = find_matches(TINY, "powell is where this first time buyer looks");
        let phrases: Vec<&str> = matches.iter().map(|m| m.signal.phrase).collect();
        assert_eq!(phrases, vec!["buyer", "first time buyer", "powell"]);
    }

    #[test]
    fn match_serializes_flat() {
        let matches = find_matches(TINY, "powell");
        let json = serde_json::to_value(&matches[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "phrase": "powell",
                "weight": 30,
                "category": "location",
            })
        );
    }
}
