pub mod engine;
pub mod matcher;
pub mod result;
pub mod signals;

pub use engine::{quick_score, LeadScorer};
pub use matcher::SignalMatch;
pub use result::{ScoringResult, Tier};
pub use signals::{Signal, SignalCategory, INTENT_SIGNALS};
