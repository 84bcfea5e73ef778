//! Intent signal catalog, tuned for Central Ohio real estate.
//!
//! Pure data: every recognized phrase with its point weight and category.
//! Extend the table below to cover additional phrases or markets; the
//! matcher and aggregator never need to change.

use serde::{Deserialize, Serialize};

/// Categories of buying/selling intent signals. Closed set; serializes to
/// its external snake_case label, never a numeric id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    /// Actively searching
    BuyerActive,
    /// Considering buying
    BuyerPassive,
    /// Ready to sell
    SellerActive,
    /// Considering selling
    SellerPassive,
    /// Investment interest
    Investor,
    /// Urgency indicators
    Timeline,
    /// Central Ohio specific
    Location,
    /// Major life changes
    LifeEvent,
    /// Financial readiness
    Financial,
    /// Competitor/agent signals
    Negative,
}

impl SignalCategory {
    pub const ALL: &'static [SignalCategory] = &[
        SignalCategory::BuyerActive,
        SignalCategory::BuyerPassive,
        SignalCategory::SellerActive,
        SignalCategory::SellerPassive,
        SignalCategory::Investor,
        SignalCategory::Timeline,
        SignalCategory::Location,
        SignalCategory::LifeEvent,
        SignalCategory::Financial,
        SignalCategory::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalCategory::BuyerActive => "buyer_active",
            SignalCategory::BuyerPassive => "buyer_passive",
            SignalCategory::SellerActive => "seller_active",
            SignalCategory::SellerPassive => "seller_passive",
            SignalCategory::Investor => "investor",
            SignalCategory::Timeline => "timeline",
            SignalCategory::Location => "location",
            SignalCategory::LifeEvent => "life_event",
            SignalCategory::Financial => "financial",
            SignalCategory::Negative => "negative",
        }
    }

    /// Parse an external label back into a category.
    pub fn parse(label: &str) -> Option<SignalCategory> {
        SignalCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == label)
    }
}

/// A single intent signal: a lowercase literal phrase with a signed point
/// weight. Positive weight = affirmative buyer/seller intent, negative =
/// disqualifying (competitor self-identification, opt-out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signal {
    pub phrase: &'static str,
    pub weight: i32,
    pub category: SignalCategory,
}

impl Signal {
    const fn new(phrase: &'static str, weight: i32, category: SignalCategory) -> Self {
        Self {
            phrase,
            weight,
            category,
        }
    }
}

use SignalCategory::*;

/// The built-in catalog. Immutable, shared for the process lifetime.
/// Phrases must be lowercase; the matcher lowercases input, not the table.
pub const INTENT_SIGNALS: &[Signal] = &[
    // buyer, active (high intent)
    Signal::new("first time homebuyer", 80, BuyerActive),
    Signal::new("first time home buyer", 80, BuyerActive),
    Signal::new("looking for a house", 75, BuyerActive),
    Signal::new("looking for a home", 75, BuyerActive),
    Signal::new("house hunting", 85, BuyerActive),
    Signal::new("home hunting", 85, BuyerActive),
    Signal::new("searching for a home", 80, BuyerActive),
    Signal::new("ready to buy", 90, BuyerActive),
    Signal::new("want to buy a house", 75, BuyerActive),
    Signal::new("want to buy a home", 75, BuyerActive),
    Signal::new("need a realtor", 85, BuyerActive),
    Signal::new("need an agent", 85, BuyerActive),
    Signal::new("looking for a realtor", 85, BuyerActive),
    Signal::new("preapproved", 90, BuyerActive),
    Signal::new("pre-approved", 90, BuyerActive),
    Signal::new("got preapproval", 90, BuyerActive),
    Signal::new("mortgage approved", 95, BuyerActive),
    // buyer, passive (considering)
    Signal::new("thinking about buying", 50, BuyerPassive),
    Signal::new("considering buying", 50, BuyerPassive),
    Signal::new("might buy", 40, BuyerPassive),
    Signal::new("saving for a house", 45, BuyerPassive),
    Signal::new("saving for a home", 45, BuyerPassive),
    Signal::new("down payment", 55, BuyerPassive),
    Signal::new("how much house can i afford", 60, BuyerPassive),
    Signal::new("what can i afford", 55, BuyerPassive),
    // seller, active (high intent)
    Signal::new("listing my house", 90, SellerActive),
    Signal::new("listing my home", 90, SellerActive),
    Signal::new("selling my house", 85, SellerActive),
    Signal::new("selling my home", 85, SellerActive),
    Signal::new("ready to sell", 90, SellerActive),
    Signal::new("need to sell", 85, SellerActive),
    Signal::new("time to sell", 80, SellerActive),
    Signal::new("putting house on market", 95, SellerActive),
    Signal::new("what is my home worth", 70, SellerActive),
    Signal::new("what's my home worth", 70, SellerActive),
    Signal::new("home value", 50, SellerActive),
    // seller, passive (considering)
    Signal::new("thinking about selling", 55, SellerPassive),
    Signal::new("considering selling", 55, SellerPassive),
    Signal::new("might sell", 40, SellerPassive),
    Signal::new("should i sell", 50, SellerPassive),
    Signal::new("good time to sell", 45, SellerPassive),
    // investor
    Signal::new("investment property", 70, Investor),
    Signal::new("rental property", 65, Investor),
    Signal::new("looking to invest", 60, Investor),
    Signal::new("real estate investing", 55, Investor),
    Signal::new("flip", 50, Investor),
    Signal::new("fixer upper", 55, Investor),
    Signal::new("cash flow", 60, Investor),
    Signal::new("passive income", 45, Investor),
    // timeline (urgency)
    Signal::new("asap", 70, Timeline),
    Signal::new("as soon as possible", 70, Timeline),
    Signal::new("this month", 65, Timeline),
    Signal::new("next month", 55, Timeline),
    Signal::new("this year", 35, Timeline),
    Signal::new("by spring", 50, Timeline),
    Signal::new("by summer", 50, Timeline),
    Signal::new("before school", 60, Timeline),
    Signal::new("before school starts", 65, Timeline),
    Signal::new("lease is up", 75, Timeline),
    Signal::new("lease ends", 75, Timeline),
    Signal::new("lease ending", 75, Timeline),
    // location, Central Ohio
    Signal::new("columbus", 25, Location),
    Signal::new("powell", 30, Location),
    Signal::new("dublin", 30, Location),
    Signal::new("westerville", 30, Location),
    Signal::new("new albany", 30, Location),
    Signal::new("hilliard", 30, Location),
    Signal::new("grove city", 30, Location),
    Signal::new("gahanna", 30, Location),
    Signal::new("reynoldsburg", 30, Location),
    Signal::new("pickerington", 30, Location),
    Signal::new("delaware", 25, Location),
    Signal::new("lewis center", 30, Location),
    Signal::new("worthington", 30, Location),
    Signal::new("upper arlington", 30, Location),
    Signal::new("bexley", 30, Location),
    Signal::new("grandview", 30, Location),
    Signal::new("german village", 30, Location),
    Signal::new("short north", 30, Location),
    Signal::new("clintonville", 30, Location),
    Signal::new("olde towne east", 25, Location),
    Signal::new("italian village", 25, Location),
    Signal::new("franklinton", 25, Location),
    Signal::new("central ohio", 20, Location),
    Signal::new("franklin county", 20, Location),
    Signal::new("ohio", 10, Location),
    // life events
    Signal::new("getting married", 60, LifeEvent),
    Signal::new("engaged", 55, LifeEvent),
    Signal::new("having a baby", 65, LifeEvent),
    Signal::new("pregnant", 60, LifeEvent),
    Signal::new("expecting", 55, LifeEvent),
    Signal::new("new job", 50, LifeEvent),
    Signal::new("relocating", 70, LifeEvent),
    Signal::new("moving to", 65, LifeEvent),
    Signal::new("transferred", 70, LifeEvent),
    Signal::new("retiring", 55, LifeEvent),
    Signal::new("downsizing", 60, LifeEvent),
    Signal::new("need more space", 65, LifeEvent),
    Signal::new("outgrown", 60, LifeEvent),
    Signal::new("divorce", 50, LifeEvent),
    Signal::new("empty nester", 55, LifeEvent),
    Signal::new("kids moving out", 50, LifeEvent),
    // financial readiness
    Signal::new("just sold", 75, Financial),
    Signal::new("inheritance", 50, Financial),
    Signal::new("bonus", 40, Financial),
    Signal::new("got a raise", 35, Financial),
    Signal::new("pay off", 30, Financial),
    Signal::new("good credit", 45, Financial),
    Signal::new("credit score", 40, Financial),
    // negative: competitors, agents, opt-outs. Phrases stay anchored
    // ("as a realtor", not "realtor") so buyer phrases like "need a
    // realtor" are not poisoned by containment matching.
    Signal::new("i'm a realtor", -100, Negative),
    Signal::new("i am a realtor", -100, Negative),
    Signal::new("as a realtor", -100, Negative),
    Signal::new("as an agent", -100, Negative),
    Signal::new("i'm an agent", -100, Negative),
    Signal::new("licensed agent", -100, Negative),
    Signal::new("i specialize in", -80, Negative),
    Signal::new("keller williams", -80, Negative),
    Signal::new("coldwell banker", -80, Negative),
    Signal::new("remax", -80, Negative),
    Signal::new("re/max", -80, Negative),
    Signal::new("century 21", -80, Negative),
    Signal::new("berkshire hathaway", -80, Negative),
    Signal::new("exp realty", -80, Negative),
    Signal::new("compass real estate", -80, Negative),
    Signal::new("just browsing", -30, Negative),
    Signal::new("not interested", -50, Negative),
    Signal::new("unsubscribe", -100, Negative),
];

/// All built-in signals for a specific category, in catalog order.
pub fn signals_in_category(
    category: SignalCategory,
) -> impl Iterator<Item = &'static Signal> {
    INTENT_SIGNALS.iter().filter(move |s| s.category == category)
}

/// All built-in signals with positive weights.
pub fn positive_signals() -> impl Iterator<Item = &'static Signal> {
    INTENT_SIGNALS.iter().filter(|s| s.weight > 0)
}

/// All built-in signals with negative weights.
pub fn negative_signals() -> impl Iterator<Item = &'static Signal> {
    INTENT_SIGNALS.iter().filter(|s| s.weight < 0)
}
