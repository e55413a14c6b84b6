mod config;
pub(crate) mod rules;

pub use config::ScoringConfig;

use super::domain::Receipt;

/// Stateless scorer applying the loyalty rules to a validated receipt.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, receipt: &Receipt) -> ScoreCard {
        let (components, total) = rules::score_receipt(receipt, &self.config);
        ScoreCard { total, components }
    }
}

/// Loyalty rule a score component was earned under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    RetailerCharacters,
    RoundTotal,
    QuarterMultiple,
    ItemPairs,
    ItemDescriptions,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl ScoringRule {
    pub fn label(&self) -> &'static str {
        match self {
            ScoringRule::RetailerCharacters => "Retailer characters",
            ScoringRule::RoundTotal => "Round dollar total",
            ScoringRule::QuarterMultiple => "Total multiple of 0.25",
            ScoringRule::ItemPairs => "Item pairs",
            ScoringRule::ItemDescriptions => "Item description length",
            ScoringRule::OddPurchaseDay => "Odd purchase day",
            ScoringRule::AfternoonPurchase => "Afternoon purchase",
        }
    }
}

/// Points earned under one rule, kept so a score can be audited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub points: u64,
    pub notes: String,
}

/// Result of scoring a receipt: the total and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub total: u64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreCard {
    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .fold(0, u64::saturating_add)
    }
}
