use chrono::{Datelike, NaiveDate, NaiveTime};

use super::super::domain::{Item, Receipt};
use super::super::money::Money;
use super::config::ScoringConfig;
use super::{ScoreComponent, ScoringRule};

pub(crate) fn retailer_points(retailer: &str, config: &ScoringConfig) -> u64 {
    let alphanumeric = retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64;
    alphanumeric.saturating_mul(config.retailer_character_points)
}

pub(crate) fn round_total_points(total: Money, config: &ScoringConfig) -> u64 {
    if total.is_round_dollar() {
        config.round_total_points
    } else {
        0
    }
}

pub(crate) fn quarter_multiple_points(total: Money, config: &ScoringConfig) -> u64 {
    if total.is_multiple_of(config.quarter_step_cents) {
        config.quarter_multiple_points
    } else {
        0
    }
}

pub(crate) fn item_pair_points(items: &[Item], config: &ScoringConfig) -> u64 {
    ((items.len() / 2) as u64).saturating_mul(config.item_pair_points)
}

/// A whitespace-only description trims to length zero and earns nothing.
pub(crate) fn item_description_points(item: &Item, config: &ScoringConfig) -> u64 {
    let length = item.trimmed_description().chars().count();
    let divisor = config.description_length_divisor;
    if length == 0 || divisor == 0 || length % divisor != 0 {
        return 0;
    }
    item.price.percent_ceil_dollars(config.description_price_percent)
}

pub(crate) fn odd_day_points(date: NaiveDate, config: &ScoringConfig) -> u64 {
    if date.day() % 2 == 1 {
        config.odd_day_points
    } else {
        0
    }
}

pub(crate) fn afternoon_points(time: NaiveTime, config: &ScoringConfig) -> u64 {
    if config.afternoon_start < time && time < config.afternoon_end {
        config.afternoon_points
    } else {
        0
    }
}

/// Sums saturate at `u64::MAX` so oversized receipts cap instead of wrapping.
pub(crate) fn score_receipt(
    receipt: &Receipt,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, u64) {
    let qualifying_items = receipt
        .items
        .iter()
        .filter(|item| item_description_points(item, config) > 0)
        .count();
    let description_points: u64 = receipt
        .items
        .iter()
        .map(|item| item_description_points(item, config))
        .fold(0, u64::saturating_add);

    let components = vec![
        ScoreComponent {
            rule: ScoringRule::RetailerCharacters,
            points: retailer_points(&receipt.retailer, config),
            notes: format!("retailer name {:?}", receipt.retailer),
        },
        ScoreComponent {
            rule: ScoringRule::RoundTotal,
            points: round_total_points(receipt.total, config),
            notes: format!("total {}", receipt.total),
        },
        ScoreComponent {
            rule: ScoringRule::QuarterMultiple,
            points: quarter_multiple_points(receipt.total, config),
            notes: format!(
                "total {} in steps of {} cents",
                receipt.total, config.quarter_step_cents
            ),
        },
        ScoreComponent {
            rule: ScoringRule::ItemPairs,
            points: item_pair_points(&receipt.items, config),
            notes: format!("{} item(s)", receipt.items.len()),
        },
        ScoreComponent {
            rule: ScoringRule::ItemDescriptions,
            points: description_points,
            notes: format!(
                "{qualifying_items} of {} description(s) qualify",
                receipt.items.len()
            ),
        },
        ScoreComponent {
            rule: ScoringRule::OddPurchaseDay,
            points: odd_day_points(receipt.purchase_date, config),
            notes: format!("purchased on {}", receipt.purchase_date),
        },
        ScoreComponent {
            rule: ScoringRule::AfternoonPurchase,
            points: afternoon_points(receipt.purchase_time, config),
            notes: format!("purchased at {}", receipt.purchase_time.format("%H:%M")),
        },
    ];

    let total = components
        .iter()
        .map(|component| component.points)
        .fold(0, u64::saturating_add);
    (components, total)
}
