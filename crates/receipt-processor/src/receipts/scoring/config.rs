use chrono::NaiveTime;

/// Point weights for the loyalty rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub retailer_character_points: u64,
    pub round_total_points: u64,
    pub quarter_multiple_points: u64,
    /// Step, in cents, the total must divide into for the quarter bonus.
    pub quarter_step_cents: u64,
    pub item_pair_points: u64,
    /// Share of an item's price, in percent, awarded for qualifying descriptions.
    pub description_price_percent: u64,
    pub description_length_divisor: usize,
    pub odd_day_points: u64,
    pub afternoon_points: u64,
    /// Exclusive lower bound of the afternoon window.
    pub afternoon_start: NaiveTime,
    /// Exclusive upper bound of the afternoon window.
    pub afternoon_end: NaiveTime,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            retailer_character_points: 1,
            round_total_points: 50,
            quarter_multiple_points: 25,
            quarter_step_cents: 25,
            item_pair_points: 5,
            description_price_percent: 20,
            description_length_divisor: 3,
            odd_day_points: 6,
            afternoon_points: 10,
            afternoon_start: NaiveTime::from_hms_opt(14, 0, 0).expect("valid window start"),
            afternoon_end: NaiveTime::from_hms_opt(16, 0, 0).expect("valid window end"),
        }
    }
}
