// 🏆 Points Rule Engine
// Seven independent scoring rules, summed per receipt

use crate::receipt::Receipt;
use chrono::{Datelike, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Unicode letters (L*) and decimal digits (Nd) only
static LETTER_OR_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{Nd}]").expect("static regex should not panic"));

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    /// One point per letter or decimal digit in the retailer name
    RetailerName,
    /// 50 points if the total has no cents
    RoundDollar,
    /// 25 points if the total is a multiple of 0.25
    QuarterMultiple,
    /// 5 points for every two items
    ItemPairs,
    /// ceil(price * 0.2) per item whose trimmed description length is a multiple of 3
    ItemDescription,
    /// 6 points if the purchase day is odd
    OddDay,
    /// 10 points if purchased after 14:00 and before 16:00
    Afternoon,
}

impl PointsRule {
    pub const ALL: [PointsRule; 7] = [
        PointsRule::RetailerName,
        PointsRule::RoundDollar,
        PointsRule::QuarterMultiple,
        PointsRule::ItemPairs,
        PointsRule::ItemDescription,
        PointsRule::OddDay,
        PointsRule::Afternoon,
    ];

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            PointsRule::RetailerName => "Retailer name",
            PointsRule::RoundDollar => "Round dollar total",
            PointsRule::QuarterMultiple => "Quarter multiple total",
            PointsRule::ItemPairs => "Item pairs",
            PointsRule::ItemDescription => "Item descriptions",
            PointsRule::OddDay => "Odd purchase day",
            PointsRule::Afternoon => "Afternoon purchase",
        }
    }

    /// Points this rule awards for the receipt
    pub fn score(&self, receipt: &Receipt) -> u64 {
        match self {
            PointsRule::RetailerName => retailer_name_points(receipt),
            PointsRule::RoundDollar => round_dollar_points(receipt),
            PointsRule::QuarterMultiple => quarter_multiple_points(receipt),
            PointsRule::ItemPairs => item_pair_points(receipt),
            PointsRule::ItemDescription => item_description_points(receipt),
            PointsRule::OddDay => odd_day_points(receipt),
            PointsRule::Afternoon => afternoon_points(receipt),
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

const ROUND_DOLLAR_BONUS: u64 = 50;
const QUARTER_MULTIPLE_BONUS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_BONUS: u64 = 6;
const AFTERNOON_BONUS: u64 = 10;

/// Fractions, superscripts, roman numerals and combining marks score nothing
pub fn retailer_name_points(receipt: &Receipt) -> u64 {
    LETTER_OR_DIGIT.find_iter(&receipt.retailer).count() as u64
}

pub fn round_dollar_points(receipt: &Receipt) -> u64 {
    if (receipt.total % Decimal::ONE).is_zero() {
        ROUND_DOLLAR_BONUS
    } else {
        0
    }
}

pub fn quarter_multiple_points(receipt: &Receipt) -> u64 {
    if (receipt.total % Decimal::new(25, 2)).is_zero() {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

pub fn item_pair_points(receipt: &Receipt) -> u64 {
    ((receipt.items.len() / 2) as u64).saturating_mul(POINTS_PER_ITEM_PAIR)
}

/// Length is counted in UTF-8 bytes of the trimmed description.
/// Points saturate at `u64::MAX` for absurdly large prices.
pub fn item_description_points(receipt: &Receipt) -> u64 {
    let multiplier = Decimal::new(2, 1);

    receipt
        .items
        .iter()
        .filter(|item| {
            let len = item.short_description.trim().len();
            len > 0 && len % 3 == 0
        })
        .map(|item| (item.price * multiplier).ceil().to_u64().unwrap_or(u64::MAX))
        .fold(0, u64::saturating_add)
}

pub fn odd_day_points(receipt: &Receipt) -> u64 {
    if receipt.purchase_date.day() % 2 == 1 {
        ODD_DAY_BONUS
    } else {
        0
    }
}

pub fn afternoon_points(receipt: &Receipt) -> u64 {
    let window_start = NaiveTime::from_hms_opt(14, 0, 0);
    let window_end = NaiveTime::from_hms_opt(16, 0, 0);

    match (window_start, window_end) {
        (Some(start), Some(end)) if receipt.purchase_time > start && receipt.purchase_time < end => {
            AFTERNOON_BONUS
        }
        _ => 0,
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleScore {
    pub rule: PointsRule,
    pub points: u64,
}

/// Per-rule contribution for one receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub rules: Vec<RuleScore>,
    pub total: u64,
}

impl PointsBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        let rules: Vec<RuleScore> = PointsRule::ALL
            .iter()
            .map(|rule| RuleScore {
                rule: *rule,
                points: rule.score(receipt),
            })
            .collect();
        let total = rules.iter().map(|score| score.points).fold(0, u64::saturating_add);

        PointsBreakdown { rules, total }
    }

    /// Points awarded by a single rule
    pub fn get(&self, rule: PointsRule) -> u64 {
        self.rules
            .iter()
            .find(|score| score.rule == rule)
            .map(|score| score.points)
            .unwrap_or(0)
    }
}

/// Total reward points for a receipt
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsRule::ALL
        .iter()
        .map(|rule| rule.score(receipt))
        .fold(0, u64::saturating_add)
}

// ============================================================================
// TESTS
// ============================================================================
