//! Plasticity chart boundaries.
//!
//! The A-Line separates clay-like from silt-like behavior and is the decision
//! boundary for both classifiers. The U-Line is the empirical upper bound for
//! natural soils; points above it usually mean a transcription error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const A_LINE_SLOPE: Decimal = Decimal::from_parts(73, 0, 0, false, 2); // 0.73
const A_LINE_INTERCEPT_LL: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
const U_LINE_SLOPE: Decimal = Decimal::from_parts(9, 0, 0, false, 1); // 0.9
const U_LINE_INTERCEPT_LL: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// A-Line: PI = 0.73·(LL − 20), never below zero.
pub fn a_line(liquid_limit: Decimal) -> Decimal {
    a_line_unclamped(liquid_limit).max(Decimal::ZERO)
}

/// U-Line: PI = 0.9·(LL − 8), never below zero.
pub fn u_line(liquid_limit: Decimal) -> Decimal {
    u_line_unclamped(liquid_limit).max(Decimal::ZERO)
}

// Saturates at the Decimal range instead of overflowing.
pub(crate) fn a_line_unclamped(liquid_limit: Decimal) -> Decimal {
    liquid_limit
        .saturating_sub(A_LINE_INTERCEPT_LL)
        .saturating_mul(A_LINE_SLOPE)
}

pub(crate) fn u_line_unclamped(liquid_limit: Decimal) -> Decimal {
    liquid_limit
        .saturating_sub(U_LINE_INTERCEPT_LL)
        .saturating_mul(U_LINE_SLOPE)
}

/// True when (LL, PI) plots above the U-Line.
///
/// Advisory only: it never changes the classification. A zero PI is never
/// flagged.
pub fn check_plasticity_validity(liquid_limit: Decimal, plasticity_index: Decimal) -> bool {
    plasticity_index > Decimal::ZERO && plasticity_index > u_line(liquid_limit)
}

/// Where a sample sits relative to the chart boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlasticityCheck {
    pub liquid_limit: Decimal,
    pub plasticity_index: Decimal,
    pub a_line: Decimal,
    pub u_line: Decimal,
    /// PI is on or above the A-Line.
    pub on_or_above_a_line: bool,
    /// PI is above the U-Line (likely erroneous data).
    pub above_u_line: bool,
}

impl PlasticityCheck {
    pub fn evaluate(liquid_limit: Decimal, plasticity_index: Decimal) -> Self {
        let a = a_line(liquid_limit);
        Self {
            liquid_limit,
            plasticity_index,
            a_line: a,
            u_line: u_line(liquid_limit),
            on_or_above_a_line: plasticity_index >= a,
            above_u_line: check_plasticity_validity(liquid_limit, plasticity_index),
        }
    }
}
