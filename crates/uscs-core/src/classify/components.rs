use crate::model::SoilComponents;
use rust_decimal::Decimal;

/// Split a sample into gravel, sand and fines from its sieve passing percentages.
///
/// Inconsistent sieve data (passing No. 4 above 100, or passing No. 200 above
/// passing No. 4) is clamped silently: gravel and sand never go negative.
pub fn calculate_components(passing_200: Decimal, passing_4: Decimal) -> SoilComponents {
    SoilComponents {
        gravel: Decimal::ONE_HUNDRED.saturating_sub(passing_4).max(Decimal::ZERO),
        sand: passing_4.saturating_sub(passing_200).max(Decimal::ZERO),
        fines: passing_200,
    }
}
