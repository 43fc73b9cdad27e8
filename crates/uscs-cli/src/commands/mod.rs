pub mod chart;
pub mod check;
pub mod classify;
pub mod reference;

use rust_decimal::Decimal;
use uscs_core::parsing::{resolve_plasticity_index, PlasticityEntry};

/// PI entry from `--pi`/`--pl`. Without either the sample is non-plastic.
pub fn plasticity_entry(pi: Option<String>, pl: Option<Decimal>) -> PlasticityEntry {
    match (pi, pl) {
        (_, Some(pl)) => PlasticityEntry::PlasticLimit(pl),
        (Some(pi), None) => PlasticityEntry::PlasticityIndex(pi),
        (None, None) => PlasticityEntry::PlasticityIndex("NP".into()),
    }
}

/// Numeric PI for the chart commands; fallbacks are logged as warnings.
pub fn plasticity_index(liquid_limit: Decimal, pi: Option<String>, pl: Option<Decimal>) -> Decimal {
    let mut warnings = Vec::new();
    resolve_plasticity_index(liquid_limit, &plasticity_entry(pi, pl), &mut warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plastic_limit_gives_pi() {
        assert_eq!(plasticity_index(dec!(40), None, Some(dec!(18))), dec!(22));
    }

    #[test]
    fn test_pi_text_and_default() {
        assert_eq!(plasticity_index(dec!(40), Some("12,5".into()), None), dec!(12.5));
        assert_eq!(plasticity_index(dec!(40), None, None), dec!(0));
    }

    #[test]
    fn test_plastic_limit_above_liquid_limit_is_non_plastic() {
        assert_eq!(plasticity_index(dec!(30), None, Some(dec!(35))), dec!(0));
    }
}
