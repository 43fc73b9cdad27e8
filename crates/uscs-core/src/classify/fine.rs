use crate::model::GroupSymbol;
use crate::rules::{Decision, DecisionRule, DecisionTable, PlasticityPoint};
use rust_decimal::Decimal;

const FOUR: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
const SEVEN: Decimal = Decimal::from_parts(7, 0, 0, false, 0);
const FIFTY: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Fine-grained soils (50% or more passing No. 200), in ASTM D2487 order.
///
/// Rules after the LL >= 50 pair only see LL < 50, so the ordering is part of
/// each predicate's meaning.
pub const FINE_GRAINED_RULES: DecisionTable<PlasticityPoint, GroupSymbol> = DecisionTable {
    name: "fine-grained",
    rules: &[
        DecisionRule {
            label: "organic, LL >= 50",
            applies: organic_high_ll,
            outcome: GroupSymbol::Oh,
        },
        DecisionRule {
            label: "organic, LL < 50",
            applies: organic_low_ll,
            outcome: GroupSymbol::Ol,
        },
        DecisionRule {
            label: "LL >= 50, PI on or above A-Line",
            applies: high_ll_clay,
            outcome: GroupSymbol::Ch,
        },
        DecisionRule {
            label: "LL >= 50, PI below A-Line",
            applies: high_ll_silt,
            outcome: GroupSymbol::Mh,
        },
        DecisionRule {
            label: "PI > 7 and on or above A-Line",
            applies: low_ll_clay,
            outcome: GroupSymbol::Cl,
        },
        DecisionRule {
            label: "PI < 4 or below A-Line",
            applies: low_ll_silt,
            outcome: GroupSymbol::Ml,
        },
    ],
    fallback_label: "4 <= PI <= 7, on or above A-Line",
    fallback: GroupSymbol::ClMl,
};

fn organic_high_ll(p: &PlasticityPoint) -> bool {
    p.is_organic && p.liquid_limit >= FIFTY
}

fn organic_low_ll(p: &PlasticityPoint) -> bool {
    p.is_organic && p.liquid_limit < FIFTY
}

fn high_ll_clay(p: &PlasticityPoint) -> bool {
    p.liquid_limit >= FIFTY && p.plasticity_index >= p.a_line
}

fn high_ll_silt(p: &PlasticityPoint) -> bool {
    p.liquid_limit >= FIFTY && p.plasticity_index < p.a_line
}

fn low_ll_clay(p: &PlasticityPoint) -> bool {
    p.plasticity_index > SEVEN && p.plasticity_index >= p.a_line
}

fn low_ll_silt(p: &PlasticityPoint) -> bool {
    p.plasticity_index < FOUR || p.plasticity_index < p.a_line
}

/// Group symbol for a fine-grained sample.
pub fn classify_fine_grained(point: &PlasticityPoint) -> Decision<GroupSymbol> {
    FINE_GRAINED_RULES.evaluate(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AtterbergLimits;
    use rust_decimal_macros::dec;

    fn symbol(ll: Decimal, pi: Decimal, organic: bool) -> GroupSymbol {
        let point = PlasticityPoint::new(
            AtterbergLimits {
                liquid_limit: ll,
                plasticity_index: pi,
            },
            organic,
        );
        classify_fine_grained(&point).outcome
    }

    #[test]
    fn test_organic_split_on_ll_50() {
        assert_eq!(symbol(dec!(50), dec!(30), true), GroupSymbol::Oh);
        assert_eq!(symbol(dec!(49.9), dec!(30), true), GroupSymbol::Ol);
    }

    #[test]
    fn test_organic_overrides_plasticity() {
        // Would be CH if inorganic
        assert_eq!(symbol(dec!(70), dec!(45), true), GroupSymbol::Oh);
    }

    #[test]
    fn test_high_ll_clay_and_silt() {
        // aLine(70) = 36.5
        assert_eq!(symbol(dec!(70), dec!(36.5), false), GroupSymbol::Ch);
        assert_eq!(symbol(dec!(70), dec!(36.4), false), GroupSymbol::Mh);
    }

    #[test]
    fn test_lean_clay() {
        // aLine(40) = 14.6
        assert_eq!(symbol(dec!(40), dec!(20), false), GroupSymbol::Cl);
    }

    #[test]
    fn test_lean_clay_exactly_on_a_line() {
        assert_eq!(symbol(dec!(40), dec!(14.6), false), GroupSymbol::Cl);
    }

    #[test]
    fn test_silt_below_a_line() {
        assert_eq!(symbol(dec!(40), dec!(14.5), false), GroupSymbol::Ml);
    }

    #[test]
    fn test_silt_low_pi() {
        assert_eq!(symbol(dec!(22), dec!(3.9), false), GroupSymbol::Ml);
        assert_eq!(symbol(dec!(22), dec!(0), false), GroupSymbol::Ml);
    }

    #[test]
    fn test_pi_exactly_seven_is_cl_ml() {
        // aLine(25) = 3.65; PI = 7 fails "PI > 7"
        assert_eq!(symbol(dec!(25), dec!(7), false), GroupSymbol::ClMl);
    }

    #[test]
    fn test_pi_exactly_four_is_cl_ml() {
        assert_eq!(symbol(dec!(25), dec!(4), false), GroupSymbol::ClMl);
    }

    #[test]
    fn test_just_above_seven_is_cl() {
        assert_eq!(symbol(dec!(25), dec!(7.1), false), GroupSymbol::Cl);
    }

    #[test]
    fn test_band_below_a_line_is_ml() {
        // aLine(29) = 6.57; PI 6 is inside 4..7 but under the A-Line
        assert_eq!(symbol(dec!(29), dec!(6), false), GroupSymbol::Ml);
    }

    #[test]
    fn test_table_order() {
        let symbols: Vec<GroupSymbol> = FINE_GRAINED_RULES
            .entries()
            .into_iter()
            .map(|(_, sym)| sym)
            .collect();
        assert_eq!(
            symbols,
            vec![
                GroupSymbol::Oh,
                GroupSymbol::Ol,
                GroupSymbol::Ch,
                GroupSymbol::Mh,
                GroupSymbol::Cl,
                GroupSymbol::Ml,
                GroupSymbol::ClMl,
            ]
        );
    }

    #[test]
    fn test_decision_reports_rule_label() {
        let point = PlasticityPoint::new(
            AtterbergLimits {
                liquid_limit: dec!(25),
                plasticity_index: dec!(5),
            },
            false,
        );
        let d = classify_fine_grained(&point);
        assert_eq!(d.rule_index, None);
        assert_eq!(d.label, FINE_GRAINED_RULES.fallback_label);
    }
}
