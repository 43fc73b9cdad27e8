use crate::model::{Gradation, GroupSymbol, SoilComponents};
use crate::rules::{Decision, DecisionRule, DecisionTable, PlasticityPoint};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

const ONE: Decimal = Decimal::ONE;
const THREE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
const FOUR: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
const FIVE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const SIX: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
const SEVEN: Decimal = Decimal::from_parts(7, 0, 0, false, 0);
const TWELVE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Dominant coarse fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoarseKind {
    Gravel,
    Sand,
}

impl CoarseKind {
    /// Gravel only when it strictly outweighs sand; ties go to sand.
    pub fn of(components: &SoilComponents) -> Self {
        if components.gravel > components.sand {
            CoarseKind::Gravel
        } else {
            CoarseKind::Sand
        }
    }

    /// Minimum Cu for a well-graded soil.
    pub fn cu_critical(&self) -> Decimal {
        match self {
            CoarseKind::Gravel => FOUR,
            CoarseKind::Sand => SIX,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            CoarseKind::Gravel => 'G',
            CoarseKind::Sand => 'S',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grading {
    Well,
    Poor,
}

impl Grading {
    /// Well graded when Cu >= the critical value and 1 <= Cc <= 3.
    pub fn evaluate(kind: CoarseKind, gradation: &Gradation) -> Self {
        let cc_ok = gradation.cc >= ONE && gradation.cc <= THREE;
        if gradation.cu >= kind.cu_critical() && cc_ok {
            Grading::Well
        } else {
            Grading::Poor
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Grading::Well => 'W',
            Grading::Poor => 'P',
        }
    }
}

/// Plasticity character of the fine fraction in a coarse soil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinesCharacter {
    Silty,
    Clayey,
    /// Straddles the A-Line in the 4 <= PI <= 7 band.
    SiltyClayey,
}

impl fmt::Display for FinesCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinesCharacter::Silty => write!(f, "M"),
            FinesCharacter::Clayey => write!(f, "C"),
            FinesCharacter::SiltyClayey => write!(f, "M-C"),
        }
    }
}

pub const FINES_CHARACTER_RULES: DecisionTable<PlasticityPoint, FinesCharacter> = DecisionTable {
    name: "fines character",
    rules: &[
        DecisionRule {
            label: "PI < 4 or below A-Line",
            applies: silty_fines,
            outcome: FinesCharacter::Silty,
        },
        DecisionRule {
            label: "PI > 7 and on or above A-Line",
            applies: clayey_fines,
            outcome: FinesCharacter::Clayey,
        },
    ],
    fallback_label: "4 <= PI <= 7, on or above A-Line",
    fallback: FinesCharacter::SiltyClayey,
};

fn silty_fines(p: &PlasticityPoint) -> bool {
    p.plasticity_index < FOUR || p.plasticity_index < p.a_line
}

fn clayey_fines(p: &PlasticityPoint) -> bool {
    p.plasticity_index > SEVEN && p.plasticity_index >= p.a_line
}

/// Fines content band that decides the symbol form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinesBand {
    /// Under 5% fines: gradation alone.
    Clean,
    /// 5% to 12% inclusive: dual symbol, gradation plus fines.
    Dual,
    /// Over 12% fines: fines character alone.
    Fines,
}

impl FinesBand {
    pub fn of(fines: Decimal) -> Self {
        if fines < FIVE {
            FinesBand::Clean
        } else if fines > TWELVE {
            FinesBand::Fines
        } else {
            FinesBand::Dual
        }
    }

    pub fn uses_gradation(&self) -> bool {
        !matches!(self, FinesBand::Fines)
    }
}

/// Every intermediate decision of the coarse-grained path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoarseDecision {
    pub symbol: GroupSymbol,
    pub kind: CoarseKind,
    pub band: FinesBand,
    pub grading: Grading,
    /// Gradation was needed, no Cu/Cc were available, and the grading
    /// defaulted to poor.
    pub grading_assumed: bool,
    /// Evaluated only when fines matter (5% or more).
    pub fines_character: Option<Decision<FinesCharacter>>,
}

/// Group symbol for a coarse-grained sample (under 50% fines).
///
/// Missing gradation is read as poorly graded.
pub fn classify_coarse_grained(
    components: &SoilComponents,
    point: &PlasticityPoint,
    gradation: Option<&Gradation>,
) -> CoarseDecision {
    let kind = CoarseKind::of(components);
    let band = FinesBand::of(components.fines);

    let (grading, grading_assumed) = match gradation {
        Some(g) => (Grading::evaluate(kind, g), false),
        None => (Grading::Poor, band.uses_gradation()),
    };

    let fines_character = match band {
        FinesBand::Clean => None,
        FinesBand::Dual | FinesBand::Fines => Some(FINES_CHARACTER_RULES.evaluate(point)),
    };

    let symbol = match (band, fines_character.map(|d| d.outcome)) {
        (FinesBand::Clean, _) | (_, None) => clean_symbol(kind, grading),
        (FinesBand::Fines, Some(fines)) => fines_symbol(kind, fines),
        (FinesBand::Dual, Some(fines)) => dual_symbol(kind, grading, fines),
    };

    CoarseDecision {
        symbol,
        kind,
        band,
        grading,
        grading_assumed,
        fines_character,
    }
}

fn clean_symbol(kind: CoarseKind, grading: Grading) -> GroupSymbol {
    match (kind, grading) {
        (CoarseKind::Gravel, Grading::Well) => GroupSymbol::Gw,
        (CoarseKind::Gravel, Grading::Poor) => GroupSymbol::Gp,
        (CoarseKind::Sand, Grading::Well) => GroupSymbol::Sw,
        (CoarseKind::Sand, Grading::Poor) => GroupSymbol::Sp,
    }
}

/// Over 12% fines. Fines straddling the A-Line take the double-prefixed
/// "GC-GM"/"SC-SM" form.
fn fines_symbol(kind: CoarseKind, fines: FinesCharacter) -> GroupSymbol {
    match (kind, fines) {
        (CoarseKind::Gravel, FinesCharacter::Silty) => GroupSymbol::Gm,
        (CoarseKind::Gravel, FinesCharacter::Clayey) => GroupSymbol::Gc,
        (CoarseKind::Gravel, FinesCharacter::SiltyClayey) => GroupSymbol::GcGm,
        (CoarseKind::Sand, FinesCharacter::Silty) => GroupSymbol::Sm,
        (CoarseKind::Sand, FinesCharacter::Clayey) => GroupSymbol::Sc,
        (CoarseKind::Sand, FinesCharacter::SiltyClayey) => GroupSymbol::ScSm,
    }
}

/// 5% to 12% fines. Silty-clayey fines collapse to silty here.
fn dual_symbol(kind: CoarseKind, grading: Grading, fines: FinesCharacter) -> GroupSymbol {
    let clayey = matches!(fines, FinesCharacter::Clayey);
    match (kind, grading, clayey) {
        (CoarseKind::Gravel, Grading::Well, false) => GroupSymbol::GwGm,
        (CoarseKind::Gravel, Grading::Well, true) => GroupSymbol::GwGc,
        (CoarseKind::Gravel, Grading::Poor, false) => GroupSymbol::GpGm,
        (CoarseKind::Gravel, Grading::Poor, true) => GroupSymbol::GpGc,
        (CoarseKind::Sand, Grading::Well, false) => GroupSymbol::SwSm,
        (CoarseKind::Sand, Grading::Well, true) => GroupSymbol::SwSc,
        (CoarseKind::Sand, Grading::Poor, false) => GroupSymbol::SpSm,
        (CoarseKind::Sand, Grading::Poor, true) => GroupSymbol::SpSc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::components::calculate_components;
    use crate::model::AtterbergLimits;
    use rust_decimal_macros::dec;

    fn point(ll: Decimal, pi: Decimal) -> PlasticityPoint {
        PlasticityPoint::new(
            AtterbergLimits {
                liquid_limit: ll,
                plasticity_index: pi,
            },
            false,
        )
    }

    fn symbol(
        p200: Decimal,
        p4: Decimal,
        ll: Decimal,
        pi: Decimal,
        gradation: Option<Gradation>,
    ) -> GroupSymbol {
        let c = calculate_components(p200, p4);
        classify_coarse_grained(&c, &point(ll, pi), gradation.as_ref()).symbol
    }

    fn well_graded() -> Option<Gradation> {
        Some(Gradation::new(dec!(8), dec!(1.5)))
    }

    #[test]
    fn test_clean_sand_well_graded() {
        assert_eq!(
            symbol(dec!(3), dec!(100), dec!(0), dec!(0), well_graded()),
            GroupSymbol::Sw
        );
    }

    #[test]
    fn test_clean_gravel_poorly_graded_cc_out_of_range() {
        let g = Some(Gradation::new(dec!(10), dec!(3.1)));
        assert_eq!(symbol(dec!(2), dec!(30), dec!(0), dec!(0), g), GroupSymbol::Gp);
    }

    #[test]
    fn test_cu_critical_differs_for_gravel_and_sand() {
        let g = Some(Gradation::new(dec!(5), dec!(2)));
        // Cu 5 >= 4 for gravel
        assert_eq!(symbol(dec!(2), dec!(30), dec!(0), dec!(0), g), GroupSymbol::Gw);
        // Cu 5 < 6 for sand
        assert_eq!(symbol(dec!(2), dec!(90), dec!(0), dec!(0), g), GroupSymbol::Sp);
    }

    #[test]
    fn test_cc_bounds_inclusive() {
        let low = Some(Gradation::new(dec!(6), dec!(1)));
        let high = Some(Gradation::new(dec!(6), dec!(3)));
        assert_eq!(symbol(dec!(2), dec!(90), dec!(0), dec!(0), low), GroupSymbol::Sw);
        assert_eq!(symbol(dec!(2), dec!(90), dec!(0), dec!(0), high), GroupSymbol::Sw);
    }

    #[test]
    fn test_missing_gradation_is_poorly_graded() {
        let c = calculate_components(dec!(2), dec!(90));
        let d = classify_coarse_grained(&c, &point(dec!(0), dec!(0)), None);
        assert_eq!(d.symbol, GroupSymbol::Sp);
        assert!(d.grading_assumed);
        assert!(d.fines_character.is_none());
    }

    #[test]
    fn test_equal_gravel_and_sand_is_sand() {
        // gravel 45, sand 45
        assert_eq!(
            symbol(dec!(10), dec!(55), dec!(30), dec!(2), None),
            GroupSymbol::SpSm
        );
    }

    #[test]
    fn test_fines_just_under_five_is_clean() {
        assert_eq!(
            symbol(dec!(4.999), dec!(100), dec!(30), dec!(20), None),
            GroupSymbol::Sp
        );
    }

    #[test]
    fn test_fines_exactly_five_is_dual() {
        assert_eq!(
            symbol(dec!(5), dec!(100), dec!(30), dec!(20), None),
            GroupSymbol::SpSc
        );
    }

    #[test]
    fn test_fines_exactly_twelve_is_dual() {
        assert_eq!(
            symbol(dec!(12), dec!(100), dec!(35), dec!(5), None),
            GroupSymbol::SpSm
        );
    }

    #[test]
    fn test_fines_just_over_twelve_is_fines_form() {
        assert_eq!(
            symbol(dec!(12.001), dec!(100), dec!(35), dec!(5), None),
            GroupSymbol::Sm
        );
    }

    #[test]
    fn test_dual_band_well_graded_gravel_with_clay() {
        // gravel 60, sand 32, fines 8; aLine(40) = 14.6
        assert_eq!(
            symbol(dec!(8), dec!(40), dec!(40), dec!(20), Some(Gradation::new(dec!(4), dec!(2)))),
            GroupSymbol::GwGc
        );
    }

    #[test]
    fn test_dual_band_silty_clayey_collapses_to_silty() {
        // aLine(25) = 3.65, PI 5 straddles
        assert_eq!(
            symbol(dec!(10), dec!(30), dec!(25), dec!(5), None),
            GroupSymbol::GpGm
        );
    }

    #[test]
    fn test_high_fines_silty_clayey_sand() {
        let c = calculate_components(dec!(15), dec!(100));
        let d = classify_coarse_grained(&c, &point(dec!(25), dec!(5)), None);
        assert_eq!(d.symbol, GroupSymbol::ScSm);
        assert_eq!(d.symbol.as_str(), "SC-SM");
        assert_eq!(
            d.fines_character.map(|f| f.outcome),
            Some(FinesCharacter::SiltyClayey)
        );
    }

    #[test]
    fn test_high_fines_silty_clayey_gravel() {
        assert_eq!(
            symbol(dec!(20), dec!(40), dec!(25), dec!(6), None),
            GroupSymbol::GcGm
        );
    }

    #[test]
    fn test_high_fines_ignores_gradation() {
        let c = calculate_components(dec!(30), dec!(100));
        let d = classify_coarse_grained(&c, &point(dec!(40), dec!(20)), well_graded().as_ref());
        assert_eq!(d.symbol, GroupSymbol::Sc);
        assert!(!d.band.uses_gradation());

        let d = classify_coarse_grained(&c, &point(dec!(40), dec!(20)), None);
        assert!(!d.grading_assumed);
    }

    #[test]
    fn test_fines_band_boundaries() {
        assert_eq!(FinesBand::of(dec!(4.999)), FinesBand::Clean);
        assert_eq!(FinesBand::of(dec!(5.0)), FinesBand::Dual);
        assert_eq!(FinesBand::of(dec!(12.0)), FinesBand::Dual);
        assert_eq!(FinesBand::of(dec!(12.001)), FinesBand::Fines);
    }

    #[test]
    fn test_fines_character_display() {
        assert_eq!(FinesCharacter::SiltyClayey.to_string(), "M-C");
    }
}
