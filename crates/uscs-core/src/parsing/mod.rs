//! Input collection: turn raw lab-sheet entries into a [`SampleInput`].
//!
//! Range violations are errors. Entries the engine can work around (an
//! unreadable PI, unusable grain sizes, out-of-order sieves) fall back to a
//! defined default and are reported as [`InputWarning`]s.

pub mod values;

use crate::error::UscsError;
use crate::model::{Gradation, SampleInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use values::parse_plasticity_index;

const ORGANIC_RATIO: Decimal = Decimal::from_parts(75, 0, 0, false, 2); // 0.75

/// How the plasticity index was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlasticityEntry {
    /// PI as text; may be "NP".
    PlasticityIndex(String),
    /// Plastic limit; PI = LL − PL.
    PlasticLimit(Decimal),
}

/// How the grain-size curve was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradationEntry {
    Coefficients { cu: Decimal, cc: Decimal },
    /// Grain sizes in mm.
    GrainSizes {
        d10: Decimal,
        d30: Decimal,
        d60: Decimal,
    },
}

/// Raw entries for one sample, as collected from a user or a JSON file.
///
/// Numbers are decimal strings in JSON, e.g. `"18"` or `"0.075"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleForm {
    pub passing_200: Decimal,
    pub passing_4: Decimal,
    pub liquid_limit: Decimal,
    pub plasticity: PlasticityEntry,
    /// Liquid limit after oven drying, for the organic check.
    #[serde(default)]
    pub liquid_limit_oven_dried: Option<Decimal>,
    #[serde(default)]
    pub gradation: Option<GradationEntry>,
}

/// An input problem that was resolved with a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputWarning {
    pub field: String,
    pub reason: String,
}

impl InputWarning {
    fn new(field: &str, reason: impl Into<String>) -> Self {
        let warning = Self {
            field: field.to_string(),
            reason: reason.into(),
        };
        tracing::warn!(field = %warning.field, "{}", warning.reason);
        warning
    }
}

#[derive(Debug, Clone)]
pub struct ParsedSample {
    pub sample: SampleInput,
    pub warnings: Vec<InputWarning>,
}

/// Validate a form and resolve it into an engine input.
pub fn build_sample(form: &SampleForm) -> Result<ParsedSample, UscsError> {
    check_percent("passing_200", form.passing_200)?;
    check_percent("passing_4", form.passing_4)?;
    if form.liquid_limit < Decimal::ZERO {
        return Err(UscsError::BelowMinimum {
            field: "liquid_limit",
            value: form.liquid_limit,
            min: Decimal::ZERO,
        });
    }

    let mut warnings = Vec::new();

    if form.passing_200 > form.passing_4 {
        warnings.push(InputWarning::new(
            "passing_200",
            format!(
                "passing No. 200 ({}%) exceeds passing No. 4 ({}%); sand is taken as 0%",
                form.passing_200, form.passing_4
            ),
        ));
    }

    let plasticity_index =
        resolve_plasticity_index(form.liquid_limit, &form.plasticity, &mut warnings);
    let is_organic = is_organic(form.liquid_limit, form.liquid_limit_oven_dried);
    let gradation = resolve_gradation(form.gradation.as_ref(), &mut warnings);

    Ok(ParsedSample {
        sample: SampleInput {
            passing_200: form.passing_200,
            passing_4: form.passing_4,
            liquid_limit: form.liquid_limit,
            plasticity_index,
            is_organic,
            gradation,
        },
        warnings,
    })
}

fn check_percent(field: &'static str, value: Decimal) -> Result<(), UscsError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(UscsError::OutOfRange {
            field,
            value,
            min: Decimal::ZERO,
            max: Decimal::ONE_HUNDRED,
        });
    }
    Ok(())
}

/// Resolve a PI entry against the liquid limit.
///
/// Unreadable PI text, and a plastic limit that leaves no positive PI, fall
/// back to 0 (non-plastic) with a warning.
pub fn resolve_plasticity_index(
    liquid_limit: Decimal,
    entry: &PlasticityEntry,
    warnings: &mut Vec<InputWarning>,
) -> Decimal {
    match entry {
        PlasticityEntry::PlasticityIndex(text) => match parse_plasticity_index(text) {
            Ok(value) => value.numeric(),
            Err(e) => {
                warnings.push(InputWarning::new(
                    "plasticity_index",
                    format!("{e}; using 0 (non-plastic)"),
                ));
                Decimal::ZERO
            }
        },
        PlasticityEntry::PlasticLimit(pl) => match liquid_limit.checked_sub(*pl) {
            Some(pi) if pi >= Decimal::ZERO => pi,
            Some(_) => {
                warnings.push(InputWarning::new(
                    "plastic_limit",
                    format!(
                        "plastic limit {} exceeds liquid limit {}; using PI 0 (non-plastic)",
                        pl, liquid_limit
                    ),
                ));
                Decimal::ZERO
            }
            None => {
                warnings.push(InputWarning::new(
                    "plastic_limit",
                    format!("plastic limit {pl} is out of range; using PI 0 (non-plastic)"),
                ));
                Decimal::ZERO
            }
        },
    }
}

/// Organic when oven-dried LL / air-dried LL < 0.75. Needs both limits positive.
pub fn is_organic(liquid_limit: Decimal, oven_dried: Option<Decimal>) -> bool {
    match oven_dried {
        Some(oven) if oven > Decimal::ZERO && liquid_limit > Decimal::ZERO => {
            oven
                .checked_div(liquid_limit)
                .is_some_and(|ratio| ratio < ORGANIC_RATIO)
        }
        _ => false,
    }
}

fn resolve_gradation(
    entry: Option<&GradationEntry>,
    warnings: &mut Vec<InputWarning>,
) -> Option<Gradation> {
    match entry? {
        GradationEntry::Coefficients { cu, cc } => Some(Gradation::new(*cu, *cc)),
        GradationEntry::GrainSizes { d10, d30, d60 } => {
            let gradation = Gradation::from_grain_sizes(*d10, *d30, *d60);
            if gradation.is_none() {
                warnings.push(InputWarning::new(
                    "gradation",
                    "unusable grain sizes (D10 and D60 must be > 0); gradation ignored",
                ));
            }
            gradation
        }
    }
}

/// Load a sample form from a JSON file.
pub fn load_form(path: &Path) -> Result<SampleForm, UscsError> {
    let content = std::fs::read_to_string(path).map_err(|e| UscsError::InputLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| UscsError::InputLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Parse a sample form from a JSON string.
pub fn parse_form_str(json: &str) -> Result<SampleForm, UscsError> {
    serde_json::from_str(json).map_err(UscsError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn form(pi: &str) -> SampleForm {
        SampleForm {
            passing_200: dec!(18),
            passing_4: dec!(100),
            liquid_limit: dec!(35),
            plasticity: PlasticityEntry::PlasticityIndex(pi.into()),
            liquid_limit_oven_dried: None,
            gradation: None,
        }
    }

    #[test]
    fn test_plain_form() {
        let parsed = build_sample(&form("5")).unwrap();
        assert_eq!(parsed.sample.plasticity_index, dec!(5));
        assert!(!parsed.sample.is_organic);
        assert!(parsed.sample.gradation.is_none());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_non_plastic_entry_is_zero_without_warning() {
        let parsed = build_sample(&form("NP")).unwrap();
        assert_eq!(parsed.sample.plasticity_index, dec!(0));
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_unparsable_pi_falls_back_to_zero() {
        let parsed = build_sample(&form("five")).unwrap();
        assert_eq!(parsed.sample.plasticity_index, dec!(0));
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].field, "plasticity_index");
    }

    #[test]
    fn test_pi_from_plastic_limit() {
        let mut f = form("0");
        f.plasticity = PlasticityEntry::PlasticLimit(dec!(22));
        let parsed = build_sample(&f).unwrap();
        assert_eq!(parsed.sample.plasticity_index, dec!(13));
    }

    #[test]
    fn test_plastic_limit_above_liquid_limit() {
        let mut f = form("0");
        f.plasticity = PlasticityEntry::PlasticLimit(dec!(40));
        let parsed = build_sample(&f).unwrap();
        assert_eq!(parsed.sample.plasticity_index, dec!(0));
        assert_eq!(parsed.warnings[0].field, "plastic_limit");
    }

    #[test]
    fn test_plastic_limit_out_of_range_falls_back() {
        let mut warnings = Vec::new();
        let pi = resolve_plasticity_index(
            Decimal::MAX,
            &PlasticityEntry::PlasticLimit(Decimal::MIN),
            &mut warnings,
        );
        assert_eq!(pi, dec!(0));
        assert_eq!(warnings[0].field, "plastic_limit");
    }

    #[test]
    fn test_resolve_plasticity_index_entries() {
        let mut warnings = Vec::new();
        let pi = resolve_plasticity_index(
            dec!(40),
            &PlasticityEntry::PlasticLimit(dec!(18)),
            &mut warnings,
        );
        assert_eq!(pi, dec!(22));
        let pi = resolve_plasticity_index(
            dec!(40),
            &PlasticityEntry::PlasticityIndex("N.P.".into()),
            &mut warnings,
        );
        assert_eq!(pi, dec!(0));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_sieve_out_of_range_rejected() {
        let mut f = form("5");
        f.passing_4 = dec!(100.5);
        let err = build_sample(&f).unwrap_err();
        assert!(matches!(err, UscsError::OutOfRange { field: "passing_4", .. }));

        let mut f = form("5");
        f.passing_200 = dec!(-1);
        assert!(build_sample(&f).is_err());
    }

    #[test]
    fn test_negative_liquid_limit_rejected() {
        let mut f = form("5");
        f.liquid_limit = dec!(-1);
        assert!(matches!(
            build_sample(&f),
            Err(UscsError::BelowMinimum { field: "liquid_limit", .. })
        ));
    }

    #[test]
    fn test_out_of_order_sieves_warn() {
        let mut f = form("5");
        f.passing_4 = dec!(10);
        let parsed = build_sample(&f).unwrap();
        assert_eq!(parsed.warnings[0].field, "passing_200");
    }

    #[test]
    fn test_organic_ratio() {
        assert!(is_organic(dec!(60), Some(dec!(44))));
        // 45 / 60 = 0.75 exactly is not organic
        assert!(!is_organic(dec!(60), Some(dec!(45))));
        assert!(!is_organic(dec!(60), Some(dec!(0))));
        assert!(!is_organic(dec!(0), Some(dec!(10))));
        assert!(!is_organic(dec!(60), None));
        // ratio too large to represent
        assert!(!is_organic(dec!(0.0001), Some(Decimal::MAX)));
    }

    #[test]
    fn test_gradation_from_coefficients() {
        let mut f = form("5");
        f.gradation = Some(GradationEntry::Coefficients {
            cu: dec!(7),
            cc: dec!(1.4),
        });
        let parsed = build_sample(&f).unwrap();
        assert_eq!(parsed.sample.gradation, Some(Gradation::new(dec!(7), dec!(1.4))));
    }

    #[test]
    fn test_gradation_from_grain_sizes() {
        let mut f = form("5");
        f.gradation = Some(GradationEntry::GrainSizes {
            d10: dec!(0.1),
            d30: dec!(0.3),
            d60: dec!(0.9),
        });
        let g = build_sample(&f).unwrap().sample.gradation.unwrap();
        assert_eq!(g.cu, dec!(9));
        assert_eq!(g.cc, dec!(1));
    }

    #[test]
    fn test_zero_d10_skips_gradation_with_warning() {
        let mut f = form("5");
        f.gradation = Some(GradationEntry::GrainSizes {
            d10: dec!(0),
            d30: dec!(0.3),
            d60: dec!(0.9),
        });
        let parsed = build_sample(&f).unwrap();
        assert!(parsed.sample.gradation.is_none());
        assert_eq!(parsed.warnings[0].field, "gradation");
    }

    #[test]
    fn test_oversized_grain_sizes_skip_gradation_with_warning() {
        let big = dec!(1000000000000000);
        let mut f = form("5");
        f.gradation = Some(GradationEntry::GrainSizes {
            d10: big,
            d30: big,
            d60: big,
        });
        let parsed = build_sample(&f).unwrap();
        assert!(parsed.sample.gradation.is_none());
        assert_eq!(parsed.warnings[0].field, "gradation");
    }

    #[test]
    fn test_parse_form_json() {
        let json = r#"{
            "passing_200": "8",
            "passing_4": "92.5",
            "liquid_limit": "30",
            "plasticity": { "plasticity_index": "NP" },
            "gradation": { "grain_sizes": { "d10": "0.08", "d30": "0.4", "d60": "1.2" } }
        }"#;
        let f = parse_form_str(json).unwrap();
        assert_eq!(f.passing_4, dec!(92.5));
        assert_eq!(f.plasticity, PlasticityEntry::PlasticityIndex("NP".into()));
        assert!(f.liquid_limit_oven_dried.is_none());
    }

    #[test]
    fn test_parse_form_missing_field_rejected() {
        let json = r#"{ "passing_200": "8", "liquid_limit": "30" }"#;
        assert!(parse_form_str(json).is_err());
    }
}
