use crate::error::UscsError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coefficients of uniformity (Cu) and curvature (Cc) of a grain-size curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradation {
    pub cu: Decimal,
    pub cc: Decimal,
}

impl Gradation {
    pub fn new(cu: Decimal, cc: Decimal) -> Self {
        Self { cu, cc }
    }

    /// Derive Cu = D60/D10 and Cc = D30²/(D10·D60) from grain sizes in mm.
    ///
    /// Returns `None` unless both D10 and D60 are strictly positive, or when
    /// the sizes are too large to divide out.
    pub fn from_grain_sizes(d10: Decimal, d30: Decimal, d60: Decimal) -> Option<Self> {
        if d10 <= Decimal::ZERO || d60 <= Decimal::ZERO {
            return None;
        }
        let cu = d60.checked_div(d10)?;
        let cc = d30.checked_mul(d30)?.checked_div(d10.checked_mul(d60)?)?;
        Some(Self { cu, cc })
    }
}

/// Liquid limit and plasticity index of the fine fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtterbergLimits {
    pub liquid_limit: Decimal,
    pub plasticity_index: Decimal,
}

/// Laboratory measurements for one soil sample.
///
/// Built fresh for each classification and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleInput {
    /// Percent of sample mass passing the No. 200 sieve.
    pub passing_200: Decimal,
    /// Percent of sample mass passing the No. 4 sieve.
    pub passing_4: Decimal,
    pub liquid_limit: Decimal,
    /// Plasticity index; non-plastic samples carry 0.
    pub plasticity_index: Decimal,
    /// Oven-dried to air-dried liquid limit ratio below 0.75.
    #[serde(default)]
    pub is_organic: bool,
    #[serde(default)]
    pub gradation: Option<Gradation>,
}

impl SampleInput {
    pub fn limits(&self) -> AtterbergLimits {
        AtterbergLimits {
            liquid_limit: self.liquid_limit,
            plasticity_index: self.plasticity_index,
        }
    }
}

/// Gravel, sand and fines percentages of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilComponents {
    pub gravel: Decimal,
    pub sand: Decimal,
    pub fines: Decimal,
}

impl SoilComponents {
    /// Percent retained on the No. 200 sieve.
    pub fn plus_200(&self) -> Decimal {
        Decimal::ONE_HUNDRED.saturating_sub(self.fines)
    }
}

impl fmt::Display for SoilComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gravel {:.1}% | sand {:.1}% | fines {:.1}%",
            self.gravel, self.sand, self.fines
        )
    }
}

/// The closed vocabulary of USCS group symbols produced by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupSymbol {
    #[serde(rename = "CL")]
    Cl,
    #[serde(rename = "ML")]
    Ml,
    #[serde(rename = "OL")]
    Ol,
    #[serde(rename = "CH")]
    Ch,
    #[serde(rename = "MH")]
    Mh,
    #[serde(rename = "OH")]
    Oh,
    #[serde(rename = "CL-ML")]
    ClMl,
    #[serde(rename = "GW")]
    Gw,
    #[serde(rename = "GP")]
    Gp,
    #[serde(rename = "GM")]
    Gm,
    #[serde(rename = "GC")]
    Gc,
    #[serde(rename = "SW")]
    Sw,
    #[serde(rename = "SP")]
    Sp,
    #[serde(rename = "SM")]
    Sm,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "GW-GM")]
    GwGm,
    #[serde(rename = "GW-GC")]
    GwGc,
    #[serde(rename = "GP-GM")]
    GpGm,
    #[serde(rename = "GP-GC")]
    GpGc,
    #[serde(rename = "SW-SM")]
    SwSm,
    #[serde(rename = "SW-SC")]
    SwSc,
    #[serde(rename = "SP-SM")]
    SpSm,
    #[serde(rename = "SP-SC")]
    SpSc,
    /// Silty clayey gravel; "GM-GC" is accepted as the same symbol.
    #[serde(rename = "GC-GM", alias = "GM-GC")]
    GcGm,
    /// Silty clayey sand; "SM-SC" is accepted as the same symbol.
    #[serde(rename = "SC-SM", alias = "SM-SC")]
    ScSm,
}

impl GroupSymbol {
    pub const ALL: [GroupSymbol; 25] = [
        GroupSymbol::Cl,
        GroupSymbol::Ml,
        GroupSymbol::Ol,
        GroupSymbol::Ch,
        GroupSymbol::Mh,
        GroupSymbol::Oh,
        GroupSymbol::ClMl,
        GroupSymbol::Gw,
        GroupSymbol::Gp,
        GroupSymbol::Gm,
        GroupSymbol::Gc,
        GroupSymbol::Sw,
        GroupSymbol::Sp,
        GroupSymbol::Sm,
        GroupSymbol::Sc,
        GroupSymbol::GwGm,
        GroupSymbol::GwGc,
        GroupSymbol::GpGm,
        GroupSymbol::GpGc,
        GroupSymbol::SwSm,
        GroupSymbol::SwSc,
        GroupSymbol::SpSm,
        GroupSymbol::SpSc,
        GroupSymbol::GcGm,
        GroupSymbol::ScSm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupSymbol::Cl => "CL",
            GroupSymbol::Ml => "ML",
            GroupSymbol::Ol => "OL",
            GroupSymbol::Ch => "CH",
            GroupSymbol::Mh => "MH",
            GroupSymbol::Oh => "OH",
            GroupSymbol::ClMl => "CL-ML",
            GroupSymbol::Gw => "GW",
            GroupSymbol::Gp => "GP",
            GroupSymbol::Gm => "GM",
            GroupSymbol::Gc => "GC",
            GroupSymbol::Sw => "SW",
            GroupSymbol::Sp => "SP",
            GroupSymbol::Sm => "SM",
            GroupSymbol::Sc => "SC",
            GroupSymbol::GwGm => "GW-GM",
            GroupSymbol::GwGc => "GW-GC",
            GroupSymbol::GpGm => "GP-GM",
            GroupSymbol::GpGc => "GP-GC",
            GroupSymbol::SwSm => "SW-SM",
            GroupSymbol::SwSc => "SW-SC",
            GroupSymbol::SpSm => "SP-SM",
            GroupSymbol::SpSc => "SP-SC",
            GroupSymbol::GcGm => "GC-GM",
            GroupSymbol::ScSm => "SC-SM",
        }
    }

    /// Look up a symbol by its printed form (case-insensitive, whitespace trimmed).
    pub fn from_symbol(s: &str) -> Option<GroupSymbol> {
        let upper = s.trim().to_uppercase();
        match upper.as_str() {
            "GM-GC" => return Some(GroupSymbol::GcGm),
            "SM-SC" => return Some(GroupSymbol::ScSm),
            _ => {}
        }
        GroupSymbol::ALL
            .iter()
            .copied()
            .find(|sym| sym.as_str() == upper)
    }

    /// True for the symbols of the fine-grained (≥ 50% fines) path.
    pub fn is_fine_grained(&self) -> bool {
        matches!(
            self,
            GroupSymbol::Cl
                | GroupSymbol::Ml
                | GroupSymbol::Ol
                | GroupSymbol::Ch
                | GroupSymbol::Mh
                | GroupSymbol::Oh
                | GroupSymbol::ClMl
        )
    }
}

impl fmt::Display for GroupSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for GroupSymbol {
    type Err = UscsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupSymbol::from_symbol(s).ok_or_else(|| UscsError::UnknownSymbol(s.trim().to_string()))
    }
}
