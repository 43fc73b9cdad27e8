use crate::model::{GroupSymbol, SampleInput, SoilComponents};
use crate::parsing::InputWarning;
use crate::plasticity::PlasticityCheck;
use crate::trace::TraceStep;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the classification chart a sample went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilPath {
    /// 50% or more passing the No. 200 sieve.
    FineGrained,
    CoarseGrained,
}

impl fmt::Display for SoilPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoilPath::FineGrained => write!(f, "fine-grained"),
            SoilPath::CoarseGrained => write!(f, "coarse-grained"),
        }
    }
}

/// Classification of a single sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// USCS group symbol (e.g., "CL", "SW-SM").
    pub group_symbol: GroupSymbol,
    /// Descriptive group name (e.g., "Sandy lean clay").
    pub group_name: String,
    pub path: SoilPath,
    pub components: SoilComponents,
    /// A-Line/U-Line position; `above_u_line` is advisory and does not
    /// affect the symbol.
    pub plasticity: PlasticityCheck,
    /// True when gradation was needed but missing, so "poorly graded" was assumed.
    pub gradation_assumed: bool,
    /// Decisions taken, in order.
    pub steps: Vec<TraceStep>,
}

/// A form run through input collection and classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleReport {
    pub input: SampleInput,
    pub result: ClassificationResult,
    /// Input problems that were resolved by falling back to defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<InputWarning>,
}
