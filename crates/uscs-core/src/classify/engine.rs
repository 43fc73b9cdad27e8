use crate::classify::coarse::classify_coarse_grained;
use crate::classify::components::calculate_components;
use crate::classify::fine::classify_fine_grained;
use crate::classify::naming::{self, UNKNOWN_SOIL_NAME};
use crate::classify::outcome::{ClassificationResult, SoilPath};
use crate::error::UscsError;
use crate::model::SampleInput;
use crate::plasticity::PlasticityCheck;
use crate::rules::PlasticityPoint;
use crate::trace::{Trace, TraceStepType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const FIFTY: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// What to do when a coarse-grained sample needs gradation and has none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradationPolicy {
    /// Treat the sample as poorly graded ("P").
    #[default]
    AssumePoorlyGraded,
    /// Refuse to classify without Cu/Cc.
    Require,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyOptions {
    #[serde(default)]
    pub gradation_policy: GradationPolicy,
}

/// Classify a sample per ASTM D2487.
///
/// Total and deterministic: missing gradation is read as poorly graded and
/// inconsistent sieve data is clamped.
pub fn classify(sample: &SampleInput) -> ClassificationResult {
    let mut trace = Trace::new();

    let components = calculate_components(sample.passing_200, sample.passing_4);
    trace.push(TraceStepType::Components, components.to_string());

    let limits = sample.limits();
    let point = PlasticityPoint::new(limits, sample.is_organic);

    let (path, group_symbol, gradation_assumed) = if components.fines >= FIFTY {
        trace.push(
            TraceStepType::BranchSelect,
            format!("{}% fines >= 50 -> fine-grained", components.fines),
        );
        let decision = classify_fine_grained(&point);
        trace.push(
            TraceStepType::FineGrainedRule,
            format!(
                "LL {}, PI {}, A-Line {}{}: {} -> {}",
                point.liquid_limit,
                point.plasticity_index,
                point.a_line,
                if point.is_organic { ", organic" } else { "" },
                decision.label,
                decision.outcome
            ),
        );
        (SoilPath::FineGrained, decision.outcome, false)
    } else {
        trace.push(
            TraceStepType::BranchSelect,
            format!("{}% fines < 50 -> coarse-grained", components.fines),
        );
        let decision = classify_coarse_grained(&components, &point, sample.gradation.as_ref());
        trace.push(
            TraceStepType::CoarsePrefix,
            format!(
                "gravel {}% vs sand {}% -> {} (Cu critical {})",
                components.gravel,
                components.sand,
                decision.kind.letter(),
                decision.kind.cu_critical()
            ),
        );
        if decision.band.uses_gradation() {
            let message = match &sample.gradation {
                Some(g) => format!("Cu {}, Cc {} -> {}", g.cu, g.cc, decision.grading.letter()),
                None => {
                    tracing::warn!("no gradation supplied, assuming poorly graded");
                    "no Cu/Cc supplied -> P (assumed)".to_string()
                }
            };
            trace.push(TraceStepType::Gradation, message);
        }
        if let Some(fines) = decision.fines_character {
            trace.push(
                TraceStepType::FinesCharacter,
                format!(
                    "PI {}, A-Line {}: {} -> {}",
                    point.plasticity_index, point.a_line, fines.label, fines.outcome
                ),
            );
        }
        trace.push(
            TraceStepType::SymbolCompose,
            format!("{:?} fines band -> {}", decision.band, decision.symbol),
        );
        (
            SoilPath::CoarseGrained,
            decision.symbol,
            decision.grading_assumed,
        )
    };

    let group_name = naming::group_name(group_symbol, &components);
    debug_assert_ne!(group_name, UNKNOWN_SOIL_NAME, "symbol without a name");
    trace.push(TraceStepType::GroupName, group_name.clone());

    let plasticity = PlasticityCheck::evaluate(limits.liquid_limit, limits.plasticity_index);
    if plasticity.above_u_line {
        tracing::warn!(
            ll = %limits.liquid_limit,
            pi = %limits.plasticity_index,
            "point plots above the U-Line"
        );
        trace.push(
            TraceStepType::PlasticityCheck,
            format!(
                "PI {} > U-Line {} at LL {}: likely erroneous data",
                limits.plasticity_index, plasticity.u_line, limits.liquid_limit
            ),
        );
    }

    tracing::debug!(symbol = %group_symbol, name = %group_name, "classified sample");

    ClassificationResult {
        group_symbol,
        group_name,
        path,
        components,
        plasticity,
        gradation_assumed,
        steps: trace.into_steps(),
    }
}

/// Classify a sample under explicit options.
pub fn classify_with(
    sample: &SampleInput,
    options: &ClassifyOptions,
) -> Result<ClassificationResult, UscsError> {
    let result = classify(sample);
    if result.gradation_assumed && options.gradation_policy == GradationPolicy::Require {
        return Err(UscsError::MissingGradation {
            fines: result.components.fines,
        });
    }
    Ok(result)
}
