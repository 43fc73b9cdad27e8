pub mod chart;
pub mod classify;
pub mod error;
pub mod model;
pub mod parsing;
pub mod plasticity;
pub mod rules;
pub mod trace;

pub use chart::{build_chart_geometry, ChartData};
pub use classify::{classify, classify_with, ClassifyOptions, GradationPolicy};
pub use plasticity::{a_line, check_plasticity_validity};

use classify::outcome::SampleReport;
use error::UscsError;
use parsing::SampleForm;

/// Main API entry point: validate a sample form and classify it.
///
/// Range violations in the form are errors. Entries that fell back to a
/// default are returned as warnings alongside the result.
pub fn classify_form(
    form: &SampleForm,
    options: &ClassifyOptions,
) -> Result<SampleReport, UscsError> {
    let parsed = parsing::build_sample(form)?;
    let result = classify_with(&parsed.sample, options)?;

    Ok(SampleReport {
        input: parsed.sample,
        result,
        warnings: parsed.warnings,
    })
}
