use std::path::PathBuf;
use uscs_core::error::UscsError;
use uscs_core::parsing::{self, GradationEntry, SampleForm};
use uscs_core::{ClassifyOptions, GradationPolicy};

use crate::output;
use crate::SampleArgs;

pub fn run(
    input_file: Option<PathBuf>,
    args: SampleArgs,
    strict_gradation: bool,
    output_format: &str,
    verbose: bool,
) -> Result<(), UscsError> {
    let form = match input_file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading sample form");
            parsing::load_form(&path)?
        }
        None => form_from_args(args)?,
    };

    let options = ClassifyOptions {
        gradation_policy: if strict_gradation {
            GradationPolicy::Require
        } else {
            GradationPolicy::AssumePoorlyGraded
        },
    };

    let report = uscs_core::classify_form(&form, &options)?;

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print(&report, verbose),
    }

    Ok(())
}

/// Build a form from command-line flags. Without --pi or --pl the sample is
/// taken as non-plastic.
fn form_from_args(args: SampleArgs) -> Result<SampleForm, UscsError> {
    let passing_200 = args.p200.ok_or_else(|| missing("--p200"))?;
    let passing_4 = args.p4.ok_or_else(|| missing("--p4"))?;
    let liquid_limit = args.ll.ok_or_else(|| missing("--ll"))?;

    let plasticity = super::plasticity_entry(args.pi, args.pl);

    let gradation = match (args.cu, args.cc, args.d10, args.d30, args.d60) {
        (Some(cu), Some(cc), _, _, _) => Some(GradationEntry::Coefficients { cu, cc }),
        (_, _, Some(d10), Some(d30), Some(d60)) => {
            Some(GradationEntry::GrainSizes { d10, d30, d60 })
        }
        _ => None,
    };

    Ok(SampleForm {
        passing_200,
        passing_4,
        liquid_limit,
        plasticity,
        liquid_limit_oven_dried: args.ll_oven,
        gradation,
    })
}

fn missing(flag: &str) -> UscsError {
    UscsError::ParseError(format!(
        "{flag} is required when no sample file is given"
    ))
}
