use rust_decimal::Decimal;
use uscs_core::error::UscsError;

use crate::output;

pub fn run(
    liquid_limit: Decimal,
    pi: Option<String>,
    pl: Option<Decimal>,
    output_format: &str,
) -> Result<(), UscsError> {
    let plasticity_index = super::plasticity_index(liquid_limit, pi, pl);
    let chart = uscs_core::build_chart_geometry(liquid_limit, plasticity_index);

    match output_format {
        "json" => output::json::print(&chart)?,
        _ => output::table::print_chart(&chart),
    }

    Ok(())
}
