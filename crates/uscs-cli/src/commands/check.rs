use rust_decimal::Decimal;
use uscs_core::error::UscsError;
use uscs_core::plasticity::PlasticityCheck;

pub fn run(
    liquid_limit: Decimal,
    pi: Option<String>,
    pl: Option<Decimal>,
) -> Result<(), UscsError> {
    let plasticity_index = super::plasticity_index(liquid_limit, pi, pl);
    let check = PlasticityCheck::evaluate(liquid_limit, plasticity_index);

    println!(
        "Point (LL {}, PI {}): A-Line PI {}, U-Line PI {}",
        check.liquid_limit, check.plasticity_index, check.a_line, check.u_line
    );

    if check.above_u_line {
        println!("  Warning: the point plots above the U-Line.");
        println!("  Natural soils generally do not plot in this region; verify the");
        println!("  liquid limit and plastic limit values.");
    } else {
        let side = if check.on_or_above_a_line {
            "on or above"
        } else {
            "below"
        };
        println!("  OK: on or below the U-Line, {side} the A-Line.");
    }

    Ok(())
}
