use uscs_core::chart::ChartData;
use uscs_core::classify::outcome::SampleReport;

pub fn print(report: &SampleReport, verbose: bool) {
    let result = &report.result;

    println!("=== USCS Classification (ASTM D2487) ===\n");

    println!("  Group symbol: {}", result.group_symbol);
    println!("  Group name:   {}", result.group_name);
    println!();
    println!("  Components: {}", result.components);
    println!("  Path:       {}", result.path);

    if result.gradation_assumed {
        println!("  Note: no Cu/Cc given, gradation assumed poorly graded (P)");
    }
    println!();

    if result.plasticity.above_u_line {
        println!(
            "  Warning: point (LL {}, PI {}) plots above the U-Line (PI max {}).",
            result.plasticity.liquid_limit,
            result.plasticity.plasticity_index,
            result.plasticity.u_line
        );
        println!("  This usually indicates an error in the test data.\n");
    }

    if !report.warnings.is_empty() {
        println!("  Input warnings:");
        for w in &report.warnings {
            println!("    {}: {}", w.field, w.reason);
        }
        println!();
    }

    if verbose {
        println!("  Decision steps:");
        for (i, step) in result.steps.iter().enumerate() {
            println!("    {:>2}. {}", i + 1, step.message);
        }
        println!();
    }
}

pub fn print_chart(chart: &ChartData) {
    println!("=== Plasticity Chart ===\n");

    println!("  Axes: LL 0..{}, PI 0..{}", chart.x_max, chart.y_max);
    println!(
        "  Curves: A-Line and U-Line, {} points each",
        chart.a_line.len()
    );
    println!("  Divider: LL = {}", chart.divider[0].x);

    match (chart.cl_ml_zone.first(), chart.cl_ml_zone.last()) {
        (Some(first), Some(last)) => println!(
            "  CL-ML zone: LL {}..{} ({} slices), PI between max(A-Line, 4) and 7",
            first.x,
            last.x,
            chart.cl_ml_zone.len()
        ),
        _ => println!("  CL-ML zone: none"),
    }
    println!();

    println!("  Region labels:");
    let max_text = chart
        .labels
        .iter()
        .map(|l| l.text.len())
        .max()
        .unwrap_or(8);
    for label in &chart.labels {
        println!(
            "    {:<width$}  at LL {}, PI {}",
            label.text,
            label.at.x,
            label.at.y,
            width = max_text
        );
    }
    println!();

    let marker = if chart.sample_above_u_line {
        " (above U-Line)"
    } else {
        ""
    };
    println!(
        "  Sample: LL {}, PI {}{}",
        chart.sample.x, chart.sample.y, marker
    );
    println!();
}
