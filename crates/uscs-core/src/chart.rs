//! Plasticity chart geometry for an external renderer.
//!
//! Produces the A-Line and U-Line curves, the LL = 50 divider, the CL-ML
//! hatch band and region labels. Holds no classification logic of its own:
//! both curves come from [`crate::plasticity`].

use crate::plasticity::{
    a_line, a_line_unclamped, check_plasticity_validity, u_line, u_line_unclamped,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of evenly spaced LL samples along each curve.
pub const CHART_RESOLUTION: usize = 200;

const MIN_X_EXTENT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
const MIN_Y_EXTENT: Decimal = Decimal::from_parts(70, 0, 0, false, 0);
const EXTENT_MARGIN: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
const DIVIDER_LL: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const HATCH_MIN_LL: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
const HATCH_MAX_LL: Decimal = Decimal::from_parts(296, 0, 0, false, 1); // 29.6
const HATCH_FLOOR: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
const HATCH_CEILING: Decimal = Decimal::from_parts(7, 0, 0, false, 0);
const X_DECIMALS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: Decimal,
    pub y: Decimal,
}

/// A vertical slice of the CL-ML hatch band at one LL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HatchSpan {
    pub x: Decimal,
    pub lower: Decimal,
    pub upper: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabel {
    pub text: String,
    pub at: ChartPoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub x_max: Decimal,
    pub y_max: Decimal,
    pub a_line: Vec<ChartPoint>,
    pub u_line: Vec<ChartPoint>,
    /// The vertical LL = 50 divider, bottom to top.
    pub divider: [ChartPoint; 2],
    pub cl_ml_zone: Vec<HatchSpan>,
    pub labels: Vec<ChartLabel>,
    pub sample: ChartPoint,
    pub sample_above_u_line: bool,
}

/// Build the plasticity chart around a sample at (LL, PI).
pub fn build_chart_geometry(liquid_limit: Decimal, plasticity_index: Decimal) -> ChartData {
    let x_max = MIN_X_EXTENT.max(liquid_limit.saturating_add(EXTENT_MARGIN));
    let y_max = MIN_Y_EXTENT.max(plasticity_index.saturating_add(EXTENT_MARGIN));
    let xs = linspace(x_max, CHART_RESOLUTION);

    let curve = |f: fn(Decimal) -> Decimal| -> Vec<ChartPoint> {
        xs.iter().map(|&x| ChartPoint { x, y: f(x) }).collect()
    };

    let cl_ml_zone = xs
        .iter()
        .filter_map(|&x| {
            let a = a_line(x);
            let in_band = x > HATCH_MIN_LL && x < HATCH_MAX_LL && HATCH_CEILING > a;
            in_band.then(|| HatchSpan {
                x,
                lower: a.max(HATCH_FLOOR),
                upper: HATCH_CEILING,
            })
        })
        .collect();

    ChartData {
        x_max,
        y_max,
        a_line: curve(a_line),
        u_line: curve(u_line),
        divider: [
            ChartPoint {
                x: DIVIDER_LL,
                y: Decimal::ZERO,
            },
            ChartPoint {
                x: DIVIDER_LL,
                y: y_max,
            },
        ],
        cl_ml_zone,
        labels: region_labels(),
        sample: ChartPoint {
            x: liquid_limit,
            y: plasticity_index,
        },
        sample_above_u_line: check_plasticity_validity(liquid_limit, plasticity_index),
    }
}

/// `n` evenly spaced values from 0 to `end` inclusive.
///
/// Near the top of the Decimal range the step is taken first, which can
/// leave the last value a rounding step short of `end`.
fn linspace(end: Decimal, n: usize) -> Vec<Decimal> {
    if n < 2 {
        return vec![Decimal::ZERO];
    }
    let steps = Decimal::from(n - 1);
    (0..n)
        .map(|i| {
            let i = Decimal::from(i);
            let x = match end.checked_mul(i) {
                Some(scaled) => scaled / steps,
                None => (end / steps).saturating_mul(i).min(end),
            };
            x.round_dp(X_DECIMALS)
        })
        .collect()
}

/// Midway between the A-Line and U-Line (unclamped), where the upper labels sit.
fn mid_y(x: Decimal) -> Decimal {
    (a_line_unclamped(x) + u_line_unclamped(x)) / Decimal::TWO
}

fn region_labels() -> Vec<ChartLabel> {
    let label = |text: &str, x: i64, y: Decimal| ChartLabel {
        text: text.to_string(),
        at: ChartPoint {
            x: Decimal::from(x),
            y,
        },
    };
    vec![
        label("CH or OH", 77, mid_y(Decimal::from(75))),
        label("MH or OH", 75, Decimal::from(20)),
        label("CL or OL", 37, mid_y(Decimal::from(35))),
        label("ML or OL", 40, Decimal::from(6)),
        label("CL-ML", 25, Decimal::from(8)),
    ]
}
