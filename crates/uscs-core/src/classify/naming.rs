use crate::model::{GroupSymbol, SoilComponents};
use rust_decimal::Decimal;

/// Returned when a symbol has no coarse-grained name. Seeing this means the
/// symbol set and the name table have drifted apart.
pub const UNKNOWN_SOIL_NAME: &str = "Unknown Soil Name";

/// Base name for symbols outside the fine-grained table.
pub const GENERIC_SOIL_NAME: &str = "Soil";

const FIFTEEN: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
const THIRTY: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Base name of a fine-grained symbol, `None` for coarse symbols.
pub fn fine_base_name(symbol: GroupSymbol) -> Option<&'static str> {
    match symbol {
        GroupSymbol::Cl => Some("Lean clay"),
        GroupSymbol::Ml => Some("Silt"),
        GroupSymbol::Ol => Some("Organic silt"),
        GroupSymbol::Ch => Some("Fat clay"),
        GroupSymbol::Mh => Some("Elastic silt"),
        GroupSymbol::Oh => Some("Organic clay"),
        GroupSymbol::ClMl => Some("Silty clay"),
        _ => None,
    }
}

/// Group name for a fine-grained soil, qualified by its coarse fraction.
pub fn fine_group_name(symbol: GroupSymbol, components: &SoilComponents) -> String {
    let base = fine_base_name(symbol).unwrap_or(GENERIC_SOIL_NAME);
    let plus_200 = components.plus_200();
    let sand_dominant = components.sand >= components.gravel;

    if plus_200 < FIFTEEN {
        return base.to_string();
    }

    if plus_200 < THIRTY {
        return if sand_dominant {
            format!("{base} with sand")
        } else {
            format!("{base} with gravel")
        };
    }

    let lower = base.to_lowercase();
    if sand_dominant {
        if components.gravel < FIFTEEN {
            format!("Sandy {lower}")
        } else {
            format!("Sandy {lower} with gravel")
        }
    } else if components.sand < FIFTEEN {
        format!("Gravelly {lower}")
    } else {
        format!("Gravelly {lower} with sand")
    }
}

/// Which minor coarse fraction switches a coarse name to its qualified form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    /// Sands: 15% or more gravel.
    Gravel,
    /// Gravels: 15% or more sand.
    Sand,
}

struct CoarseName {
    plain: &'static str,
    qualified: &'static str,
    gate: Gate,
}

const fn sand(plain: &'static str, qualified: &'static str) -> CoarseName {
    CoarseName {
        plain,
        qualified,
        gate: Gate::Gravel,
    }
}

const fn gravel(plain: &'static str, qualified: &'static str) -> CoarseName {
    CoarseName {
        plain,
        qualified,
        gate: Gate::Sand,
    }
}

fn coarse_name(symbol: GroupSymbol) -> Option<CoarseName> {
    let name = match symbol {
        GroupSymbol::ScSm => sand("Silty clayey sand", "Silty clayey sand with gravel"),
        GroupSymbol::GcGm => gravel("Silty clayey gravel", "Silty clayey gravel with sand"),

        GroupSymbol::SwSm => sand(
            "Well-graded sand with silt",
            "Well-graded sand with silt and gravel",
        ),
        GroupSymbol::SwSc => sand(
            "Well-graded sand with clay",
            "Well-graded sand with clay and gravel",
        ),
        GroupSymbol::SpSm => sand(
            "Poorly graded sand with silt",
            "Poorly graded sand with silt and gravel",
        ),
        GroupSymbol::SpSc => sand(
            "Poorly graded sand with clay",
            "Poorly graded sand with clay and gravel",
        ),
        GroupSymbol::GwGm => gravel(
            "Well-graded gravel with silt",
            "Well-graded gravel with silt and sand",
        ),
        GroupSymbol::GwGc => gravel(
            "Well-graded gravel with clay",
            "Well-graded gravel with clay and sand",
        ),
        GroupSymbol::GpGm => gravel(
            "Poorly graded gravel with silt",
            "Poorly graded gravel with silt and sand",
        ),
        GroupSymbol::GpGc => gravel(
            "Poorly graded gravel with clay",
            "Poorly graded gravel with clay and sand",
        ),

        GroupSymbol::Gw => gravel("Well-graded gravel", "Well-graded gravel with sand"),
        GroupSymbol::Gp => gravel("Poorly graded gravel", "Poorly graded gravel with sand"),
        GroupSymbol::Gm => gravel("Silty gravel", "Silty gravel with sand"),
        GroupSymbol::Gc => gravel("Clayey gravel", "Clayey gravel with sand"),
        GroupSymbol::Sw => sand("Well-graded sand", "Well-graded sand with gravel"),
        GroupSymbol::Sp => sand("Poorly graded sand", "Poorly graded sand with gravel"),
        GroupSymbol::Sm => sand("Silty sand", "Silty sand with gravel"),
        GroupSymbol::Sc => sand("Clayey sand", "Clayey sand with gravel"),

        GroupSymbol::Cl
        | GroupSymbol::Ml
        | GroupSymbol::Ol
        | GroupSymbol::Ch
        | GroupSymbol::Mh
        | GroupSymbol::Oh
        | GroupSymbol::ClMl => return None,
    };
    Some(name)
}

/// Group name for a coarse-grained soil.
///
/// Fine-grained symbols have no entry and give [`UNKNOWN_SOIL_NAME`].
pub fn coarse_group_name(symbol: GroupSymbol, gravel_pct: Decimal, sand_pct: Decimal) -> String {
    let Some(name) = coarse_name(symbol) else {
        tracing::error!(%symbol, "no coarse-grained name for symbol");
        return UNKNOWN_SOIL_NAME.to_string();
    };
    let qualified = match name.gate {
        Gate::Gravel => gravel_pct >= FIFTEEN,
        Gate::Sand => sand_pct >= FIFTEEN,
    };
    if qualified {
        name.qualified.to_string()
    } else {
        name.plain.to_string()
    }
}

/// Coarse group name for a symbol given as text, e.g. from a lab sheet.
///
/// Text that is not a coarse USCS symbol gives [`UNKNOWN_SOIL_NAME`].
pub fn coarse_group_name_for(symbol: &str, gravel_pct: Decimal, sand_pct: Decimal) -> String {
    match GroupSymbol::from_symbol(symbol) {
        Some(sym) => coarse_group_name(sym, gravel_pct, sand_pct),
        None => {
            tracing::error!(symbol, "unrecognized group symbol");
            UNKNOWN_SOIL_NAME.to_string()
        }
    }
}

/// Group name for any symbol, picking the resolver by the symbol's path.
pub fn group_name(symbol: GroupSymbol, components: &SoilComponents) -> String {
    if symbol.is_fine_grained() {
        fine_group_name(symbol, components)
    } else {
        coarse_group_name(symbol, components.gravel, components.sand)
    }
}
