use rust_decimal::Decimal;
use uscs_core::classify::coarse::FINES_CHARACTER_RULES;
use uscs_core::classify::fine::FINE_GRAINED_RULES;
use uscs_core::classify::naming::{coarse_group_name, fine_base_name};
use uscs_core::error::UscsError;
use uscs_core::model::GroupSymbol;

pub fn symbols() -> Result<(), UscsError> {
    println!("USCS group symbols (ASTM D2487):\n");

    println!("  Fine-grained (50% or more passing No. 200):");
    for sym in GroupSymbol::ALL.iter().filter(|s| s.is_fine_grained()) {
        let name = fine_base_name(*sym).unwrap_or_default();
        println!("    {:<7} {}", sym, name);
    }
    println!();

    println!("  Coarse-grained (less than 50% passing No. 200):");
    for sym in GroupSymbol::ALL.iter().filter(|s| !s.is_fine_grained()) {
        let name = coarse_group_name(*sym, Decimal::ZERO, Decimal::ZERO);
        println!("    {:<7} {}", sym, name);
    }
    println!();

    Ok(())
}

pub fn rules() -> Result<(), UscsError> {
    println!("Classification rules (first match wins)\n");

    println!("Path: fine-grained when 50% or more passes the No. 200 sieve.\n");

    println!("{} symbols:", FINE_GRAINED_RULES.name);
    for (label, symbol) in FINE_GRAINED_RULES.entries() {
        println!("  {:<36} -> {}", label, symbol);
    }
    println!();

    println!("Coarse-grained prefix: G when gravel > sand, otherwise S.");
    println!("Gradation: W when Cu >= 4 (gravel) or 6 (sand) and 1 <= Cc <= 3,");
    println!("otherwise P. Missing Cu/Cc is read as P unless --strict-gradation.\n");

    println!("{}:", FINES_CHARACTER_RULES.name);
    for (label, fines) in FINES_CHARACTER_RULES.entries() {
        println!("  {:<36} -> {}", label, fines);
    }
    println!();

    println!("Symbol form by fines content:");
    println!("  fines < 5%          prefix + gradation          (e.g. SW, GP)");
    println!("  5% <= fines <= 12%  dual, M-C read as M          (e.g. SW-SM, GP-GC)");
    println!("  fines > 12%         prefix + fines, M-C as C-M   (e.g. SM, SC-SM)");
    println!();

    Ok(())
}
