use serde::Serialize;
use std::io::Write;
use uscs_core::error::UscsError;

pub fn print<T: Serialize>(value: &T) -> Result<(), UscsError> {
    write(&mut std::io::stdout().lock(), value)
}

/// Pretty JSON followed by a newline. A closed pipe surfaces as an IO error.
pub fn write<T: Serialize, W: Write>(out: &mut W, value: &T) -> Result<(), UscsError> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}
