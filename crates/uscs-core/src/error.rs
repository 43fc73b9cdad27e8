use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum UscsError {
    #[error("failed to parse input: {0}")]
    ParseError(String),

    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        value: Decimal,
        min: Decimal,
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("gradation (Cu/Cc or D10/D30/D60) is required for coarse-grained soil with {fines}% fines")]
    MissingGradation { fines: Decimal },

    #[error("'{0}' is not a USCS group symbol")]
    UnknownSymbol(String),

    #[error("failed to load sample from {}: {reason}", path.display())]
    InputLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
