//! Crate-wide error type

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a pricing run
#[derive(Debug, Error)]
pub enum BomError {
    #[error("BOM file not found: {}", .0.display())]
    BomNotFound(PathBuf),

    #[error("Failed to read BOM: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not decode resistor comment: '{0}'")]
    ResistorComment(String),

    #[error("No ERJ code for resistor value '{0}'")]
    UnknownResistorValue(String),

    #[error("No ERJ series for footprint '{0}'")]
    UnknownResistorFootprint(String),

    #[error("Could not decode capacitor comment: '{0}'")]
    CapacitorComment(String),

    #[error("No capacitor mapping for {voltage}V {value} {dielectric} ±{tolerance}% {footprint}")]
    UnknownCapacitor {
        voltage: String,
        value: String,
        dielectric: String,
        tolerance: u32,
        footprint: String,
    },

    #[error("No products found for '{0}'")]
    NoMatch(String),

    #[error("Multiple products found for '{0}'")]
    AmbiguousMatch(String),

    #[error("Catalog request failed ({status}): {body}")]
    ApiStatus { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No cache directory available on this platform")]
    NoCacheDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, BomError>;
