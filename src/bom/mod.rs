//! BOM ingestion - CSV export reading and the line model

pub mod reader;

pub use reader::{read_bom, BomLine};
