//! bomcost: price a PCB bill of materials against the DigiKey catalog
//!
//! One-shot batch tool: read a BOM CSV export, decode each line into a
//! canonical part identifier, resolve pricing and availability through
//! the cached catalog API, and print a priced report (optionally plus a
//! spreadsheet for the contract manufacturer).

pub mod bom;
pub mod catalog;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
