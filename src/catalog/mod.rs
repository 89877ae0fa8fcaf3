//! Distributor catalog access - HTTP client, disk cache, offer selection

pub mod cache;
pub mod client;
pub mod model;
pub mod select;

pub use cache::{CacheStats, DiskCache};
pub use client::{CatalogClient, ProductInfo};
pub use select::Offer;
