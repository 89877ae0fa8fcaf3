//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// Helper to get a bomcost command with an isolated cache directory.
///
/// Dummy API credentials are injected so `price` never complains about
/// missing env vars; offline tests must never reach the token endpoint.
pub fn bomcost(tmp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("bomcost"));
    cmd.env("BOMCOST_CACHE_DIR", tmp.path().join("cache"))
        .env("DIGIKEY_CLIENT_ID", "test-client")
        .env("DIGIKEY_CLIENT_SECRET", "test-secret")
        // Unroutable host: any accidental network call fails fast
        .env("DIGIKEY_API_URL", "http://127.0.0.1:1");
    cmd
}

/// Write a BOM CSV into the temp dir and return its path
pub fn write_bom(tmp: &TempDir, content: &str) -> PathBuf {
    let path = tmp.path().join("bom.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// Seed a cached search response so `price` can resolve a part offline
pub fn seed_search(tmp: &TempDir, keyword: &str, response: &serde_json::Value) {
    let cache = bomcost::catalog::DiskCache::open(tmp.path().join("cache")).unwrap();
    cache.store_search(keyword, response).unwrap();
}

/// A minimal single-product search response with one in-stock offer
pub fn catalog_response(mpn: &str, unit_price: f64, available: u32) -> serde_json::Value {
    serde_json::json!({
        "ExactMatches": [],
        "Products": [{
            "ManufacturerProductNumber": mpn,
            "Description": {"ProductDescription": format!("{} catalog description", mpn)},
            "Manufacturer": {"Name": "Test Mfr"},
            "ProductVariations": [{
                "DigiKeyProductNumber": format!("{}-ND", mpn),
                "QuantityAvailableforPackageType": available,
                "MinimumOrderQuantity": 1,
                "StandardPricing": [{"BreakQuantity": 1, "UnitPrice": unit_price}]
            }]
        }]
    })
}
