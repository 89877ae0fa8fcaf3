//! End-to-end tests for the `price` command
//!
//! All runs are offline: parts that need catalog data are served from a
//! pre-seeded search cache, and the API base URL points at an
//! unroutable host so a cache miss fails loudly.

mod common;

use common::{bomcost, catalog_response, seed_search, write_bom};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_price_dni_only_bom() {
    let tmp = TempDir::new().unwrap();
    let bom = write_bom(
        &tmp,
        "Comment,Designator,LCSC\n\
         Do not populate,\"J5, J6\",\n",
    );

    bomcost(&tmp)
        .args(["price", "--bom"])
        .arg(&bom)
        .assert()
        .success()
        .stdout(predicate::str::contains("DNI"))
        .stdout(predicate::str::contains("Do not install"))
        .stdout(predicate::str::contains(
            "Total Price: $0.00 ($0.00/board * 1 boards)",
        ));
}

#[test]
fn test_price_resolves_from_seeded_cache() {
    let tmp = TempDir::new().unwrap();
    // 10kΩ resistor decodes to ERJ-2RKF1002X; 2 designators * 5 boards = 10
    seed_search(&tmp, "ERJ-2RKF1002X", &catalog_response("ERJ-2RKF1002X", 0.02, 50000));

    let bom = write_bom(
        &tmp,
        "Comment,Designator,LCSC\n\
         \"Chip Resistor ±1% 10kΩ 0402\",\"R1, R2\",C25744\n",
    );

    bomcost(&tmp)
        .args(["price", "--boards", "5", "--bom"])
        .arg(&bom)
        .assert()
        .success()
        .stdout(predicate::str::contains("ERJ-2RKF1002X"))
        .stdout(predicate::str::contains("$0.20"))
        .stdout(predicate::str::contains(
            "Total Price: $0.20 ($0.04/board * 5 boards)",
        ));
}

#[test]
fn test_price_sorts_by_descending_total() {
    let tmp = TempDir::new().unwrap();
    seed_search(&tmp, "CHEAP-PART", &catalog_response("CHEAP-PART", 0.10, 1000));
    seed_search(&tmp, "PRICY-PART", &catalog_response("PRICY-PART", 4.00, 1000));

    let bom = write_bom(
        &tmp,
        "Comment,Designator,LCSC\n\
         Cheap widget,R1,CHEAP-PART\n\
         Pricy widget,U1,PRICY-PART\n",
    );

    let output = bomcost(&tmp)
        .args(["price", "--bom"])
        .arg(&bom)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let pricy = stdout.find("PRICY-PART").unwrap();
    let cheap = stdout.find("CHEAP-PART").unwrap();
    assert!(pricy < cheap, "expected PRICY-PART before CHEAP-PART");
}

#[test]
fn test_price_writes_spreadsheet() {
    let tmp = TempDir::new().unwrap();
    let bom = write_bom(&tmp, "Comment,Designator,LCSC\nDo not populate,J1,\n");
    let sheet = tmp.path().join("cm_bom.xlsx");

    bomcost(&tmp)
        .args(["price", "--bom"])
        .arg(&bom)
        .arg("--sheet")
        .arg(&sheet)
        .assert()
        .success();

    let metadata = std::fs::metadata(&sheet).unwrap();
    assert!(metadata.len() > 0, "spreadsheet should not be empty");
}

#[test]
fn test_price_missing_bom_file() {
    let tmp = TempDir::new().unwrap();

    bomcost(&tmp)
        .args(["price", "--bom", "does_not_exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BOM file not found"));
}

#[test]
fn test_price_missing_column() {
    let tmp = TempDir::new().unwrap();
    let bom = write_bom(&tmp, "Comment,Designator\nSome part,R1\n");

    bomcost(&tmp)
        .args(["price", "--bom"])
        .arg(&bom)
        .assert()
        .failure();
}

#[test]
fn test_price_undecodable_resistor_aborts() {
    let tmp = TempDir::new().unwrap();
    let bom = write_bom(
        &tmp,
        "Comment,Designator,LCSC\n\
         \"Resistor, no markings\",R1,C1\n",
    );

    bomcost(&tmp)
        .args(["price", "--bom"])
        .arg(&bom)
        .assert()
        .failure()
        .stderr(predicate::str::contains("resistor comment"));
}

#[test]
fn test_price_no_match_aborts() {
    let tmp = TempDir::new().unwrap();
    seed_search(
        &tmp,
        "GHOST-PART",
        &serde_json::json!({"ExactMatches": [], "Products": []}),
    );
    let bom = write_bom(&tmp, "Comment,Designator,LCSC\nGhost widget,U1,GHOST-PART\n");

    bomcost(&tmp)
        .args(["price", "--bom"])
        .arg(&bom)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No products found"));
}

#[test]
fn test_price_alias_is_chased_before_lookup() {
    let tmp = TempDir::new().unwrap();
    // C2040 resolves through the alias table to SC0914(13)
    seed_search(&tmp, "SC0914(13)", &catalog_response("SC0914(13)", 0.80, 2000));

    let bom = write_bom(&tmp, "Comment,Designator,LCSC\nRP2040 MCU,U1,C2040\n");

    bomcost(&tmp)
        .args(["price", "--bom"])
        .arg(&bom)
        .assert()
        .success()
        .stdout(predicate::str::contains("SC0914(13)"))
        .stdout(predicate::str::contains("$0.80"));
}
