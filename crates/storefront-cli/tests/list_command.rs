mod common;

use common::TestFixture;
use predicates::prelude::*;
use storefront_testing::{CATALOG_JSON, CannedServer};

// The canned server runs on the runtime's worker threads while the test
// thread blocks on the child process.

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_filtered_catalog() {
    let server = CannedServer::start(200, CATALOG_JSON).await.unwrap();
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--endpoint", &server.endpoint()])
        .args(["--category", "electronics", "--sort", "price-desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("114.00"))
        .stdout(predicate::str::contains("64.00"))
        .stdout(predicate::str::contains("Fjallraven").not())
        .stdout(predicate::str::contains(
            "2 of 6 products (category: electronics, sort: price-desc)",
        ));

    assert_eq!(server.requests(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_is_in_derived_order() {
    let server = CannedServer::start(200, CATALOG_JSON).await.unwrap();
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["list", "--format", "json", "--sort", "price-asc"])
        .args(["--endpoint", &server.endpoint()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = json["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![18, 2, 9, 1, 12, 5]);
    assert_eq!(json["category"], "all");
    assert_eq!(json["sort"], "price-asc");
    assert_eq!(json["total"], 6);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_uses_config_defaults() {
    let server = CannedServer::start(200, CATALOG_JSON).await.unwrap();
    let fixture = TestFixture::new();
    fixture.write_config(&format!(
        "endpoint = \"{}\"\n\n[dashboard]\ndefault_category = \"jewelery\"\n",
        server.endpoint()
    ));

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("695.00"))
        .stdout(predicate::str::contains("1 of 6 products"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_server_error_fails_with_generic_message() {
    let server = CannedServer::start(500, "oops").await.unwrap();
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--endpoint", &server.endpoint()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to fetch products"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_malformed_body_fails_with_generic_message() {
    let server = CannedServer::start(200, "{\"not\": \"a list\"}").await.unwrap();
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--endpoint", &server.endpoint()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch products"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_rejects_unknown_sort() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["list", "--sort", "price"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'price'"));
}
