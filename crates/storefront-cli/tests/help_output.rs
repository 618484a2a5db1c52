mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_main_help_lists_commands() {
    TestFixture::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn test_list_help_shows_sort_values() {
    TestFixture::new()
        .command()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("price-asc"))
        .stdout(predicate::str::contains("title-desc"))
        .stdout(predicate::str::contains("--category"));
}
