#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `rl1` isolated from the user's config, preferences and environment.
fn rl1(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("rl1"));
    cmd.env("RL1_HOME", home.path())
        .env_remove("RL1_PAGE_SIZE")
        .env_remove("RL1_CATALOG_DIR")
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--config")
        .arg(home.path().join("rl1.toml"));
    cmd
}

#[test]
fn test_bare_invocation_lists_first_page() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name ▲"))
        .stdout(predicate::str::contains("Page 1 of"));
}

#[test]
fn test_list_search_and_empty_result() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["list", "--search", "dagger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smithscript Dagger"))
        .stdout(predicate::str::contains("Parrying Dagger").not());

    // Parrying Dagger needs 14 dexterity
    rl1(&home).args(["stats", "dex=14"]).assert().success();
    rl1(&home)
        .args(["list", "--search", "dagger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parrying Dagger"));

    rl1(&home)
        .args(["list", "--search", "no such weapon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items match the current filters."));
}

#[test]
fn test_list_rejects_unknown_labels() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["list", "--damage", "poison"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_page_past_the_end_warns() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["list", "--search", "dagger", "--page", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("past the last page"));
}

#[test]
fn test_show_reports_unmet_requirements() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["show", "Varré's", "Bouquet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arcane"))
        .stdout(predicate::str::contains("Requirements not met"));

    rl1(&home)
        .args(["show", "Nonexistent", "Blade"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item named"));
}

#[test]
fn test_stats_persist_between_runs() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["stats", "str=30", "arc=25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strength: 10 -> 30"));

    rl1(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Strength\s+30").unwrap())
        .stdout(predicate::str::is_match(r"Arcane\s+25").unwrap());

    rl1(&home)
        .args(["stats", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All attributes reset to 10"));
}

#[test]
fn test_stats_rejects_bad_assignment() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["stats", "luck=40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_dlc_toggle_is_stored() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["dlc", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DLC items are hidden"));

    rl1(&home)
        .arg("prefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats.showDlcWeapons = false"));
}

#[test]
fn test_sort_by_column_and_direction() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["sort", "arcane", "desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by Arcane (desc)"))
        .stdout(predicate::str::contains("Arcane ▼"));

    rl1(&home)
        .arg("sort")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorted by Arcane (desc)"));
}

#[test]
fn test_columns_set_and_reset() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["columns", "--set", "name", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Name"))
        .stdout(predicate::str::contains("[ ] Arcane"));

    rl1(&home)
        .args(["columns", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] Arcane"));
}

#[test]
fn test_theme_set_and_list() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["theme", "age-of-stars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Age of Stars"));

    rl1(&home)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\* age-of-stars\s+Age of Stars").unwrap());

    rl1(&home)
        .args(["theme", "age-of-bananas"])
        .assert()
        .failure();
}

#[test]
fn test_prefs_reset() {
    let home = TempDir::new().unwrap();
    rl1(&home).args(["stats", "dex=40"]).assert().success();
    rl1(&home)
        .args(["prefs", "--reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preferences reset to defaults"));

    rl1(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Dexterity\s+10").unwrap());
}

#[test]
fn test_categories_for_spells() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .args(["categories", "--type", "spells"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorcery"))
        .stdout(predicate::str::contains("Katanas").not());
}

#[test]
fn test_config_output() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size = 10"))
        .stdout(predicate::str::contains("(bundled)"));

    rl1(&home)
        .args(["config", "--template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size"));
}

#[test]
fn test_config_file_page_size() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("rl1.toml"), "page_size = 3\n").unwrap();
    rl1(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size = 3"));
}

#[test]
fn test_grouped_help() {
    let home = TempDir::new().unwrap();
    rl1(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Commands:"))
        .stdout(predicate::str::contains("Display Commands:"));
}
