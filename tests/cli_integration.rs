use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn recipebox(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.env("RECIPEBOX_HOME", home)
        .env_remove("RECIPEBOX_LOG")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

/// Adds a recipe and returns the id printed in the confirmation.
fn add(home: &Path, title: &str, ingredients: &str) -> String {
    let output = recipebox(home)
        .args(["add", "-i", ingredients, "-s", "Cook it", title])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout
        .lines()
        .find(|l| l.starts_with("Recipe added ("))
        .unwrap();
    let start = line.find('(').unwrap() + 1;
    let end = line.find(')').unwrap();
    line[start..end].to_string()
}

#[test]
fn add_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebox(temp_dir.path())
        .args(["add", "-i", "tomatoes, salt", "Tomato Soup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe added"))
        .stdout(predicate::str::contains("Tomato Soup"));

    recipebox(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomato Soup"))
        .stdout(predicate::str::contains("tomatoes, salt"))
        .stdout(predicate::str::contains("no image"))
        .stdout(predicate::str::contains("pages [1]"));

    assert!(temp_dir.path().join("recipes.json").exists());
}

#[test]
fn no_subcommand_lists() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Pancakes", "flour, milk");

    recipebox(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Pancakes"));
}

#[test]
fn empty_catalog_lists_hint() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebox(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes yet"))
        .stdout(predicate::str::contains("No matching recipes found.").not());
}

#[test]
fn pagination_shows_second_page() {
    let temp_dir = tempfile::tempdir().unwrap();
    for title in ["Dish A", "Dish B", "Dish C", "Dish D", "Dish E", "Dish F", "Dish G"] {
        add(temp_dir.path(), title, "stuff");
    }

    recipebox(temp_dir.path())
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dish F"))
        .stdout(predicate::str::contains("Dish G"))
        .stdout(predicate::str::contains("Dish A").not())
        .stdout(predicate::str::contains("pages 1 [2]"));

    recipebox(temp_dir.path())
        .args(["config", "page-size", "3"])
        .assert()
        .success();

    recipebox(temp_dir.path())
        .args(["list", "--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dish G"))
        .stdout(predicate::str::contains("Dish F").not())
        .stdout(predicate::str::contains("pages 1 2 [3]"));
}

#[test]
fn search_matches_title_and_ingredients() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Tomato Soup", "tomatoes, salt");
    add(temp_dir.path(), "Pancakes", "flour, milk");

    recipebox(temp_dir.path())
        .args(["search", "SOUP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tomato Soup"))
        .stdout(predicate::str::contains("Pancakes").not());

    recipebox(temp_dir.path())
        .args(["search", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pancakes"));

    recipebox(temp_dir.path())
        .args(["search", "Cook"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching recipes found."));
}

#[test]
fn view_edit_delete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let id = add(temp_dir.path(), "Soup", "water");

    recipebox(temp_dir.path())
        .args(["edit", &id, "--title", "Stew"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe updated"));

    recipebox(temp_dir.path())
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stew"))
        .stdout(predicate::str::contains("water"))
        .stdout(predicate::str::contains("Cook it"));

    recipebox(temp_dir.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe deleted"));

    recipebox(temp_dir.path())
        .args(["view", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipe with id"));
}

#[test]
fn delete_unknown_id_is_harmless() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Soup", "water");

    recipebox(temp_dir.path())
        .args(["delete", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipe with id 12345"));

    recipebox(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Soup"));
}

#[test]
fn image_is_stored_as_data_url() {
    let temp_dir = tempfile::tempdir().unwrap();
    let image = temp_dir.path().join("pie.png");
    std::fs::write(&image, [0x89, b'P', b'N', b'G', 0, 1, 2, 3]).unwrap();

    recipebox(temp_dir.path())
        .args(["add", "--image", image.to_str().unwrap(), "Pie"])
        .assert()
        .success();

    let stored = std::fs::read_to_string(temp_dir.path().join("recipes.json")).unwrap();
    assert!(stored.contains("data:image/png;base64,"));

    recipebox(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("image/png, 8 B"));
}

#[test]
fn missing_image_aborts_add() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("nope.jpg");

    recipebox(temp_dir.path())
        .args(["add", "--image", missing.to_str().unwrap(), "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read image"));

    recipebox(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ghost").not());
}

#[test]
fn corrupt_catalog_warns_and_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("recipes.json"), "{not json").unwrap();

    recipebox(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be read"))
        .stdout(predicate::str::contains("could not be read").not());

    add(temp_dir.path(), "Fresh Start", "hope");

    recipebox(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh Start"))
        .stderr(predicate::str::contains("could not be read").not());
}

#[test]
fn export_then_import_elsewhere() {
    let source = tempfile::tempdir().unwrap();
    let target = tempfile::tempdir().unwrap();
    add(source.path(), "Soup", "water");
    add(source.path(), "Bread", "flour");

    let dump = source.path().join("dump.json");
    recipebox(source.path())
        .args(["export", dump.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 recipe(s)"));

    recipebox(target.path())
        .args(["import", dump.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total imported: 2"));

    recipebox(target.path())
        .args(["import", dump.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total imported: 0"))
        .stdout(predicate::str::contains("id already present"));

    recipebox(target.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Soup"))
        .stdout(predicate::str::contains("Bread"));
}

#[test]
fn export_to_stdout_is_plain_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    add(temp_dir.path(), "Soup", "water");

    let output = recipebox(temp_dir.path()).arg("export").output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["title"], "Soup");
    assert_eq!(parsed[0]["image"], "");
}

#[test]
fn config_rejects_zero_page_size() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebox(temp_dir.path())
        .args(["config", "page-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page-size must be at least 1"));

    recipebox(temp_dir.path())
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));

    recipebox(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 5"));
}

#[test]
fn non_numeric_id_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebox(temp_dir.path())
        .args(["view", "soup"])
        .assert()
        .failure();
}

#[test]
fn page_zero_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    recipebox(temp_dir.path())
        .args(["list", "--page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pages start at 1"));
}

#[test]
fn export_of_corrupt_catalog_is_still_valid_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("recipes.json"), "{not json").unwrap();

    let output = recipebox(temp_dir.path()).arg("export").output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("could not be read"));
}
