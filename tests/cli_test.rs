//! Integration tests for the command-line interface.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const POST_REQUEST: &str = r#"
views: [single, singular]
queried: { kind: post, id: 42, post_type: post, slug: hello-world }
"#;

fn setup_theme(templates: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in templates {
        let path = temp.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
    temp
}

fn write_request(dir: &Path, content: &str) -> String {
    let path = dir.join("request.yml");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn stratum(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("stratum"));
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("stratum"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("template hierarchy"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("stratum"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("stratum"));
    cmd.assert().failure();
    Ok(())
}

#[test]
fn resolve_prints_most_specific_existing_template() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_theme(&["single-post-hello-world.php", "single.php", "index.php"]);
    let request = write_request(temp.path(), POST_REQUEST);

    stratum(temp.path())
        .args(["resolve", &request])
        .assert()
        .success()
        .stdout("single-post-hello-world.php\n");
    Ok(())
}

#[test]
fn resolve_uses_template_dirs_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_theme(&[
        "child/index.php",
        "parent/single.php",
        ".stratum/config.yml",
    ]);
    fs::write(
        temp.path().join(".stratum").join("config.yml"),
        "template_dirs: [child, parent]\n",
    )?;
    let request = write_request(temp.path(), POST_REQUEST);

    stratum(temp.path())
        .args(["resolve", &request])
        .assert()
        .success()
        .stdout("single.php\n");
    Ok(())
}

#[test]
fn resolve_verbose_shows_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_theme(&["index.php"]);
    let request = write_request(temp.path(), POST_REQUEST);

    stratum(temp.path())
        .args(["resolve", &request, "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path:"))
        .stdout(predicate::str::contains("hierarchy: single-post-42"));
    Ok(())
}

#[test]
fn resolve_with_available_skips_disk() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let request = write_request(
        temp.path(),
        "views: [taxonomy, archive]\nqueried: { kind: term, id: 1, taxonomy: post_format, slug: post-format-aside }\n",
    );

    stratum(temp.path())
        .args([
            "resolve",
            &request,
            "--available",
            "archive.php,taxonomy-post_format-aside.php",
        ])
        .assert()
        .success()
        .stdout("taxonomy-post_format-aside.php\n");
    Ok(())
}

#[test]
fn resolve_queried_user_by_role() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_theme(&["user-role-editor.php", "author.php", "index.php"]);
    let request = write_request(
        temp.path(),
        "views: [author, archive]\nqueried: { kind: user, id: 9, nicename: ada, roles: [editor] }\n",
    );

    stratum(temp.path())
        .args(["resolve", &request])
        .assert()
        .success()
        .stdout("user-role-editor.php\n");
    Ok(())
}

#[test]
fn resolve_attachment_by_mime_subtype() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_theme(&["attachment-jpeg.php", "attachment.php", "single.php"]);
    let request = write_request(
        temp.path(),
        r#"
views: [attachment, single, singular]
queried:
  kind: post
  id: 7
  post_type: attachment
  slug: sunset
  mime_type: image/jpeg
"#,
    );

    stratum(temp.path())
        .args(["resolve", &request])
        .assert()
        .success()
        .stdout("attachment-jpeg.php\n");
    Ok(())
}

#[test]
fn resolve_rejects_untagged_queried_object() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_theme(&["index.php"]);
    let request = write_request(
        temp.path(),
        "views: [single]\nqueried: { id: 42, post_type: post, slug: hello }\n",
    );

    stratum(temp.path())
        .args(["resolve", &request])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request.yml"));
    Ok(())
}

#[test]
fn resolve_fails_when_nothing_exists() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let request = write_request(temp.path(), POST_REQUEST);

    stratum(temp.path())
        .args(["resolve", &request])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No template found"));
    Ok(())
}

#[test]
fn resolve_passes_sentinel_through() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_theme(&["index.php"]);
    let request = write_request(temp.path(), "chosen: false\n");

    stratum(temp.path())
        .args(["resolve", &request])
        .assert()
        .success()
        .stdout("false\n");
    Ok(())
}

#[test]
fn resolve_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let request = write_request(temp.path(), "views: [search]\n");

    let output = stratum(temp.path())
        .args(["resolve", &request, "--json", "--available", "search.php"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["template"], "search.php");
    assert!(value["path"].is_null());
    Ok(())
}

#[test]
fn resolve_missing_request_reports_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    stratum(temp.path())
        .args(["resolve", "missing.yml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request file not found"));
    Ok(())
}

#[test]
fn resolve_invalid_config_reports_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_theme(&[".stratum/config.yml"]);
    fs::write(
        temp.path().join(".stratum").join("config.yml"),
        "extension: 'a.b'\n",
    )?;
    let request = write_request(temp.path(), "{}");

    stratum(temp.path())
        .args(["resolve", &request])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
    Ok(())
}

#[test]
fn explain_lists_views_and_hierarchy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_theme(&["user-role-editor.php", "author.php", "index.php"]);
    let request = write_request(
        temp.path(),
        r#"
views: [author, archive]
vars: { author: 3 }
users:
  - { id: 3, nicename: grace, roles: [administrator, editor] }
"#,
    );

    stratum(temp.path())
        .args(["explain", &request])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page views"))
        .stdout(predicate::str::contains("✓ user-role-editor.php"))
        .stdout(predicate::str::contains("archive (host default)"))
        .stdout(predicate::str::contains("    user-role-administrator.php"))
        .stdout(predicate::str::contains("    user-grace.php"));
    Ok(())
}

#[test]
fn explain_json_has_views() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let request = write_request(temp.path(), "views: [date]\nvars: { year: 2023 }\n");

    let output = stratum(temp.path())
        .args(["explain", &request, "--json", "--available", "date.php"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["template"], "date.php");
    assert_eq!(value["views"][0]["candidates"][0], "year.php");
    assert_eq!(value["hierarchy"][1], "date");
    Ok(())
}
