use std::process::Command;

use anyhow::{Context, Result};

mod common;

fn run_sitbox(home: &std::path::Path, args: &[&str]) -> Result<std::process::Output> {
    Command::new(env!("CARGO_BIN_EXE_sitbox"))
        .env("SITBOX_HOME", home)
        .args(args)
        .output()
        .with_context(|| format!("run sitbox {:?}", args))
}

fn ensure_ok(label: &str, out: &std::process::Output) -> Result<()> {
    if out.status.success() {
        return Ok(());
    }
    anyhow::bail!(
        "{} failed\nstdout:\n{}\nstderr:\n{}",
        label,
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    )
}

#[test]
fn login_splits_token_from_config_and_posts_list_paginates() -> Result<()> {
    let stub = common::spawn_stub()?;
    let home = tempfile::tempdir().context("create home dir")?;

    let out = run_sitbox(
        home.path(),
        &["login", "--url", &stub.base_url, "--token", &stub.token],
    )?;
    ensure_ok("login", &out)?;
    assert!(String::from_utf8_lossy(&out.stdout).contains("Logged in"));

    // The token lives in state.json only; config.json stays shareable.
    let config = std::fs::read_to_string(home.path().join("config.json"))
        .context("read config.json")?;
    assert!(config.contains(&stub.base_url));
    assert!(!config.contains(&stub.token), "token leaked into config.json");
    let state =
        std::fs::read_to_string(home.path().join("state.json")).context("read state.json")?;
    assert!(state.contains(&stub.token));

    let out = run_sitbox(home.path(), &["posts", "list"])?;
    ensure_ok("posts list", &out)?;
    let listing = String::from_utf8_lossy(&out.stdout).to_string();
    assert!(listing.contains("Post 01"));
    assert!(listing.contains("page 1/3 (23 total)"));

    let out = run_sitbox(home.path(), &["posts", "list", "--status", "draft"])?;
    ensure_ok("posts list --status draft", &out)?;
    let listing = String::from_utf8_lossy(&out.stdout).to_string();
    assert!(listing.contains("Post 03"));
    assert!(!listing.contains("Post 01"), "published post in draft listing");
    assert!(listing.contains("(7 total)"));

    let out = run_sitbox(home.path(), &["logout"])?;
    ensure_ok("logout", &out)?;
    let state =
        std::fs::read_to_string(home.path().join("state.json")).context("read state.json")?;
    assert!(!state.contains(&stub.token), "token survived logout");

    let out = run_sitbox(home.path(), &["posts", "list"])?;
    assert!(!out.status.success(), "posts list worked without a token");
    Ok(())
}

#[test]
fn posts_list_json_reports_recomputed_pagination() -> Result<()> {
    let stub = common::spawn_stub()?;
    let home = tempfile::tempdir().context("create home dir")?;

    let out = run_sitbox(
        home.path(),
        &["login", "--url", &stub.base_url, "--token", &stub.token],
    )?;
    ensure_ok("login", &out)?;

    let out = run_sitbox(home.path(), &["posts", "list", "--page", "3", "--json"])?;
    ensure_ok("posts list --json", &out)?;
    let page: serde_json::Value = serde_json::from_slice(&out.stdout).context("parse json page")?;

    // The stub lies about pagination flags; the CLI prints its own math.
    assert_eq!(page["total"], 23);
    assert_eq!(page["total_pages"], 3);
    assert_eq!(page["has_next"], false);
    assert_eq!(page["has_prev"], true);
    assert_eq!(page["items"].as_array().map(Vec::len), Some(3));
    Ok(())
}
