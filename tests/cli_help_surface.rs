use std::process::Command;

use anyhow::{Context, Result};

fn run_sitbox(args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_sitbox"))
        .args(args)
        .output()
        .with_context(|| format!("run sitbox {:?}", args))?;

    if !out.status.success() {
        anyhow::bail!(
            "sitbox {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

#[test]
fn cli_help_surface_is_stable() -> Result<()> {
    let help = run_sitbox(&["--help"])?;
    assert!(help.contains("Usage: sitbox"));
    assert!(help.contains("[COMMAND]"));
    assert!(help.contains("login"));
    assert!(help.contains("logout"));
    assert!(help.contains("posts"));
    assert!(help.contains("stories"));
    assert!(help.contains("subscribers"));
    assert!(help.contains("submissions"));
    assert!(help.contains("team"));

    let posts_help = run_sitbox(&["posts", "--help"])?;
    assert!(posts_help.contains("Usage: sitbox posts <COMMAND>"));
    assert!(posts_help.contains("list"));
    assert!(posts_help.contains("create"));
    assert!(posts_help.contains("update"));
    assert!(posts_help.contains("delete"));

    let subs_help = run_sitbox(&["subscribers", "--help"])?;
    assert!(subs_help.contains("Usage: sitbox subscribers <COMMAND>"));
    assert!(subs_help.contains("export"));

    Ok(())
}
