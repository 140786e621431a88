//! Configuration checks for the CI workflow definition

// Miri isolation forbids reading files from disk.
#![cfg(not(miri))]

use std::collections::BTreeMap;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Workflow {
    #[serde(rename = "on")]
    triggers: BTreeMap<String, BranchFilter>,
    jobs: BTreeMap<String, Job>,
}

#[derive(Debug, Deserialize)]
struct BranchFilter {
    branches: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Job {
    strategy: Option<Strategy>,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Strategy {
    #[serde(rename = "fail-fast")]
    fail_fast: bool,
    matrix: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct Step {
    uses: Option<String>,
    run: Option<String>,
    with: Option<BTreeMap<String, String>>,
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn load_workflow() -> anyhow::Result<Workflow> {
    let text = std::fs::read_to_string(workspace_root().join(".github/workflows/ci.yml"))?;
    Ok(serde_yaml::from_str(&text)?)
}

fn runs(job: &Job) -> Vec<&str> {
    job.steps.iter().filter_map(|s| s.run.as_deref()).collect()
}

fn is_toolchain_step(step: &Step) -> bool {
    let uses = step.uses.as_deref().unwrap_or_default();
    uses.starts_with("dtolnay/rust-toolchain")
}

fn job<'a>(workflow: &'a Workflow, name: &str) -> &'a Job {
    workflow
        .jobs
        .get(name)
        .unwrap_or_else(|| panic!("missing job `{name}`"))
}

#[test]
fn test_triggers_only_main() -> anyhow::Result<()> {
    let workflow = load_workflow()?;
    let events: Vec<&str> = workflow.triggers.keys().map(String::as_str).collect();
    assert_eq!(events, ["pull_request", "push"]);
    for filter in workflow.triggers.values() {
        assert_eq!(filter.branches, ["main"]);
    }
    Ok(())
}

#[test]
fn test_exactly_two_jobs() -> anyhow::Result<()> {
    let workflow = load_workflow()?;
    let names: Vec<&str> = workflow.jobs.keys().map(String::as_str).collect();
    assert_eq!(names, ["develop", "test"]);
    Ok(())
}

#[test]
fn test_develop_gates_in_order() -> anyhow::Result<()> {
    let workflow = load_workflow()?;
    let develop = job(&workflow, "develop");
    assert!(develop.strategy.is_none());
    assert_eq!(
        runs(develop),
        [
            "cargo fmt --all -- --check",
            "cargo clippy --all-targets -- -D warnings",
            "cargo test",
            "cargo miri test",
        ]
    );
    Ok(())
}

#[test]
fn test_develop_uses_nightly_with_components() -> anyhow::Result<()> {
    let workflow = load_workflow()?;
    let develop = job(&workflow, "develop");
    let toolchain = develop
        .steps
        .iter()
        .find(|s| is_toolchain_step(s))
        .expect("toolchain step");
    assert_eq!(toolchain.uses.as_deref(), Some("dtolnay/rust-toolchain@nightly"));

    let components = toolchain
        .with
        .as_ref()
        .and_then(|w| w.get("components"))
        .expect("components");
    let mut components: Vec<&str> = components.split(',').map(str::trim).collect();
    components.sort_unstable();
    assert_eq!(components, ["clippy", "miri", "rustfmt"]);
    Ok(())
}

#[test]
fn test_matrix_runs_independently() -> anyhow::Result<()> {
    let workflow = load_workflow()?;
    let test = job(&workflow, "test");
    let strategy = test.strategy.as_ref().expect("matrix strategy");
    assert!(!strategy.fail_fast);
    assert_eq!(strategy.matrix["toolchain"], ["stable", "nightly", "1.81.0"]);
    assert_eq!(runs(test), ["cargo test"]);
    Ok(())
}

#[test]
fn test_matrix_msrv_matches_manifest() -> anyhow::Result<()> {
    let workflow = load_workflow()?;
    let strategy = job(&workflow, "test")
        .strategy
        .as_ref()
        .expect("matrix strategy");
    let manifest = std::fs::read_to_string(workspace_root().join("Cargo.toml"))?;
    let msrv = manifest
        .lines()
        .find_map(|line| line.strip_prefix("rust-version = "))
        .map(|v| v.trim_matches('"'))
        .expect("rust-version in workspace manifest");
    assert!(strategy.matrix["toolchain"].iter().any(|t| t == msrv));
    Ok(())
}
