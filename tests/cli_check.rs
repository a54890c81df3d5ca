mod common;

use common::{PARAMETERS_YAML, TestContext};
use predicates::prelude::*;

const DUPLICATE_PROMPTS: &str = r#"
categories:
  - id: mood
    name: Mood
    prompts:
      - { id: calm, prompt_en: serene }
      - { id: calm, prompt_en: quiet }
"#;

const UNKNOWN_TAG_PROMPTS: &str = r#"
categories:
  - id: mood
    name: Mood
    special: { positionTag: backdrop }
    prompts:
      - { id: calm, prompt_en: serene }
"#;

#[test]
fn embedded_config_passes() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Config from built-in defaults is valid"));
}

#[test]
fn errors_exit_with_one() {
    let ctx = TestContext::new();
    ctx.write_file("catalog/prompts.yaml", DUPLICATE_PROMPTS);
    ctx.write_file("catalog/parameters.yaml", PARAMETERS_YAML);

    ctx.cli()
        .args(["--config-dir", "catalog", "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] prompts.yaml: duplicate prompt id 'calm'"))
        .stderr(predicate::str::contains("Check failed: 1 error(s), 0 warning(s) found."));
}

#[test]
fn warnings_exit_with_two_only_when_strict() {
    let ctx = TestContext::new();
    ctx.write_file("catalog/prompts.yaml", UNKNOWN_TAG_PROMPTS);
    ctx.write_file("catalog/parameters.yaml", PARAMETERS_YAML);

    ctx.cli()
        .args(["--config-dir", "catalog", "check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[WARN] prompts.yaml"))
        .stderr(predicate::str::contains("Check completed with 1 warning(s)."));

    ctx.cli().args(["--config-dir", "catalog", "check", "--strict"]).assert().code(2);
}

#[test]
fn missing_file_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("catalog/prompts.yaml", UNKNOWN_TAG_PROMPTS);

    ctx.cli()
        .args(["--config-dir", "catalog", "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] parameters.yaml: Config file not found"));
}

#[test]
fn missing_config_dir_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config-dir", "nowhere", "check"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Config file not found"));
}
