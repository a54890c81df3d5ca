mod common;

use common::TestContext;
use mjp::{
    AppError, BuildOptions, CheckOptions, ConfigOptions, FragmentKey, ParameterKey,
    ParameterValue, ParameterValues, PositionTag, SelectionEntry, assemble, assemble_flat,
};
use serial_test::serial;
use std::env;

fn selectors(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn assemble_is_usable_without_config() {
    let golden = FragmentKey::new("lighting", "golden");
    let fan_ho = FragmentKey::new("artist", "fan-ho");
    let selection = vec![
        SelectionEntry::new(golden, "golden hour", PositionTag::Lighting, 0),
        SelectionEntry::new(fan_ho, "Fan Ho", PositionTag::Artist, 1),
    ];
    let params = ParameterValues::new()
        .with(ParameterKey::Chaos, ParameterValue::Number(20.0))
        .unwrap();

    assert_eq!(
        assemble(&selection, "a rainy alley", &params),
        "photography by Fan Ho, a rainy alley, golden hour --c 20"
    );
    assert_eq!(
        assemble_flat(&["Fan Ho", " ", "golden hour"], &params),
        "Fan Ho, golden hour --c 20"
    );
}

#[test]
fn build_at_resolves_config_dir_against_cwd() {
    let ctx = TestContext::new();
    ctx.write_config("catalog");

    let config = ConfigOptions { config_dir: Some("catalog".into()), settings: None };
    let options = BuildOptions {
        selectors: selectors(&["artist/ansel", "lighting/golden"]),
        subject: Some("a frozen lake".to_string()),
        ..Default::default()
    };

    let outcome = mjp::build_at(ctx.work_dir(), &config, &options).unwrap();
    assert_eq!(outcome.prompt, "photography by Ansel Adams, a frozen lake, golden hour --ar 16:9");
    assert_eq!(outcome.selected.len(), 2);
}

#[test]
fn check_at_reports_exit_code() {
    let ctx = TestContext::new();
    ctx.write_config("catalog");

    let config = ConfigOptions { config_dir: Some("catalog".into()), settings: None };
    let outcome = mjp::check_at(ctx.work_dir(), &config, &CheckOptions { strict: true }).unwrap();
    assert_eq!(outcome.exit_code, 0);
    assert_eq!(outcome.errors(), 0);
}

#[test]
fn explicit_settings_path_must_exist() {
    let ctx = TestContext::new();
    let config = ConfigOptions { config_dir: None, settings: Some("missing.toml".into()) };

    let err = mjp::build_at(ctx.work_dir(), &config, &BuildOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::InvalidSettings(_)));
}

#[test]
#[serial]
fn build_discovers_settings_in_current_directory() {
    let ctx = TestContext::new();
    ctx.write_config("catalog");
    ctx.write_file("mjp.toml", "config_dir = \"catalog\"\n");

    let original = env::current_dir().unwrap();
    env::set_current_dir(ctx.work_dir()).unwrap();
    let result = mjp::build(
        &ConfigOptions::default(),
        &BuildOptions { selectors: selectors(&["camera/lens/wide"]), ..Default::default() },
    );
    env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().prompt, "photography, wide angle --ar 16:9");
}
