use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;

use serde_json::Value;
use serial_test::serial;

fn cfg_json(env: &[(&str, &str)]) -> (i32, Value, String) {
    let res = CliRunner::new().run_with_env(&["cfg"], env);
    let json = serde_json::from_str(&res.stdout).unwrap_or(Value::Null);
    (res.exit_code, json, res.stderr)
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    let (code, json, _) = cfg_json(&[]);
    assert_eq!(code, 0);
    assert_eq!(json["players"]["value"].as_u64(), Some(4));
    assert_eq!(json["players"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["ai"]["value"].as_str(), Some("baseline"));
}

#[test]
#[serial]
fn env_overrides_file() {
    let tfm = TempFileManager::new().expect("temp dir");
    let file = tfm
        .create_file("wildcard.toml", "players = 6\nseed = 11\nai = \"random\"\n")
        .expect("write config");
    let file = file.to_string_lossy().into_owned();

    let (code, json, stderr) = cfg_json(&[("WILDCARD_CONFIG", file.as_str()), ("WILDCARD_SEED", "99")]);
    assert_eq!(code, 0, "stderr={}", stderr);
    assert_eq!(json["players"]["value"].as_u64(), Some(6));
    assert_eq!(json["players"]["source"].as_str(), Some("file"));
    assert_eq!(json["ai"]["value"].as_str(), Some("random"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(99));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
}

#[test]
#[serial]
fn invalid_env_values_fail() {
    for (key, value) in [
        ("WILDCARD_PLAYERS", "1"),
        ("WILDCARD_PLAYERS", "many"),
        ("WILDCARD_AI", "oracle"),
        ("WILDCARD_SEED", "-3"),
    ] {
        let (code, _, stderr) = cfg_json(&[(key, value)]);
        assert_eq!(code, 2, "{}={} should be rejected", key, value);
        assert!(stderr.contains("Invalid configuration"), "{}", stderr);
    }
}

#[test]
#[serial]
fn missing_config_file_fails() {
    let tfm = TempFileManager::new().expect("temp dir");
    let missing = tfm.path().join("absent.toml");
    let missing = missing.to_string_lossy().into_owned();
    let (code, _, stderr) = cfg_json(&[("WILDCARD_CONFIG", missing.as_str())]);
    assert_eq!(code, 2);
    assert!(stderr.contains("cannot read config file"), "{}", stderr);
}

#[test]
#[serial]
fn flags_override_config() {
    let res = CliRunner::new().run_with_env(
        &["deal", "--players", "2", "--seed", "5"],
        &[("WILDCARD_PLAYERS", "7"), ("WILDCARD_SEED", "1")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("deal: players=2 seed=5"));

    let res = CliRunner::new().run_with_env(
        &["deal"],
        &[("WILDCARD_PLAYERS", "7"), ("WILDCARD_SEED", "1")],
    );
    assert!(res.stdout.starts_with("deal: players=7 seed=1"));
}
