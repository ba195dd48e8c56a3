use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const LOCAL_FACTORY: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const SEPOLIA_FACTORY: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";

fn workspace(config: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("almight.toml"), config).unwrap();
    dir
}

fn two_networks() -> TempDir {
    workspace(&format!(
        r#"
network = "local"

[logging]
level = "warn"

[registry.networks.local]
chain_id = 31337

[registry.networks.local.addresses]
POOL_LINEAR_FACTORY = "{LOCAL_FACTORY}"

[registry.networks.sepolia]
chain_id = 11155111

[registry.networks.sepolia.addresses]
POOL_LINEAR_FACTORY = "{SEPOLIA_FACTORY}"

[registry.networks.empty]
"#
    ))
}

fn almight(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("almight").unwrap();
    cmd.current_dir(dir.path()).env_remove("ALMIGHT__NETWORK").env_remove("RUST_LOG");
    cmd
}

#[test]
fn bundled_config_resolves_constants() {
    let output = Command::cargo_bin("almight")
        .unwrap()
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("ALMIGHT__NETWORK")
        .args(["constants", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["network"], "local");
    assert_eq!(json["factory_address"], LOCAL_FACTORY);
    assert_eq!(json["minimum_liquidity"], "1000");

    Command::cargo_bin("almight")
        .unwrap()
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("ALMIGHT__NETWORK")
        .args(["--config", "almight.toml", "networks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* local"))
        .stdout(predicate::str::contains("chain_id=31337"));
}

#[test]
fn constants_prints_factory_and_minimum_liquidity() {
    let dir = two_networks();

    almight(&dir)
        .arg("constants")
        .assert()
        .success()
        .stdout(predicate::str::contains(LOCAL_FACTORY))
        .stdout(predicate::str::contains("minimum_liquidity  1000"));
}

#[test]
fn constants_as_json() {
    let dir = two_networks();

    let output = almight(&dir).args(["constants", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["network"], "local");
    assert_eq!(json["factory_address"], LOCAL_FACTORY);
    assert_eq!(json["minimum_liquidity"], "1000");
}

#[test]
fn network_flag_selects_registry_record() {
    let dir = two_networks();

    almight(&dir)
        .args(["constants", "--network", "Sepolia"])
        .assert()
        .success()
        .stdout(predicate::str::contains(SEPOLIA_FACTORY))
        .stdout(predicate::str::contains("network            sepolia"));
}

#[test]
fn environment_overrides_configured_network() {
    let dir = two_networks();

    almight(&dir)
        .env("ALMIGHT__NETWORK", "sepolia")
        .args(["resolve", "POOL_LINEAR_FACTORY"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{SEPOLIA_FACTORY}\n")));
}

#[test]
fn constants_fail_without_factory_entry() {
    let dir = two_networks();

    almight(&dir)
        .args(["constants", "--network", "empty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize network 'empty'"))
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("Linear pool factory lookup failed"))
        .stderr(predicate::str::contains("'POOL_LINEAR_FACTORY' is not registered"));
}

#[test]
fn resolve_is_case_insensitive() {
    let dir = two_networks();

    almight(&dir)
        .args(["resolve", "pool_linear_factory"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{LOCAL_FACTORY}\n")));
}

#[test]
fn resolve_unknown_name_fails() {
    let dir = two_networks();

    almight(&dir)
        .args(["resolve", "POOL_STABLE_FACTORY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'POOL_STABLE_FACTORY' is not registered for network 'local'"));
}

#[test]
fn networks_lists_records_and_marks_active() {
    let dir = two_networks();

    almight(&dir)
        .arg("networks")
        .assert()
        .success()
        .stdout(predicate::str::contains("* local"))
        .stdout(predicate::str::contains("chain_id=11155111"))
        .stdout(predicate::str::contains("empty"));

    let output = almight(&dir).args(["networks", "--json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listing = json.as_array().unwrap();

    assert_eq!(listing.len(), 3);
    let local = listing.iter().find(|n| n["network"] == "local").unwrap();
    assert_eq!(local["chain_id"], 31337);
    assert_eq!(local["entries"], 1);
    assert_eq!(local["active"], true);
}

#[test]
fn explicit_config_path() {
    let dir = two_networks();
    let elsewhere = tempfile::tempdir().unwrap();

    Command::cargo_bin("almight")
        .unwrap()
        .current_dir(elsewhere.path())
        .arg("--config")
        .arg(dir.path().join("almight.toml"))
        .args(["resolve", "POOL_LINEAR_FACTORY"])
        .assert()
        .success()
        .stdout(predicate::str::contains(LOCAL_FACTORY));
}

#[test]
fn missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();

    almight(&dir)
        .arg("constants")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[test]
fn invalid_registry_address_fails() {
    let dir = workspace(
        r#"
[registry.networks.local.addresses]
POOL_LINEAR_FACTORY = "0x5fbdb2315678afecb367f032d93f642f64180aa"
"#,
    );

    almight(&dir)
        .args(["resolve", "POOL_LINEAR_FACTORY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Address registry is malformed"))
        .stderr(predicate::str::contains("registry entry local/POOL_LINEAR_FACTORY"));
}
