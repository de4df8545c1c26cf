//! Integration tests for the `ks` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const KUBECONFIG: &str = "\
apiVersion: v1
kind: Config
clusters:
- name: prod
  cluster:
    server: https://10.0.0.1:6443
contexts:
- name: prod
  context:
    cluster: prod
    namespace: kube-system
current-context: prod
";

const SWAGGER: &str = r#"{
  "swagger": "2.0",
  "info": {"title": "Kubernetes", "version": "v1.7.0"},
  "definitions": {
    "io.k8s.kubernetes.pkg.api.v1.Pod": {
      "properties": {"metadata": {}},
      "x-kubernetes-group-version-kind": [{"group": "", "version": "v1", "kind": "Pod"}]
    }
  }
}"#;

/// A scratch directory holding a kubeconfig, a swagger.json and an empty
/// home, so nothing from the developer's machine leaks in.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("kubeconfig"), KUBECONFIG).unwrap();
        fs::write(dir.path().join("swagger.json"), SWAGGER).unwrap();
        fs::create_dir(dir.path().join("home")).unwrap();
        fs::create_dir(dir.path().join("work")).unwrap();
        Self { dir }
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    fn swagger_selector(&self) -> String {
        format!("--api-spec=file:{}", self.path("swagger.json").display())
    }

    fn ks(&self) -> Command {
        let mut cmd = Command::cargo_bin("ks").unwrap();
        cmd.current_dir(self.path("work"))
            .env("KUBECONFIG", self.path("kubeconfig"))
            .env("HOME", self.path("home"))
            .env("XDG_CONFIG_HOME", self.path("home/.config"))
            .env_remove("RUST_LOG")
            .env_remove("KSINIT_DEFAULTS__API_SPEC")
            .env_remove("KSINIT_CLUSTER__KUBECONFIG")
            .env_remove("KSINIT_CLUSTER__FETCH_TIMEOUT_SECS")
            .env_remove("KSINIT_OUTPUT__NO_COLOR");
        cmd
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_help_lists_init() {
    Command::cargo_bin("ks")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("ks")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_init_creates_application() {
    let sandbox = Sandbox::new();

    sandbox
        .ks()
        .args(["init", "guestbook", sandbox.swagger_selector().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created app 'guestbook'"))
        .stdout(predicate::str::contains("https://10.0.0.1:6443"));

    let root = sandbox.path("work/guestbook");
    for dir in [".ksonnet", "components", "lib", "vendor"] {
        assert!(root.join(dir).is_dir(), "{dir} missing");
    }
    assert!(root.join("app.yaml").is_file());
    for file in ["swagger.json", "k8s.libsonnet", "k.libsonnet"] {
        assert!(
            root.join("environments/default/.metadata").join(file).is_file(),
            "{file} missing"
        );
    }

    let spec = read_json(&root.join("environments/default/spec.json"));
    assert_eq!(spec["server"], "https://10.0.0.1:6443");
    assert_eq!(spec["namespace"], "kube-system");
    assert!(spec["apiSpec"].as_str().unwrap().starts_with("file:"));
}

#[test]
fn test_init_announces_app_at_default_verbosity() {
    let sandbox = Sandbox::new();

    sandbox
        .ks()
        .args(["init", "guestbook", sandbox.swagger_selector().as_str()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Creating a new app 'guestbook' at path '"))
        .stderr(predicate::str::contains("work/guestbook'"));
}

#[test]
fn test_relative_file_selector_is_stored_absolute() {
    let sandbox = Sandbox::new();

    sandbox
        .ks()
        .args(["init", "guestbook", "--api-spec=file:../swagger.json"])
        .assert()
        .success();

    let spec = read_json(&sandbox.path("work/guestbook/environments/default/spec.json"));
    let stored = spec["apiSpec"].as_str().unwrap();
    let path = Path::new(stored.strip_prefix("file:").unwrap());
    assert!(path.is_absolute(), "{stored} is relative");
    assert!(path.ends_with("work/../swagger.json"));
    assert!(path.is_file());
}

#[test]
fn test_second_init_fails_with_user_error() {
    let sandbox = Sandbox::new();
    let selector = sandbox.swagger_selector();

    sandbox
        .ks()
        .args(["init", "guestbook", selector.as_str()])
        .assert()
        .success();

    sandbox
        .ks()
        .args(["init", "guestbook", selector.as_str()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_bogus_selector_fails_without_creating_anything() {
    let sandbox = Sandbox::new();

    sandbox
        .ks()
        .args(["init", "guestbook", "--api-spec=bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid API spec selector 'bogus'"));

    assert!(!sandbox.path("work/guestbook").exists());
}

#[test]
fn test_unknown_context_is_not_found() {
    let sandbox = Sandbox::new();

    sandbox
        .ks()
        .args(["init", "guestbook", "--context=staging", sandbox.swagger_selector().as_str()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Context 'staging' not found"));
}

#[test]
fn test_unknown_version_is_fetch_error() {
    let sandbox = Sandbox::new();

    sandbox
        .ks()
        .args(["init", "guestbook", "--api-spec=version:v0.0.1"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("unknown Kubernetes version 'v0.0.1'"));
}

#[test]
fn test_namespace_and_kubeconfig_flags() {
    let sandbox = Sandbox::new();
    let other = sandbox.path("other-kubeconfig");
    fs::write(
        &other,
        "clusters:\n- name: dev\n  cluster:\n    server: https://dev:6443\n\
         contexts:\n- name: dev\n  context:\n    cluster: dev\n\
         current-context: dev\n",
    )
    .unwrap();

    sandbox
        .ks()
        .args(["init", "guestbook", "--namespace=team-a", sandbox.swagger_selector().as_str()])
        .arg("--kubeconfig")
        .arg(&other)
        .assert()
        .success();

    let spec = read_json(&sandbox.path("work/guestbook/environments/default/spec.json"));
    assert_eq!(spec["server"], "https://dev:6443");
    assert_eq!(spec["namespace"], "team-a");
}

#[test]
fn test_missing_kubeconfig_creates_unbound_environment() {
    let sandbox = Sandbox::new();

    sandbox
        .ks()
        .env("KUBECONFIG", sandbox.path("absent"))
        .args(["init", "guestbook", sandbox.swagger_selector().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("not bound to a cluster"));

    let spec = read_json(&sandbox.path("work/guestbook/environments/default/spec.json"));
    assert_eq!(spec["server"], "");
    assert_eq!(spec["namespace"], "");
}

#[test]
fn test_invalid_config_file_exits_with_configuration_error() {
    let sandbox = Sandbox::new();
    let config = sandbox.path("config.toml");
    fs::write(&config, "[defaults\n").unwrap();

    sandbox
        .ks()
        .arg("--config")
        .arg(&config)
        .args(["init", "guestbook"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_completions_use_binary_name() {
    Command::cargo_bin("ks")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ks"));
}
