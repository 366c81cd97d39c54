use std::collections::HashMap;
use std::path::PathBuf;

use ferrocat::config::{CONFIG_ENV, Config};

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::load_from(env(&[])).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.root, PathBuf::from("static"));
}

#[test]
fn test_config_custom_address_from_env() {
    let cfg = Config::load_from(env(&[("LISTEN", "0.0.0.0:3000")])).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
}

#[test]
fn test_config_static_root_from_env() {
    let cfg = Config::load_from(env(&[("STATIC_ROOT", "/srv/www")])).unwrap();

    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml(
        "server:\n  listen_addr: 127.0.0.1:9000\nstatic_files:\n  root: assets\n",
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.static_files.root, PathBuf::from("assets"));
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml("static_files:\n  root: public\n").unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
}

#[test]
fn test_config_invalid_yaml() {
    assert!(Config::from_yaml("server: [unclosed").is_err());
}

#[test]
fn test_config_file_with_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ferrocat.yaml");
    std::fs::write(&path, "server:\n  listen_addr: 127.0.0.1:7000\n").unwrap();
    let path = path.to_str().unwrap();

    let from_file = Config::load_from(env(&[(CONFIG_ENV, path)])).unwrap();
    let overridden =
        Config::load_from(env(&[(CONFIG_ENV, path), ("LISTEN", "127.0.0.1:7001")])).unwrap();

    assert_eq!(from_file.server.listen_addr, "127.0.0.1:7000");
    assert_eq!(overridden.server.listen_addr, "127.0.0.1:7001");
}

#[test]
fn test_config_missing_file() {
    let err = Config::load_from(env(&[(CONFIG_ENV, "/nonexistent/ferrocat.yaml")])).unwrap_err();

    assert!(err.to_string().contains("/nonexistent/ferrocat.yaml"));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();

    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
}
