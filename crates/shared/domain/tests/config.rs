use serde_json::json;
use sitely_domain::config::{LogConfig, ShellConfig};

#[test]
fn config_defaults_are_sane() {
    let shell = ShellConfig::default();
    assert!(shell.plan.is_none());
    assert_eq!(shell.title, "My Sites");
    assert!(shell.description.is_none());

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.path.is_none());
    assert!(!log.json);
}

#[test]
fn shell_config_deserializes_partial_input() {
    let raw = json!({
        "plan": "pro",
        "log": { "json": true }
    });

    let cfg: ShellConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.plan.as_deref(), Some("pro"));
    assert_eq!(cfg.title, "My Sites");
    assert!(cfg.log.json);
    assert_eq!(cfg.log.level, "info");
}
