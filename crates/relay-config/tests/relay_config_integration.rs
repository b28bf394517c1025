//! Integration tests for relay configuration

use relay_config::{
    PushCredentials, RelayConfigError, RelayConfiguration, RelayKind, RelayStrategy,
};
use std::io::Write;
use std::time::Duration;

fn credentials() -> PushCredentials {
    PushCredentials::new("1234567890", "device-token", "server-key").unwrap()
}

#[test]
fn test_push_config_exposes_credentials() {
    let config = RelayConfiguration::push(credentials());

    assert_eq!(config.kind(), RelayKind::PushRelay);
    assert_eq!(config.strategy(), &RelayStrategy::PushRelay(credentials()));
    assert_eq!(config.push_credentials(), Some(&credentials()));
}

#[test]
fn test_plain_config_never_has_credentials() {
    let mut config = RelayConfiguration::plain();
    assert!(config.push_credentials().is_none());

    config.set_peer_map_update_interval_secs(45).unwrap();
    assert!(matches!(
        config.set_push_send_retries(9),
        Err(RelayConfigError::UnsupportedForStrategy { .. })
    ));
    assert!(config.push_credentials().is_none());
}

#[test]
fn test_strategy_defaults() {
    let plain = RelayConfiguration::plain();
    let push = RelayConfiguration::push(credentials());

    assert_eq!(plain.peer_map_update_interval_secs(), 15);
    assert_eq!(push.peer_map_update_interval_secs(), 60);
    assert_eq!(plain.push_send_retries(), 0);
    assert_eq!(push.push_send_retries(), 5);
}

#[test]
fn test_interval_update_observed() {
    let config = RelayConfiguration::push(credentials())
        .with_peer_map_update_interval_secs(30)
        .unwrap();

    assert_eq!(config.peer_map_update_interval_secs(), 30);
    assert_eq!(config.peer_map_update_interval(), Duration::from_secs(30));
}

#[test]
fn test_zero_interval_rejected() {
    let err = RelayConfiguration::plain()
        .with_peer_map_update_interval_secs(0)
        .unwrap_err();
    assert!(matches!(err, RelayConfigError::InvalidArgument(_)));
}

#[test]
fn test_accessors_have_no_side_effects() {
    let config = RelayConfiguration::push(credentials());
    let snapshot = config.clone();

    assert_eq!(config.kind(), config.kind());
    assert_eq!(config.strategy(), config.strategy());
    assert_eq!(
        config.peer_map_update_interval_secs(),
        config.peer_map_update_interval_secs()
    );
    assert_eq!(config.push_credentials(), config.push_credentials());
    assert_eq!(config.push_send_retries(), config.push_send_retries());
    assert_eq!(config.push_delivery(), config.push_delivery());
    assert_eq!(config, snapshot);
}

#[test]
fn test_mutators_never_change_strategy() {
    let mut push = RelayConfiguration::push(credentials());
    let mut plain = RelayConfiguration::plain();

    for value in [1, 30, 0, 600] {
        let interval_ok = value > 0;

        assert_eq!(push.set_peer_map_update_interval_secs(value).is_ok(), interval_ok);
        assert!(push.set_push_send_retries(value).is_ok());
        assert_eq!(plain.set_peer_map_update_interval_secs(value).is_ok(), interval_ok);
        assert!(matches!(
            plain.set_push_send_retries(value),
            Err(RelayConfigError::UnsupportedForStrategy { .. })
        ));
    }

    assert_eq!(push.peer_map_update_interval_secs(), 600);
    assert_eq!(push.push_send_retries(), 600);
    assert_eq!(plain.peer_map_update_interval_secs(), 600);

    assert_eq!(push.kind(), RelayKind::PushRelay);
    assert_eq!(push.push_credentials(), Some(&credentials()));
    assert_eq!(plain.kind(), RelayKind::PlainRelay);
    assert_eq!(plain.push_send_retries(), 0);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
strategy = "push"
peer_map_update_interval_secs = 120

[push_credentials]
sender_id = "1234567890"
registration_id = "device-token"
auth_key = "server-key"
"#
    )
    .unwrap();

    let config = RelayConfiguration::load(file.path()).unwrap();
    assert_eq!(config.kind(), RelayKind::PushRelay);
    assert_eq!(config.peer_map_update_interval_secs(), 120);
    assert_eq!(config.push_send_retries(), 5);
    assert_eq!(config.push_credentials(), Some(&credentials()));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RelayConfiguration::load(dir.path().join("relay.toml")).unwrap_err();

    assert!(matches!(err, RelayConfigError::Io(_)));
    assert!(!err.is_recoverable());
}
