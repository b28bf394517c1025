//! Operator-facing rendering of relay configurations.

use relay_config::{
    PLAIN_PEER_MAP_UPDATE_INTERVAL_SECS, PUSH_PEER_MAP_UPDATE_INTERVAL_SECS, PUSH_SEND_RETRIES,
    RelayConfiguration, RelayKind,
};

/// Render a configuration as `key: value` lines
///
/// The push authentication key is never rendered.
pub fn render(config: &RelayConfiguration) -> Vec<String> {
    let mut lines = vec![
        format!("Strategy: {}", config.kind()),
        format!(
            "Peer map update interval: {}s",
            config.peer_map_update_interval_secs()
        ),
    ];

    match config.push_delivery() {
        Some(delivery) => {
            lines.push(format!("Push sender: {}", delivery.credentials.sender_id()));
            lines.push(format!(
                "Push registration: {}",
                delivery.credentials.registration_id()
            ));
            lines.push(format!("Push send retries: {}", delivery.send_retries));
        }
        None => lines.push("Push delivery: not used".to_string()),
    }

    lines
}

/// Render the default tunables of a strategy
pub fn render_defaults(kind: RelayKind) -> Vec<String> {
    let (interval, retries) = match kind {
        RelayKind::PlainRelay => (PLAIN_PEER_MAP_UPDATE_INTERVAL_SECS, 0),
        RelayKind::PushRelay => (PUSH_PEER_MAP_UPDATE_INTERVAL_SECS, PUSH_SEND_RETRIES),
    };

    let mut lines = vec![
        format!("Strategy: {kind}"),
        format!("Peer map update interval: {interval}s"),
        format!("Push send retries: {retries}"),
    ];
    if kind == RelayKind::PushRelay {
        lines.push("Push credentials: required".to_string());
    }
    lines
}
