use slipway_config::{ConfigError, LoggingConfig, init_tracing};

#[test]
fn subscriber_installs_once() {
    let config = LoggingConfig {
        filter: "info,slipway::run=debug".into(),
    };

    init_tracing(&config).expect("first install succeeds");
    tracing::info!(target: "slipway::run", "subscriber installed");

    assert!(matches!(
        init_tracing(&config),
        Err(ConfigError::SubscriberInstalled(_))
    ));
}
