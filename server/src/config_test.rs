use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT });
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn parses_host_and_port() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn parses_ipv6_host() {
    let cfg = ServerConfig::from_values(Some("::1"), Some("3000")).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:3000");
}

#[test]
fn rejects_invalid_port() {
    assert_eq!(
        ServerConfig::from_values(None, Some("http")),
        Err(ConfigError::InvalidPort("http".into()))
    );
    assert_eq!(
        ServerConfig::from_values(None, Some("70000")),
        Err(ConfigError::InvalidPort("70000".into()))
    );
}

#[test]
fn rejects_invalid_host() {
    assert_eq!(
        ServerConfig::from_values(Some("localhost"), None),
        Err(ConfigError::InvalidHost("localhost".into()))
    );
}

#[test]
fn error_messages() {
    assert_eq!(ConfigError::InvalidPort("x".into()).to_string(), "invalid PORT `x`");
    assert_eq!(ConfigError::Leptos("missing".into()).to_string(), "leptos configuration: missing");
}
