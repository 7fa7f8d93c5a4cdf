use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_trimmed_number() {
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_garbage_and_zero() {
    assert!(matches!(parse_port(Some("http")), Err(ConfigError::InvalidPort { value }) if value == "http"));
    assert!(matches!(parse_port(Some("0")), Err(ConfigError::InvalidPort { .. })));
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn parse_site_root_is_optional_but_not_empty() {
    assert_eq!(parse_site_root(None).unwrap(), None);
    assert_eq!(parse_site_root(Some("target/site")).unwrap(), Some(PathBuf::from("target/site")));
    assert!(matches!(parse_site_root(Some("  ")), Err(ConfigError::EmptySiteRoot)));
}

#[test]
fn addr_binds_all_interfaces() {
    let cfg = ServerConfig { port: 4000, site_root: None };
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:4000");
}

#[test]
fn from_env_reads_port_and_site_root() {
    // Safety: the only test in this crate that touches the environment.
    unsafe {
        std::env::set_var("PORT", "3100");
        std::env::set_var("SITE_ROOT", "/srv/storefront");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { port: 3100, site_root: Some(PathBuf::from("/srv/storefront")) });

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITE_ROOT");
    }
}
