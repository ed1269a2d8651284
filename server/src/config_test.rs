use super::*;

use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_host_and_port_are_used() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidVar { var: "PORT", .. }));
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}
