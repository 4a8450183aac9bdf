use super::*;

#[test]
fn missing_block_uses_defaults() {
    assert_eq!(resolve(None), SiteConfig::default());
}

#[test]
fn blank_block_uses_defaults() {
    assert_eq!(resolve(Some("  \n ")), SiteConfig::default());
}

#[test]
fn valid_block_is_applied() {
    let config = resolve(Some(r#"{ "phrases": ["Rust Developer"] }"#));
    assert_eq!(config.phrases, vec!["Rust Developer".to_owned()]);
}

#[test]
fn malformed_block_falls_back_to_defaults() {
    assert_eq!(resolve(Some("{ not json")), SiteConfig::default());
    assert_eq!(resolve(Some(r#"{ "recipient": "" }"#)), SiteConfig::default());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_without_browser_is_default() {
    assert_eq!(load(), SiteConfig::default());
}
