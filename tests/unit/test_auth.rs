use css_accounts_client::prelude::*;
use std::sync::Arc;
use tokio_test::block_on;

#[test]
fn test_static_token_provider() {
    let provider = StaticTokenProvider::new("ya29.token");
    assert_eq!(block_on(provider.access_token()).unwrap(), "ya29.token");
    assert!(!provider.can_refresh());
}

#[test]
fn test_blank_token_is_unauthenticated() {
    let auth = Auth::new(Arc::new(StaticTokenProvider::new("   ")));
    assert!(matches!(
        block_on(auth.token()),
        Err(AppError::Unauthenticated)
    ));
}

#[test]
fn test_auth_from_config() {
    let config = Config::with_host_and_token("localhost", "cfg-token");
    let auth = Auth::from_config(&config).unwrap();
    assert_eq!(block_on(auth.token()).unwrap(), "cfg-token");
    assert!(!auth.can_refresh());

    block_on(auth.clear());
    assert_eq!(block_on(auth.token()).unwrap(), "cfg-token");
}

#[test]
fn test_auth_from_config_without_token() {
    assert!(matches!(
        Auth::from_config(&Config::default()),
        Err(AppError::Unauthenticated)
    ));
}
