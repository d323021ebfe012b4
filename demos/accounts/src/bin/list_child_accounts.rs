use css_accounts_client::prelude::*;
use css_accounts_client::utils::config::{get_env_or_default, get_env_or_none};
use std::error::Error;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    // Load configuration from environment variables
    let cfg = Config::new();
    let parent: String = get_env_or_default("CSS_ACCOUNT", "accounts/123".to_string());
    let label_id: Option<i64> = get_env_or_none("CSS_LABEL_ID");

    let mut client = match AccountsServiceClient::new(cfg) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create client: {e}");
            return Err(Box::new(e) as Box<dyn Error>);
        }
    };
    client.set_default_options(
        CallOptions::new()
            .with_retry(RetryConfig::with_max_retries(3))
            .with_timeout(Duration::from_secs(30)),
    );
    info!("Using {} transport at {}", client.transport().kind(), client.transport().base_url());

    let account = client
        .get_account(GetAccountRequest::new(parent.clone()))
        .await?;
    info!("Account: {}", account);

    let mut request = ListChildAccountsRequest::new(parent).with_page_size(100);
    if let Some(label_id) = label_id {
        request = request.with_label_id(label_id);
    }

    let children = client.list_all_child_accounts(request).await?;
    info!("Found {} child accounts", children.len());
    for child in &children {
        info!(
            "{} {} [{}] labels={:?}",
            child.account_id().unwrap_or("-"),
            child.full_name,
            child.account_type,
            child.label_ids
        );
    }

    client.close().await;
    Ok(())
}
