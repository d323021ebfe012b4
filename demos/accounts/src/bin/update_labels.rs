use css_accounts_client::prelude::*;
use css_accounts_client::utils::config::get_env_or_default;
use std::error::Error;
use std::sync::Arc;
use tracing::{error, info};

/// Tags every label update and logs the result
struct AuditInterceptor {
    source: String,
}

impl AccountsServiceInterceptor for AuditInterceptor {
    fn pre_update_labels(
        &self,
        request: UpdateAccountLabelsRequest,
        mut metadata: Metadata,
    ) -> (UpdateAccountLabelsRequest, Metadata) {
        info!("Updating labels of {} to {:?}", request.name, request.label_ids);
        metadata.push(("x-request-source".to_string(), self.source.clone()));
        (request, metadata)
    }

    fn post_update_labels(&self, response: Account) -> Account {
        info!("{} now has labels {:?}", response.name, response.label_ids);
        response
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let cfg = Config::new();
    let name: String = get_env_or_default("CSS_ACCOUNT", "accounts/123".to_string());
    let labels: String = get_env_or_default("CSS_LABEL_IDS", String::new());

    let label_ids = labels
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()?;

    let interceptor = Arc::new(AuditInterceptor {
        source: "demos".to_string(),
    });
    let client = AccountsServiceClient::with_interceptor(cfg, interceptor)?;

    match client
        .update_labels(UpdateAccountLabelsRequest::new(name, label_ids))
        .await
    {
        Ok(account) => info!("Updated account: {}", account),
        Err(AppError::Api(e)) => {
            error!("API rejected the update ({:?}): {}", e.kind, e.message);
            if let Some(reason) = &e.reason {
                error!("Reason: {reason}");
            }
        }
        Err(e) => {
            error!("Update failed: {e}");
            return Err(Box::new(e) as Box<dyn Error>);
        }
    }

    client.close().await;
    Ok(())
}
