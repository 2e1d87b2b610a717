//! Webhook subscription management.
//!
//! The add endpoint takes its parameters as a query string on a PUT with
//! no body; the remote side rejects a JSON-body variant of the same
//! call, so the asymmetry is deliberate.

use reqwest::Method;
use serde_json::Value;

use crate::catalog::TxnType;
use crate::client::QiwiWallet;
use crate::error::Error;
use crate::executor::RequestDescriptor;

/// Hook type for HTTP callbacks. The only type the API currently has.
const WEB_HOOK_TYPE: u8 = 1;

impl QiwiWallet {
    /// Register a webhook for the wallet.
    pub async fn add_webhook(&self, hook_url: &str, txn_type: TxnType) -> Result<Value, Error> {
        let url = self.edge_url("payment-notifier/v1/hooks")?;
        let descriptor = RequestDescriptor::new(Method::PUT, url)
            .query("hookType", WEB_HOOK_TYPE)
            .query("param", hook_url)
            .query("txnType", txn_type.as_code());
        self.execute(descriptor).await
    }

    /// Remove a webhook by id.
    pub async fn remove_webhook(&self, hook_id: &str) -> Result<Value, Error> {
        let url = self.edge_url(&format!("payment-notifier/v1/hooks/{hook_id}"))?;
        self.execute(RequestDescriptor::new(Method::DELETE, url))
            .await
    }

    /// Fetch the secret key used to sign webhook notifications.
    pub async fn get_webhook_secret(&self, hook_id: &str) -> Result<Value, Error> {
        let url = self.edge_url(&format!("payment-notifier/v1/hooks/{hook_id}/key"))?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }

    /// Rotate the webhook secret key.
    pub async fn new_webhook_secret(&self, hook_id: &str) -> Result<Value, Error> {
        let url = self.edge_url(&format!("payment-notifier/v1/hooks/{hook_id}/newkey"))?;
        self.execute(RequestDescriptor::new(Method::POST, url))
            .await
    }

    /// Fetch the webhook currently active for this wallet.
    pub async fn get_active_webhook(&self) -> Result<Value, Error> {
        let url = self.edge_url("payment-notifier/v1/hooks/active")?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }

    /// Ask the provider to send a test notification to the active hook.
    pub async fn test_active_webhook(&self) -> Result<Value, Error> {
        let url = self.edge_url("payment-notifier/v1/hooks/test")?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }
}
