//! Account and profile operations.

use reqwest::Method;
use serde_json::{json, Value};

use crate::client::QiwiWallet;
use crate::error::Error;
use crate::executor::{OperationStatus, RequestDescriptor};

impl QiwiWallet {
    /// List the accounts (balances) of a wallet.
    ///
    /// `wallet` is the wallet number with country prefix and without the
    /// plus sign, e.g. `79991234567`.
    pub async fn get_accounts(&self, wallet: &str) -> Result<Value, Error> {
        let url = self.edge_url(&format!("funding-sources/v2/persons/{wallet}/accounts"))?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }

    /// Create a new account by alias (e.g. `qw_wallet_eur`).
    pub async fn create_account(&self, wallet: &str, alias: &str) -> Result<Value, Error> {
        let url = self.edge_url(&format!("funding-sources/v2/persons/{wallet}/accounts"))?;
        let descriptor =
            RequestDescriptor::new(Method::POST, url).json_body(&json!({ "alias": alias }))?;
        self.execute(descriptor).await
    }

    /// Make an account the default one.
    ///
    /// The endpoint answers 204 with an empty body on success; the result
    /// carries `success: true` for exactly that status.
    pub async fn set_default_account(
        &self,
        wallet: &str,
        alias: &str,
    ) -> Result<OperationStatus, Error> {
        let url = self.edge_url(&format!(
            "funding-sources/v2/persons/{wallet}/accounts/{alias}"
        ))?;
        let descriptor = RequestDescriptor::new(Method::PATCH, url)
            .json_body(&json!({ "defaultAccount": true }))?;
        self.execute_no_content(descriptor).await
    }

    /// List aliases of accounts that can still be created for a wallet.
    pub async fn get_possible_account_aliases(&self, wallet: &str) -> Result<Value, Error> {
        let url = self.edge_url(&format!(
            "funding-sources/v2/persons/{wallet}/accounts/offer"
        ))?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }

    /// Fetch the current profile (contract info, auth info, user info).
    pub async fn get_profile(&self) -> Result<Value, Error> {
        let url = self.edge_url("person-profile/v1/profile/current")?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }

    /// Fetch the balance of the current wallet (legacy v1 endpoint).
    pub async fn get_balance(&self) -> Result<Value, Error> {
        let url = self.edge_url("funding-sources/v1/accounts/current")?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }
}
