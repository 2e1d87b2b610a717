//! Wallet identification: fetch the current level, submit personal data.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::client::QiwiWallet;
use crate::error::Error;
use crate::executor::RequestDescriptor;

/// Personal data submitted for wallet identification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationRequest {
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// Passport series and number, digits only.
    pub passport: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snils: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oms: Option<String>,
}

impl QiwiWallet {
    /// Fetch the identification level and data of a wallet.
    pub async fn get_identification(&self, wallet: &str) -> Result<Value, Error> {
        let url = self.edge_url(&format!(
            "identification/v1/persons/{wallet}/identification"
        ))?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }

    /// Submit identification data for a wallet.
    pub async fn identify_wallet(
        &self,
        wallet: &str,
        request: &IdentificationRequest,
    ) -> Result<Value, Error> {
        let url = self.edge_url(&format!(
            "identification/v1/persons/{wallet}/identification"
        ))?;
        let descriptor = RequestDescriptor::new(Method::POST, url).json_body(request)?;
        self.execute(descriptor).await
    }
}
