//! Wire types shared by every outbound payment.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::catalog::{PAYMENT_ACCOUNT_ID, SOURCE_ACCOUNT};
use crate::error::Error;

/// Monetary amount paired with a provider currency code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sum {
    pub amount: f64,
    pub currency: String,
}

/// The fixed source/payment-method pair carried by every payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub account_id: String,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self {
            kind: "Account".to_string(),
            account_id: PAYMENT_ACCOUNT_ID.to_string(),
        }
    }
}

/// Body of a `sinap/terms/{provider}/payments` call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Client-generated idempotency identifier.
    pub id: String,
    pub sum: Sum,
    pub source: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Destination-specific fields (`account`, bank codes, requisites).
    pub fields: Value,
}

impl PaymentRequest {
    /// Build a payment body, validating the amount before any network
    /// call is made.
    pub(crate) fn new(
        amount: f64,
        currency: &str,
        comment: Option<String>,
        fields: Value,
    ) -> Result<Self, Error> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::Config(format!("invalid payment amount: {amount}")));
        }
        Ok(Self {
            id: payment_id(),
            sum: Sum {
                amount,
                currency: currency.to_string(),
            },
            source: SOURCE_ACCOUNT.to_string(),
            payment_method: PaymentMethod::default(),
            comment,
            fields,
        })
    }
}

/// Client-generated payment identifier.
///
/// A random UUID rather than the historical scaled timestamp: rapid
/// sequential payments must not collide.
pub(crate) fn payment_id() -> String {
    Uuid::new_v4().simple().to_string()
}
