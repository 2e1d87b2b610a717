//! Commission forms, online commission estimates and exchange rates.

use reqwest::Method;
use serde_json::{json, Value};

use crate::catalog::CURRENCY_RUB;
use crate::client::QiwiWallet;
use crate::error::Error;
use crate::executor::RequestDescriptor;
use crate::payment::PaymentMethod;

/// Parameters for an online commission estimate.
#[derive(Debug, Clone)]
pub struct CommissionRequest {
    /// Destination account the payment would go to.
    pub account: String,
    pub amount: f64,
}

impl QiwiWallet {
    /// Fetch the static commission form for a recipient.
    pub async fn check_commission(&self, recipient: u32) -> Result<Value, Error> {
        let url = self.edge_url(&format!("sinap/providers/{recipient}/form"))?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }

    /// Ask the provider for the exact commission of a prospective
    /// payment.
    pub async fn check_online_commission(
        &self,
        recipient: u32,
        request: &CommissionRequest,
    ) -> Result<Value, Error> {
        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(Error::Config(format!(
                "invalid commission amount: {}",
                request.amount
            )));
        }
        let url = self.edge_url(&format!("sinap/providers/{recipient}/onlineCommission"))?;
        let descriptor = RequestDescriptor::new(Method::POST, url).json_body(&json!({
            "account": request.account,
            "paymentMethod": PaymentMethod::default(),
            "purchaseTotals": {
                "total": {
                    "amount": request.amount,
                    "currency": CURRENCY_RUB,
                }
            }
        }))?;
        self.execute(descriptor).await
    }

    /// Fetch the cross exchange rates table.
    pub async fn get_cross_rates(&self) -> Result<Value, Error> {
        let url = self.edge_url("sinap/crossRates")?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }
}
