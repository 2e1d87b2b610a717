//! Invoice search, payment and cancellation.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::{json, Value};

use crate::client::QiwiWallet;
use crate::error::Error;
use crate::executor::RequestDescriptor;

/// Status filter applied when the caller does not override it: only
/// invoices that are still payable.
const DEFAULT_STATUSES: &str = "READY_FOR_PAY";

/// Pagination and time-range filters for an invoice search.
#[derive(Debug, Clone, Default)]
pub struct InvoiceSearchOptions {
    /// Status filter; defaults to `READY_FOR_PAY`.
    pub statuses: Option<String>,
    /// Page size, 1..=50.
    pub rows: Option<u32>,
    pub min_creation_datetime: Option<DateTime<Utc>>,
    pub max_creation_datetime: Option<DateTime<Utc>>,
    /// Continuation cursor: id of the last invoice on the previous page.
    pub next_id: Option<u64>,
    /// Continuation cursor: creation time of the last invoice.
    pub next_creation_datetime: Option<DateTime<Utc>>,
}

impl QiwiWallet {
    /// Search issued invoices.
    pub async fn get_invoices(&self, options: &InvoiceSearchOptions) -> Result<Value, Error> {
        let url = self.edge_url("checkout-api/api/bill/search")?;
        let statuses = options
            .statuses
            .clone()
            .unwrap_or_else(|| DEFAULT_STATUSES.to_string());
        let descriptor = RequestDescriptor::new(Method::GET, url)
            .query("statuses", statuses)
            .query_opt("rows", options.rows)
            .query_opt(
                "min_creation_datetime",
                options.min_creation_datetime.map(|d| d.timestamp_millis()),
            )
            .query_opt(
                "max_creation_datetime",
                options.max_creation_datetime.map(|d| d.timestamp_millis()),
            )
            .query_opt("next_id", options.next_id)
            .query_opt(
                "next_creation_datetime",
                options
                    .next_creation_datetime
                    .map(|d| d.timestamp_millis()),
            );
        self.execute(descriptor).await
    }

    /// Pay an invoice from the wallet balance.
    pub async fn pay_invoice(&self, invoice_uid: &str, currency: &str) -> Result<Value, Error> {
        let url = self.edge_url("checkout-api/invoice/pay/wallet")?;
        let descriptor = RequestDescriptor::new(Method::POST, url).json_body(&json!({
            "invoice_uid": invoice_uid,
            "currency": currency,
        }))?;
        self.execute(descriptor).await
    }

    /// Reject an issued invoice by id.
    pub async fn cancel_invoice(&self, invoice_id: &str) -> Result<Value, Error> {
        let url = self.edge_url("checkout-api/api/bill/reject")?;
        let descriptor =
            RequestDescriptor::new(Method::POST, url).json_body(&json!({ "id": invoice_id }))?;
        self.execute(descriptor).await
    }
}
