//! Operation history, statistics, transaction detail and receipts.
//!
//! The v2 endpoints are keyed directly by wallet number; no preliminary
//! profile fetch is involved.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::Value;

use crate::catalog::ReceiptFormat;
use crate::client::QiwiWallet;
use crate::error::Error;
use crate::executor::RequestDescriptor;

/// Filters for a paginated history query. All fields are optional; the
/// provider applies its own defaults.
#[derive(Debug, Clone, Default)]
pub struct HistoryOptions {
    /// Page size, 1..=50.
    pub rows: Option<u32>,
    /// Direction filter: `IN`, `OUT`, `QIWI_CARD` or `ALL`.
    pub operation: Option<String>,
    /// Funding source filter, e.g. `QW_RUB`.
    pub sources: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Continuation cursor: `nextTxnDate` of the previous page.
    pub next_txn_date: Option<DateTime<Utc>>,
    /// Continuation cursor: `nextTxnId` of the previous page.
    pub next_txn_id: Option<u64>,
}

impl HistoryOptions {
    fn apply(&self, descriptor: RequestDescriptor) -> RequestDescriptor {
        descriptor
            .query_opt("rows", self.rows)
            .query_opt("operation", self.operation.clone())
            .query_opt("sources", self.sources.clone())
            .query_opt("startDate", self.start_date.map(|d| d.to_rfc3339()))
            .query_opt("endDate", self.end_date.map(|d| d.to_rfc3339()))
            .query_opt("nextTxnDate", self.next_txn_date.map(|d| d.to_rfc3339()))
            .query_opt("nextTxnId", self.next_txn_id)
    }
}

/// Filters for an aggregate statistics query.
#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    pub operation: Option<String>,
    pub sources: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl StatsOptions {
    fn apply(&self, descriptor: RequestDescriptor) -> RequestDescriptor {
        descriptor
            .query_opt("operation", self.operation.clone())
            .query_opt("sources", self.sources.clone())
            .query_opt("startDate", self.start_date.map(|d| d.to_rfc3339()))
            .query_opt("endDate", self.end_date.map(|d| d.to_rfc3339()))
    }
}

/// Receipt fetch parameters.
#[derive(Debug, Clone)]
pub struct ReceiptOptions {
    /// Transaction direction as reported by the history entry.
    pub kind: Option<String>,
    pub format: ReceiptFormat,
}

impl QiwiWallet {
    /// Fetch a page of the wallet's operation history.
    pub async fn get_operation_history(
        &self,
        wallet: &str,
        options: &HistoryOptions,
    ) -> Result<Value, Error> {
        let url = self.edge_url(&format!("payment-history/v2/persons/{wallet}/payments"))?;
        let descriptor = options.apply(RequestDescriptor::new(Method::GET, url));
        self.execute(descriptor).await
    }

    /// Fetch aggregate operation statistics for a period.
    pub async fn get_operation_statistics(
        &self,
        wallet: &str,
        options: &StatsOptions,
    ) -> Result<Value, Error> {
        let url = self.edge_url(&format!(
            "payment-history/v2/persons/{wallet}/payments/total"
        ))?;
        let descriptor = options.apply(RequestDescriptor::new(Method::GET, url));
        self.execute(descriptor).await
    }

    /// Fetch a single transaction's detail by id.
    pub async fn get_transaction_info(&self, transaction_id: &str) -> Result<Value, Error> {
        let url = self.edge_url(&format!(
            "payment-history/v2/transactions/{transaction_id}"
        ))?;
        self.execute(RequestDescriptor::new(Method::GET, url)).await
    }

    /// Fetch a transaction's receipt as file bytes.
    pub async fn get_receipt(
        &self,
        transaction_id: &str,
        options: &ReceiptOptions,
    ) -> Result<Vec<u8>, Error> {
        let url = self.edge_url(&format!(
            "payment-history/v1/transactions/{transaction_id}/cheque/file"
        ))?;
        let descriptor = RequestDescriptor::new(Method::GET, url)
            .query_opt("type", options.kind.clone())
            .query("format", options.format.as_str());
        self.execute_bytes(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use url::Url;

    fn descriptor() -> RequestDescriptor {
        let url =
            Url::parse("https://edge.qiwi.com/payment-history/v2/persons/79991234567/payments")
                .unwrap();
        RequestDescriptor::new(Method::GET, url)
    }

    #[test]
    fn history_options_render_rfc3339_dates() {
        let options = HistoryOptions {
            rows: Some(50),
            operation: Some("OUT".to_string()),
            start_date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        let descriptor = options.apply(descriptor());
        assert_eq!(
            descriptor.query,
            vec![
                ("rows", "50".to_string()),
                ("operation", "OUT".to_string()),
                ("startDate", "2024-03-01T00:00:00+00:00".to_string()),
            ]
        );
    }

    #[test]
    fn empty_options_add_no_query() {
        let descriptor = HistoryOptions::default().apply(descriptor());
        assert!(descriptor.query.is_empty());
    }
}
