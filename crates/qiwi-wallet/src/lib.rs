//! Client SDK for the QIWI Wallet REST API.
//!
//! One async method per remote operation: accounts and balances, payment
//! history, outbound transfers (wallet / phone / card / bank / arbitrary
//! provider / requisites), commission checks, currency conversion,
//! webhooks, invoices and identification. Every call funnels through a
//! single request executor that normalizes results: the provider signals
//! business failures via an `errorCode` field in the body, not via the
//! HTTP status.
//!
//! # Quick example
//!
//! ```no_run
//! use qiwi_wallet::{QiwiWallet, TransferRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), qiwi_wallet::Error> {
//! let wallet = QiwiWallet::new("ACCESS_TOKEN")?;
//!
//! let receipt = wallet
//!     .to_wallet(&TransferRequest {
//!         amount: 100.0,
//!         account: "79991234567".to_string(),
//!         comment: Some("thanks".to_string()),
//!     })
//!     .await?;
//! println!("{receipt}");
//! # Ok(())
//! # }
//! ```
//!
//! Phone and card transfers resolve the destination provider id first
//! (the payment path embeds it); a failed detection surfaces as
//! [`Error::DetectionFailed`] and the payment request is never issued.

pub mod catalog;
pub mod error;
pub mod payment;

mod accounts;
mod client;
mod commission;
mod detect;
mod executor;
mod history;
mod identification;
mod invoices;
mod payments;
mod webhooks;

pub use catalog::{BankRecipient, ReceiptFormat, TxnType};
pub use client::{QiwiWallet, DETECT_BASE_URL, EDGE_BASE_URL};
pub use commission::CommissionRequest;
pub use detect::{DetectCode, DetectResponse};
pub use error::{Error, RemoteError};
pub use executor::OperationStatus;
pub use history::{HistoryOptions, ReceiptOptions, StatsOptions};
pub use identification::IdentificationRequest;
pub use invoices::InvoiceSearchOptions;
pub use payment::{PaymentMethod, PaymentRequest, Sum};
pub use payments::{
    BankTransferRequest, ConversionRequest, RequisitesRequest, TransferRequest,
};
