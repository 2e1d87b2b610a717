//! Outbound transfers: wallet, phone, card, bank, arbitrary provider,
//! payment-by-requisites, and currency conversion.
//!
//! Phone and card transfers resolve their provider id first (see
//! [`crate::detect`]); the payment request is not constructed until that
//! lookup has fully resolved.

use reqwest::Method;
use serde_json::{json, Value};

use crate::catalog::{BankRecipient, CURRENCY_RUB, REQUISITES_PROVIDER_ID, WALLET_PROVIDER_ID};
use crate::client::QiwiWallet;
use crate::error::Error;
use crate::executor::RequestDescriptor;
use crate::payment::PaymentRequest;

/// A transfer to a wallet, phone or card: amount in RUB, destination
/// account, optional free-text comment.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub amount: f64,
    /// Destination: wallet number, 10-digit phone number, or card number.
    pub account: String,
    pub comment: Option<String>,
}

/// A transfer to a bank account.
#[derive(Debug, Clone)]
pub struct BankTransferRequest {
    pub amount: f64,
    /// Account or card number at the receiving bank.
    pub account: String,
    /// Card expiry `MMYY`, required by card-backed bank transfers.
    pub exp_date: Option<String>,
    pub comment: Option<String>,
}

/// A payment by requisites to a commercial payee.
#[derive(Debug, Clone)]
pub struct RequisitesRequest {
    pub amount: f64,
    /// Payee account number.
    pub account: String,
    /// Receiving bank name.
    pub bank_name: String,
    pub bik: String,
    pub city: String,
    /// Organization name.
    pub to_name: String,
    pub to_inn: String,
    pub to_kpp: String,
    /// Payment purpose.
    pub goal: String,
    pub urgent: bool,
    /// Sender identity: surname, name, patronymic.
    pub from_name_f: String,
    pub from_name: String,
    pub from_name_p: String,
    pub comment: Option<String>,
}

/// A currency conversion within the wallet: the same payment shape as a
/// wallet transfer with the currency overridden.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub amount: f64,
    /// Target currency code, e.g. `978` for EUR.
    pub currency: String,
    /// Own wallet number.
    pub account: String,
    pub comment: Option<String>,
}

impl QiwiWallet {
    /// Transfer to another wallet.
    pub async fn to_wallet(&self, request: &TransferRequest) -> Result<Value, Error> {
        let descriptor = self.transfer_descriptor(
            &WALLET_PROVIDER_ID.to_string(),
            request,
            CURRENCY_RUB,
        )?;
        self.execute(descriptor).await
    }

    /// Transfer to a mobile phone. Resolves the operator first; the
    /// payment is issued only after detection succeeds.
    pub async fn to_mobile_phone(&self, request: &TransferRequest) -> Result<Value, Error> {
        let provider = self.detect_operator(&request.account).await?;
        let descriptor = self.transfer_descriptor(&provider, request, CURRENCY_RUB)?;
        self.execute(descriptor).await
    }

    /// Transfer to a bank card. Resolves the card network first.
    pub async fn to_card(&self, request: &TransferRequest) -> Result<Value, Error> {
        let provider = self.detect_card(&request.account).await?;
        let descriptor = self.transfer_descriptor(&provider, request, CURRENCY_RUB)?;
        self.execute(descriptor).await
    }

    /// Transfer to a bank account. The recipient comes from the bank
    /// catalog ([`crate::catalog::banks`]) and supplies both the provider
    /// id and the account-type code.
    pub async fn to_bank(
        &self,
        request: &BankTransferRequest,
        recipient: BankRecipient,
    ) -> Result<Value, Error> {
        let payment = PaymentRequest::new(
            request.amount,
            CURRENCY_RUB,
            request.comment.clone(),
            json!({
                "account": request.account,
                "account_type": recipient.account_type,
                "exp_date": request.exp_date,
            }),
        )?;
        let descriptor = self.payment_descriptor(&recipient.id.to_string(), &payment)?;
        self.execute(descriptor).await
    }

    /// Transfer to an arbitrary provider whose id the caller supplies.
    pub async fn to_provider(
        &self,
        provider_id: u32,
        request: &TransferRequest,
    ) -> Result<Value, Error> {
        let descriptor =
            self.transfer_descriptor(&provider_id.to_string(), request, CURRENCY_RUB)?;
        self.execute(descriptor).await
    }

    /// Payment by requisites to a commercial payee.
    pub async fn to_requisites(&self, request: &RequisitesRequest) -> Result<Value, Error> {
        let payment = PaymentRequest::new(
            request.amount,
            CURRENCY_RUB,
            request.comment.clone(),
            requisites_fields(request),
        )?;
        let descriptor =
            self.payment_descriptor(&REQUISITES_PROVIDER_ID.to_string(), &payment)?;
        self.execute(descriptor).await
    }

    /// Convert currency between the wallet's own accounts.
    pub async fn convert_currency(&self, request: &ConversionRequest) -> Result<Value, Error> {
        let payment = PaymentRequest::new(
            request.amount,
            &request.currency,
            request.comment.clone(),
            json!({ "account": request.account }),
        )?;
        let descriptor = self.payment_descriptor(&WALLET_PROVIDER_ID.to_string(), &payment)?;
        self.execute(descriptor).await
    }

    /// Descriptor for the plain account-destination transfer shape.
    pub(crate) fn transfer_descriptor(
        &self,
        provider: &str,
        request: &TransferRequest,
        currency: &str,
    ) -> Result<RequestDescriptor, Error> {
        let payment = PaymentRequest::new(
            request.amount,
            currency,
            request.comment.clone(),
            json!({ "account": request.account }),
        )?;
        self.payment_descriptor(provider, &payment)
    }

    fn payment_descriptor(
        &self,
        provider: &str,
        payment: &PaymentRequest,
    ) -> Result<RequestDescriptor, Error> {
        let url = self.edge_url(&format!("sinap/terms/{provider}/payments"))?;
        RequestDescriptor::new(Method::POST, url).json_body(payment)
    }
}

/// The requisites form expects every flag as a string.
fn requisites_fields(request: &RequisitesRequest) -> Value {
    let urgent = if request.urgent { "1" } else { "0" };
    json!({
        "name": request.bank_name,
        "extra_to_bik": request.bik,
        "to_bik": request.bik,
        "city": request.city,
        "info": "Коммерческие организации",
        "is_commercial_org": "1",
        "to_name": request.to_name,
        "to_inn": request.to_inn,
        "to_kpp": request.to_kpp,
        "goal": request.goal,
        "urgent": urgent,
        "account": request.account,
        "from_name": request.from_name,
        "from_name_p": request.from_name_p,
        "from_name_f": request.from_name_f,
        "requestProtocol": "qw1",
        "toServiceId": REQUISITES_PROVIDER_ID.to_string(),
    })
}
