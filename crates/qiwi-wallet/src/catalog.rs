//! Static provider catalogs and wire enumerations.
//!
//! Numeric provider ids are path segments in payment endpoints; they are
//! configuration data, loaded once and never mutated.

/// Provider id for transfers to another wallet.
pub const WALLET_PROVIDER_ID: u32 = 99;

/// Provider id for payment-by-requisites to commercial payees.
pub const REQUISITES_PROVIDER_ID: u32 = 1717;

/// RUB currency code. Every payment `sum` carries it unless a currency
/// conversion overrides it.
pub const CURRENCY_RUB: &str = "643";

/// Fixed funding source for outbound payments.
pub const SOURCE_ACCOUNT: &str = "account_643";

/// Fixed payment-method account id paired with [`SOURCE_ACCOUNT`].
pub const PAYMENT_ACCOUNT_ID: &str = "643";

/// A bank destination: provider id plus the account-type code the bank's
/// payment form expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankRecipient {
    pub id: u32,
    pub account_type: u32,
}

/// Bank recipients accepted by [`QiwiWallet::to_bank`](crate::QiwiWallet::to_bank).
pub mod banks {
    use super::BankRecipient;

    pub const ALFABANK: BankRecipient = BankRecipient { id: 464, account_type: 1 };
    pub const TINKOFF: BankRecipient = BankRecipient { id: 466, account_type: 1 };
    pub const AO_OTP_BANK: BankRecipient = BankRecipient { id: 804, account_type: 1 };
    pub const AO_ROSSELHOZBANK: BankRecipient = BankRecipient { id: 810, account_type: 5 };
    pub const RUSSKIY_STANDARD: BankRecipient = BankRecipient { id: 815, account_type: 1 };
    pub const PAO_VTB: BankRecipient = BankRecipient { id: 816, account_type: 5 };
    pub const PROMSVYAZBANK: BankRecipient = BankRecipient { id: 821, account_type: 7 };
    pub const PAO_SBERBANK: BankRecipient = BankRecipient { id: 870, account_type: 5 };
    pub const RENESSANS_CREDIT: BankRecipient = BankRecipient { id: 881, account_type: 1 };
    pub const MOSKOVSKIY_KREDITNIY_BANK: BankRecipient = BankRecipient { id: 1134, account_type: 5 };
}

/// Card-network provider ids.
pub mod cards {
    pub const VISA_RUS: u32 = 1963;
    pub const VISA_SNG: u32 = 1960;
    pub const MASTERCARD_RUS: u32 = 21013;
    pub const MASTERCARD_SNG: u32 = 21012;
    pub const MIR: u32 = 31652;
}

/// Miscellaneous service provider ids.
pub mod services {
    pub const ONLIME: u32 = 674;
    pub const PODARI_JIZN: u32 = 1239;
}

/// Transaction direction filter for history queries and webhook
/// subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnType {
    In,
    Out,
    All,
}

impl TxnType {
    /// Numeric wire code.
    pub fn as_code(self) -> u8 {
        match self {
            TxnType::In => 0,
            TxnType::Out => 1,
            TxnType::All => 2,
        }
    }
}

/// Receipt file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptFormat {
    Jpeg,
    Pdf,
}

impl ReceiptFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReceiptFormat::Jpeg => "JPEG",
            ReceiptFormat::Pdf => "PDF",
        }
    }
}
