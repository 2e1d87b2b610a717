//! Operator and card detection.
//!
//! Phone and card payments embed a provider id in the payment path, so
//! the id must be resolved first. The detection endpoints answer 200
//! even when nothing matches; the sentinel `code.value == "2"` is the
//! real signal.

use reqwest::Method;
use serde::Deserialize;

use crate::client::QiwiWallet;
use crate::error::Error;
use crate::executor::RequestDescriptor;

/// Sentinel `code.value` meaning "no match found".
const NOT_FOUND_CODE: &str = "2";

#[derive(Debug, Clone, Deserialize)]
pub struct DetectResponse {
    /// The resolved provider id.
    pub message: String,
    pub code: DetectCode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectCode {
    pub value: String,
}

impl QiwiWallet {
    /// Resolve the mobile-operator provider id for a phone number
    /// (10 digits, without the country prefix).
    pub async fn detect_operator(&self, phone: &str) -> Result<String, Error> {
        let url = self.detect_url("mobile/detect.action")?;
        let descriptor =
            RequestDescriptor::new(Method::POST, url).query("phone", format!("7{phone}"));
        let response: DetectResponse = self.execute(descriptor).await?;
        if response.code.value == NOT_FOUND_CODE {
            return Err(Error::DetectionFailed(format!(
                "no operator matches phone {phone}"
            )));
        }
        Ok(response.message)
    }

    /// Resolve the card-network provider id for a card number.
    pub async fn detect_card(&self, card_number: &str) -> Result<String, Error> {
        let url = self.detect_url("card/detect.action")?;
        let descriptor =
            RequestDescriptor::new(Method::POST, url).query("cardNumber", card_number);
        let response: DetectResponse = self.execute(descriptor).await?;
        if response.code.value == NOT_FOUND_CODE {
            return Err(Error::DetectionFailed(format!(
                "invalid card number {}",
                mask_card(card_number)
            )));
        }
        Ok(response.message)
    }
}

/// Keep full card numbers out of error messages and logs.
fn mask_card(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_numbers_are_masked() {
        assert_eq!(mask_card("4111111111111111"), "****1111");
        assert_eq!(mask_card("123"), "****");
    }

    #[test]
    fn detect_response_parses_wire_shape() {
        let response: DetectResponse =
            serde_json::from_str(r#"{"message":"1963","code":{"value":"0","_name":"NORMAL"}}"#)
                .unwrap();
        assert_eq!(response.message, "1963");
        assert_eq!(response.code.value, "0");
    }
}
