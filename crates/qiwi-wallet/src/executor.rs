//! Generic request executor: one descriptor in, one normalized result out.
//!
//! The provider signals business failures inside a 200-shaped body: a
//! response containing `errorCode` is a failure no matter what the HTTP
//! status says, and a non-2xx status without `errorCode` is a transport
//! problem, not a remote one. Every façade method funnels through here so
//! that callers see a single result shape.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::client::QiwiWallet;
use crate::error::{Error, RemoteError};

/// Body field whose presence marks a business failure.
const ERROR_CODE_FIELD: &str = "errorCode";

/// A single remote call, built fresh per façade invocation and never
/// mutated by the executor.
#[derive(Debug, Clone)]
pub(crate) struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Append a query pair only when the value is present. Keeps option
    /// structs from leaking `null` parameters onto the wire.
    pub fn query_opt(mut self, name: &'static str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((name, value.to_string()));
        }
        self
    }

    /// Attach a JSON body.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        self.body = Some(
            serde_json::to_value(body)
                .map_err(|e| Error::Config(format!("failed to encode request body: {e}")))?,
        );
        Ok(self)
    }
}

/// Outcome of an operation whose success is communicated only via
/// HTTP 204 with an empty body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationStatus {
    pub success: bool,
}

impl QiwiWallet {
    /// Perform the call and decode the body into `T`.
    ///
    /// The body is read and parsed exactly once; `T` is usually
    /// [`serde_json::Value`] so the payload reaches the caller unchanged.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, Error> {
        let (status, bytes) = self.dispatch(&descriptor).await?;

        let body: Value = match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(e) if status.is_success() => {
                return Err(Error::MalformedResponse(format!(
                    "{} {}: invalid JSON: {e}",
                    descriptor.method, descriptor.url
                )));
            }
            Err(_) => {
                return Err(transport_status_error(status, &bytes));
            }
        };

        if let Some(code) = body.get(ERROR_CODE_FIELD) {
            let error_code = error_code_string(code);
            tracing::warn!(
                url = %descriptor.url,
                status = status.as_u16(),
                error_code = %error_code,
                "remote operation failed"
            );
            return Err(Error::Remote(RemoteError { error_code, body }));
        }

        if !status.is_success() {
            return Err(transport_status_error(status, &bytes));
        }

        serde_json::from_value(body).map_err(|e| {
            Error::MalformedResponse(format!(
                "{} {}: unexpected body shape: {e}",
                descriptor.method, descriptor.url
            ))
        })
    }

    /// Perform a call whose success is signalled only via HTTP 204.
    /// The body is never parsed.
    pub(crate) async fn execute_no_content(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<OperationStatus, Error> {
        let (status, _) = self.dispatch(&descriptor).await?;
        Ok(OperationStatus {
            success: status == StatusCode::NO_CONTENT,
        })
    }

    /// Perform the call and return the raw body bytes (receipt files).
    pub(crate) async fn execute_bytes(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<Vec<u8>, Error> {
        let (status, bytes) = self.dispatch(&descriptor).await?;
        if status.is_success() {
            return Ok(bytes);
        }
        // Failed file fetches still report errors as JSON.
        if let Ok(body) = serde_json::from_slice::<Value>(&bytes) {
            if let Some(code) = body.get(ERROR_CODE_FIELD) {
                return Err(Error::Remote(RemoteError {
                    error_code: error_code_string(code),
                    body,
                }));
            }
        }
        Err(transport_status_error(status, &bytes))
    }

    async fn dispatch(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<(StatusCode, Vec<u8>), Error> {
        tracing::debug!(method = %descriptor.method, url = %descriptor.url, "dispatching request");

        let mut request = self
            .http()
            .request(descriptor.method.clone(), descriptor.url.clone());
        if !descriptor.query.is_empty() {
            request = request.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request failed: {e}")))?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "response received");

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("failed to read response body: {e}")))?;
        Ok((status, bytes.to_vec()))
    }
}

/// `errorCode` is usually a string but some endpoints send a number.
fn error_code_string(code: &Value) -> String {
    match code {
        Value::String(code) => code.clone(),
        other => other.to_string(),
    }
}

fn transport_status_error(status: StatusCode, bytes: &[u8]) -> Error {
    let body = String::from_utf8_lossy(bytes);
    let snippet: String = body.chars().take(512).collect();
    Error::Transport(format!("http {}: {snippet}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_accumulates_query_pairs() {
        let url = Url::parse("https://edge.qiwi.com/payment-history/v2/persons/1/payments").unwrap();
        let descriptor = RequestDescriptor::new(Method::GET, url)
            .query("rows", 25)
            .query_opt("operation", Some("IN"))
            .query_opt("sources", None::<String>);
        assert_eq!(
            descriptor.query,
            vec![
                ("rows", "25".to_string()),
                ("operation", "IN".to_string())
            ]
        );
    }

    #[test]
    fn json_body_encodes_value() {
        let url = Url::parse("https://edge.qiwi.com/sinap/terms/99/payments").unwrap();
        let descriptor = RequestDescriptor::new(Method::POST, url)
            .json_body(&json!({"alias": "qw_wallet_eur"}))
            .unwrap();
        assert_eq!(descriptor.body, Some(json!({"alias": "qw_wallet_eur"})));
    }

    #[test]
    fn numeric_error_codes_are_stringified() {
        assert_eq!(error_code_string(&json!("auth.bad")), "auth.bad");
        assert_eq!(error_code_string(&json!(500)), "500");
    }
}
