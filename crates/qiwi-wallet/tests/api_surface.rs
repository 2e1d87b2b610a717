//! Descriptor shapes of the remaining catalog: commission, webhooks,
//! invoices, identification.

use httpmock::prelude::*;
use qiwi_wallet::{QiwiWallet, TxnType};
use serde_json::json;

fn wallet_for(server: &MockServer) -> QiwiWallet {
    QiwiWallet::with_base_urls("test-token", &server.base_url(), &server.base_url()).unwrap()
}

#[tokio::test]
async fn check_commission_issues_a_bare_get() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/sinap/providers/99/form")
            .body("");
        then.status(200).json_body(json!({
            "content": {"terms": {"commission": {"ranges": []}}}
        }));
    });

    wallet_for(&server).check_commission(99).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn online_commission_posts_purchase_totals() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/sinap/providers/466/onlineCommission")
            .body_includes("\"purchaseTotals\"")
            .body_includes("\"currency\":\"643\"");
        then.status(200).json_body(json!({"qwCommission": {"amount": 50.0}}));
    });

    wallet_for(&server)
        .check_online_commission(
            466,
            &qiwi_wallet::CommissionRequest {
                account: "4111111111111111".to_string(),
                amount: 5000.0,
            },
        )
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn add_webhook_puts_parameters_as_query_string() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::PUT)
            .path("/payment-notifier/v1/hooks")
            .query_param("hookType", "1")
            .query_param("param", "https://example.com/hook")
            .query_param("txnType", "2")
            .body("");
        then.status(200).json_body(json!({
            "hookId": "9b5f9b59-b8bd-4a54-9f54-a2b71b8ab2b1"
        }));
    });

    let hook = wallet_for(&server)
        .add_webhook("https://example.com/hook", TxnType::All)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(
        hook["hookId"],
        json!("9b5f9b59-b8bd-4a54-9f54-a2b71b8ab2b1")
    );
}

#[tokio::test]
async fn webhook_lifecycle_paths() {
    let server = MockServer::start();
    let secret = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/payment-notifier/v1/hooks/abc/key");
        then.status(200).json_body(json!({"key": "base64key"}));
    });
    let rotate = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/payment-notifier/v1/hooks/abc/newkey");
        then.status(200).json_body(json!({"key": "freshkey"}));
    });
    let remove = server.mock(|when, then| {
        when.method(Method::DELETE)
            .path("/payment-notifier/v1/hooks/abc");
        then.status(200).json_body(json!({"response": "Ok"}));
    });
    let active = server.mock(|when, then| {
        when.method(Method::GET).path("/payment-notifier/v1/hooks/active");
        then.status(200).json_body(json!({"hookId": "abc"}));
    });
    let test = server.mock(|when, then| {
        when.method(Method::GET).path("/payment-notifier/v1/hooks/test");
        then.status(200).json_body(json!({"response": "Ok"}));
    });

    let wallet = wallet_for(&server);
    wallet.get_webhook_secret("abc").await.unwrap();
    wallet.new_webhook_secret("abc").await.unwrap();
    wallet.get_active_webhook().await.unwrap();
    wallet.test_active_webhook().await.unwrap();
    wallet.remove_webhook("abc").await.unwrap();

    secret.assert();
    rotate.assert();
    remove.assert();
    active.assert();
    test.assert();
}

#[tokio::test]
async fn invoice_search_defaults_to_payable_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/checkout-api/api/bill/search")
            .query_param("statuses", "READY_FOR_PAY")
            .query_param("rows", "10");
        then.status(200).json_body(json!({"bills": []}));
    });

    wallet_for(&server)
        .get_invoices(&qiwi_wallet::InvoiceSearchOptions {
            rows: Some(10),
            ..Default::default()
        })
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn pay_invoice_posts_uid_and_currency() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/checkout-api/invoice/pay/wallet")
            .json_body(json!({"invoice_uid": "ivc-123", "currency": "643"}));
        then.status(200).json_body(json!({"invoice_status": "PAID"}));
    });

    wallet_for(&server)
        .pay_invoice("ivc-123", "643")
        .await
        .unwrap();
    mock.assert();
}

#[tokio::test]
async fn cancel_invoice_posts_the_id() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/checkout-api/api/bill/reject")
            .json_body(json!({"id": "1044"}));
        then.status(200).json_body(json!({"response": "Ok"}));
    });

    wallet_for(&server).cancel_invoice("1044").await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn identification_round_trip() {
    let server = MockServer::start();
    let fetch = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/identification/v1/persons/79991234567/identification");
        then.status(200).json_body(json!({"id": 79991234567u64, "type": "VERIFIED"}));
    });
    let submit = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/identification/v1/persons/79991234567/identification")
            .body_includes("\"birthDate\":\"1990-01-01\"");
        then.status(200).json_body(json!({"id": 79991234567u64, "type": "FULL"}));
    });

    let wallet = wallet_for(&server);
    let level = wallet.get_identification("79991234567").await.unwrap();
    assert_eq!(level["type"], json!("VERIFIED"));

    wallet
        .identify_wallet(
            "79991234567",
            &qiwi_wallet::IdentificationRequest {
                birth_date: "1990-01-01".to_string(),
                first_name: "Иван".to_string(),
                middle_name: "Иванович".to_string(),
                last_name: "Иванов".to_string(),
                passport: "4400123456".to_string(),
                inn: None,
                snils: None,
                oms: None,
            },
        )
        .await
        .unwrap();

    fetch.assert();
    submit.assert();
}
