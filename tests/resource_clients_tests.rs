mod common;

use blindpay::resources::bank_accounts::{CreatePixInput, CreateWireInput};
use blindpay::resources::payins::{ExportPayinsInput, ListPayinsInput};
use blindpay::resources::quotes::CreateQuoteInput;
use blindpay::resources::receivers::{Receiver, UpdateReceiverInput};
use blindpay::resources::terms_of_service::InitiateTermsInput;
use blindpay::resources::virtual_accounts::UpdateVirtualAccountInput;
use blindpay::resources::wallets::{CreateBlockchainWalletWithAddressInput, CreateOfframpWalletInput};
use blindpay::{
    ApiResponse, BlindPayError, Country, CurrencyType, Network, PaginationParams, Patch, StablecoinToken,
    TransactionStatus,
};
use common::{client_with_spy, individual_standard_receiver, INSTANCE_ID};
use reqwest::Method;
use serde_json::json;

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_ids_never_reach_the_transport() {
        let (client, spy) = client_with_spy();

        let err = client.receivers().get("").await.unwrap_err();
        assert_eq!(err.to_string(), "Receiver ID cannot be empty");

        assert!(client.payins().get("").await.unwrap_err().is_validation());
        assert!(client.payouts().get_track("").await.unwrap_err().is_validation());
        assert!(client.partner_fees().delete("").await.unwrap_err().is_validation());
        assert!(client.instances().api_keys().get("").await.unwrap_err().is_validation());
        assert!(client.instances().webhook_endpoints().get_secret("").await.unwrap_err().is_validation());
        assert!(client.receivers().bank_accounts().get("re_1", "").await.unwrap_err().is_validation());
        assert!(client.wallets().blockchain().create_asset_trustline("").await.unwrap_err().is_validation());
        assert!(client.wallets().offramp().get("re_1", "ba_1", "").await.unwrap_err().is_validation());
        assert!(client
            .terms_of_service()
            .initiate(&InitiateTermsInput::new(""))
            .await
            .unwrap_err()
            .is_validation());

        assert!(spy.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_page_window_is_rejected_before_request() {
        let err = PaginationParams::new(Some(25), None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid limit. Must be one of: 10, 50, 100, 200, 1000");
        assert_eq!(err.context().get("limit").map(String::as_str), Some("25"));

        assert!(ExportPayinsInput::new(TransactionStatus::Completed, None, Some(7)).is_err());
    }
}

#[cfg(test)]
mod routing_tests {
    use super::*;

    #[tokio::test]
    async fn test_receiver_list_dispatches_by_shape() {
        let (client, spy) = client_with_spy();
        spy.respond_with(json!([
            individual_standard_receiver("re_1"),
            individual_standard_receiver("re_2")
        ]));

        let receivers = client.receivers().list().await.unwrap().into_data().unwrap();
        assert_eq!(receivers.len(), 2);
        assert!(matches!(receivers[0], Receiver::IndividualStandard(_)));
        assert_eq!(receivers[1].id(), "re_2");

        let call = spy.last_call();
        assert_eq!(call.method, Method::GET);
        assert_eq!(call.path, format!("/instances/{}/receivers", INSTANCE_ID));
    }

    #[tokio::test]
    async fn test_unknown_receiver_shape_fails_whole_list() {
        let (client, spy) = client_with_spy();
        let mut legacy = individual_standard_receiver("re_2");
        legacy["kyc_type"] = json!("legacy");
        spy.respond_with(json!([individual_standard_receiver("re_1"), legacy]));

        let err = client.receivers().list().await.unwrap_err();
        assert!(matches!(err, BlindPayError::UnknownVariant { .. }));
        assert_eq!(err.to_string(), "Unknown receiver type: individual/legacy");
    }

    #[tokio::test]
    async fn test_remote_error_passes_through_untouched() {
        let (client, spy) = client_with_spy();
        spy.respond(ApiResponse::error("Receiver not found"));

        let response = client.receivers().get("re_missing").await.unwrap();
        assert_eq!(response.error_info().unwrap().message, "Receiver not found");
    }

    #[tokio::test]
    async fn test_receiver_update_is_sparse_patch() {
        let (client, spy) = client_with_spy();
        let input = UpdateReceiverInput {
            email: Patch::Set("new@example.com".to_string()),
            address_line_2: Patch::Null,
            ..UpdateReceiverInput::new("re_1")
        };

        let response = client.receivers().update(&input).await.unwrap();
        assert!(response.is_success());

        let call = spy.last_call();
        assert_eq!(call.method, Method::PATCH);
        assert_eq!(call.path, format!("/instances/{}/receivers/re_1", INSTANCE_ID));
        assert_eq!(call.body, Some(json!({"email": "new@example.com", "address_line_2": null})));
    }

    #[tokio::test]
    async fn test_payin_list_query_and_pagination() {
        let (client, spy) = client_with_spy();
        spy.respond_with(json!({
            "data": [],
            "pagination": {"has_more": true, "next_page": 2, "prev_page": 0}
        }));

        let input = ListPayinsInput {
            status: Some(TransactionStatus::Processing),
            receiver_id: Some("re_1".to_string()),
            pagination: PaginationParams::default().with_limit(50).unwrap(),
        };
        let page = client.payins().list(Some(&input)).await.unwrap().into_data().unwrap();
        assert!(page.data.is_empty());
        assert!(page.pagination.has_more);

        assert_eq!(
            spy.last_call().path,
            format!("/instances/{}/payins?limit=50&status=processing&receiver_id=re_1", INSTANCE_ID)
        );
    }

    #[tokio::test]
    async fn test_exports_decode_bare_arrays() {
        let (client, spy) = client_with_spy();
        spy.respond_with(json!([]));
        spy.respond_with(json!([]));

        let export = ExportPayinsInput::new(TransactionStatus::Completed, Some(10), Some(0)).unwrap();
        let payins = client.payins().export(&export).await.unwrap();
        assert_eq!(payins.data().map(Vec::len), Some(0));

        let payouts = client.payouts().export(None).await.unwrap();
        assert!(payouts.is_success());

        let paths: Vec<String> = spy.calls().into_iter().map(|call| call.path).collect();
        assert_eq!(
            paths,
            vec![
                format!("/instances/{}/export/payins?status=completed&limit=10&offset=0", INSTANCE_ID),
                format!("/instances/{}/export/payouts", INSTANCE_ID),
            ]
        );
    }

    #[tokio::test]
    async fn test_tracking_paths_are_not_instance_scoped() {
        let (client, spy) = client_with_spy();
        spy.respond(ApiResponse::error("not found"));
        spy.respond(ApiResponse::error("not found"));

        client.payins().get_track("pi_1").await.unwrap();
        client.payouts().get_track("po_1").await.unwrap();

        let paths: Vec<String> = spy.calls().into_iter().map(|call| call.path).collect();
        assert_eq!(paths, vec!["/e/payins/pi_1", "/e/payouts/po_1"]);
    }

    #[tokio::test]
    async fn test_quote_body_sends_explicit_nulls() {
        let (client, spy) = client_with_spy();
        spy.respond(ApiResponse::error("Bank account not found"));

        let input = CreateQuoteInput::new("ba_1", CurrencyType::Sender, 1000.0);
        client.quotes().create(&input).await.unwrap();

        let call = spy.last_call();
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.path, format!("/instances/{}/quotes", INSTANCE_ID));
        let body = call.body.unwrap();
        assert_eq!(body["partner_fee_id"], serde_json::Value::Null);
        assert_eq!(body["currency_type"], "sender");
    }

    #[tokio::test]
    async fn test_bank_account_create_tags_rail() {
        let (client, spy) = client_with_spy();
        spy.respond(ApiResponse::error("invalid"));
        spy.respond(ApiResponse::error("invalid"));

        let pix = CreatePixInput {
            receiver_id: "re_1".to_string(),
            name: "PIX Account".to_string(),
            pix_key: "14947677768".to_string(),
        };
        client.receivers().bank_accounts().create_pix(&pix).await.unwrap();

        let rtp = CreateWireInput {
            receiver_id: "re_1".to_string(),
            name: "RTP Account".to_string(),
            account_number: "1001001234".to_string(),
            beneficiary_name: "John Doe".to_string(),
            routing_number: "012345678".to_string(),
            address_line_1: "Address line 1".to_string(),
            address_line_2: None,
            city: "City".to_string(),
            state_province_region: "State".to_string(),
            country: Country::US,
            postal_code: "12345".to_string(),
        };
        client.receivers().bank_accounts().create_rtp(&rtp).await.unwrap();

        let calls = spy.calls();
        let path = format!("/instances/{}/receivers/re_1/bank-accounts", INSTANCE_ID);
        assert_eq!(calls[0].path, path);
        assert_eq!(
            calls[0].body,
            Some(json!({"type": "pix", "name": "PIX Account", "pix_key": "14947677768"}))
        );
        let rtp_body = calls[1].body.clone().unwrap();
        assert_eq!(rtp_body["type"], "rtp");
        assert!(rtp_body.get("address_line_2").is_none());
    }

    #[tokio::test]
    async fn test_virtual_account_update_uses_put() {
        let (client, spy) = client_with_spy();
        let input = UpdateVirtualAccountInput {
            receiver_id: "re_1".to_string(),
            blockchain_wallet_id: "bw_1".to_string(),
            token: StablecoinToken::Usdb,
        };

        assert!(client.virtual_accounts().update(&input).await.unwrap().is_success());
        let call = spy.last_call();
        assert_eq!(call.method, Method::PUT);
        assert_eq!(call.path, format!("/instances/{}/receivers/re_1/virtual-accounts", INSTANCE_ID));
    }

    #[tokio::test]
    async fn test_virtual_account_get_decodes_free_form_account_type() {
        let (client, spy) = client_with_spy();
        let details = json!({"routing_number": "123456789", "account_number": "123456789"});
        let party = json!({"name": "JPMorgan Chase", "address_line_1": "270 Park Ave", "address_line_2": "New York"});
        spy.respond_with(json!({
            "id": "va_000000000000",
            "us": {
                "ach": details,
                "wire": details,
                "rtp": details,
                "swift_bic_code": "CHASUS33",
                "account_type": "Business checking",
                "beneficiary": party,
                "receiving_bank": party
            },
            "token": "USDC",
            "blockchain_wallet_id": "bw_000000000000"
        }));

        let account = client.virtual_accounts().get("re_1").await.unwrap().into_result().unwrap();
        assert_eq!(account.us.account_type, "Business checking");
        assert_eq!(spy.last_call().method, Method::GET);
    }

    #[tokio::test]
    async fn test_wallet_paths() {
        let (client, spy) = client_with_spy();
        spy.respond(ApiResponse::error("x"));
        spy.respond(ApiResponse::error("x"));
        spy.respond(ApiResponse::error("x"));

        let wallet = CreateBlockchainWalletWithAddressInput {
            receiver_id: "re_1".to_string(),
            name: "Wallet".to_string(),
            network: Network::Base,
            address: "0x1".to_string(),
        };
        client.wallets().blockchain().create_with_address(&wallet).await.unwrap();
        client.wallets().blockchain().get_wallet_message("re_1").await.unwrap();

        let offramp = CreateOfframpWalletInput {
            receiver_id: "re_1".to_string(),
            bank_account_id: "ba_1".to_string(),
            external_id: "ext_1".to_string(),
            network: "tron".to_string(),
        };
        client.wallets().offramp().create(&offramp).await.unwrap();

        let calls = spy.calls();
        assert_eq!(calls[0].body.as_ref().unwrap()["is_account_abstraction"], true);
        assert_eq!(
            calls[1].path,
            format!("/instances/{}/receivers/re_1/blockchain-wallets/sign-message", INSTANCE_ID)
        );
        assert_eq!(
            calls[2].path,
            format!("/instances/{}/receivers/re_1/bank-accounts/ba_1/offramp-wallets", INSTANCE_ID)
        );
    }

    #[tokio::test]
    async fn test_terms_of_service_posts_to_public_path() {
        let (client, spy) = client_with_spy();
        spy.respond_with(json!({"url": "https://app.blindpay.com/e/terms-of-service?session_token=abc"}));

        let response = client
            .terms_of_service()
            .initiate(&InitiateTermsInput::new("3fa85f64-5717-4562-b3fc-2c963f66afa6"))
            .await
            .unwrap();
        assert!(response.data().unwrap().url.contains("session_token"));

        let call = spy.last_call();
        assert_eq!(call.path, format!("/e/instances/{}/tos", INSTANCE_ID));
        assert_eq!(
            call.body,
            Some(json!({"idempotency_key": "3fa85f64-5717-4562-b3fc-2c963f66afa6"}))
        );
    }
}

#[cfg(test)]
mod concurrency_tests {
    use super::*;
    use futures::future::join_all;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_concurrent_calls_share_one_client() {
        let (client, spy) = client_with_spy();
        for _ in 0..5 {
            spy.respond_with(json!([]));
        }
        let client = Arc::new(client);

        let tasks = (0..5).map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.partner_fees().list().await })
        });
        let results = join_all(tasks).await;

        for result in results {
            let response = result.unwrap().unwrap();
            assert_eq!(response.data().map(Vec::len), Some(0));
        }
        assert_eq!(spy.calls().len(), 5);
    }
}
