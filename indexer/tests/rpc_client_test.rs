use httpmock::prelude::*;
use serde_json::json;
use tokio::net::TcpListener;

use nexscan_indexer::config::RpcConfig;
use nexscan_indexer::infrastructure::rpc::{ChainRpc, RpcClient, RpcClientError};

fn client(endpoint: String) -> RpcClient {
    RpcClient::new(&RpcConfig {
        endpoint,
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_call_extracts_result() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .json_body_partial(r#"{"jsonrpc": "2.0", "method": "getEpochInfo"}"#);
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": {"epoch": 42, "slotsInEpoch": 8192}}));
        })
        .await;

    let epoch = client(server.base_url()).get_epoch_info().await.unwrap().unwrap();

    mock.assert_async().await;
    assert_eq!(epoch.epoch, 42);
    assert_eq!(epoch.slots_in_epoch, 8192);
    assert_eq!(epoch.block_height, 0);
}

#[tokio::test]
async fn test_error_response_yields_null() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .json_body_partial(r#"{"method": "getValidatorPerformance", "params": ["vote-a"]}"#);
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32601, "message": "Method not found"}
            }));
        })
        .await;

    let value = client(server.base_url())
        .get_validator_performance("vote-a")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(value.is_null());
}

#[tokio::test]
async fn test_missing_vote_accounts_is_empty_set() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).json_body_partial(r#"{"method": "getVoteAccounts"}"#);
            then.status(200).json_body(json!({"jsonrpc": "2.0", "id": 1}));
        })
        .await;

    let accounts = client(server.base_url()).get_vote_accounts().await.unwrap();

    assert!(accounts.current.is_empty());
    assert!(accounts.delinquent.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(503).body("{}");
        })
        .await;

    let err = client(server.base_url()).get_epoch_info().await.unwrap_err();

    assert!(matches!(err, RpcClientError::Status(503)));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).json_body_partial(r#"{"method": "getBalance", "params": ["addr"]}"#);
            then.status(200)
                .header("content-type", "text/html")
                .body("<html>gateway</html>");
        })
        .await;

    let err = client(server.base_url()).get_balance("addr").await.unwrap_err();

    assert!(matches!(err, RpcClientError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client(endpoint).get_epoch_info().await.unwrap_err();

    assert!(matches!(err, RpcClientError::Transport(_)));
}
