//! Result-pagination poller tests.
//!
//! This module pins down the poller's contract against a mock server:
//! - Row accumulation in page-arrival order
//! - The two completion signals (`finial` flag, zero total pages), either of
//!   which ends the loop
//! - The success-flag asymmetry: authoritative on non-terminal pages only
//! - Budget exhaustion with no partial result
//! - Prompt cancellation
//!
//! Sequential pages are modeled with `up_to_n_times(1)` mocks mounted in
//! order; each mock serves one page then falls through to the next.

mod common;

use std::time::Duration;

use common::*;
use logpoint_client::{CancellationToken, ClientError, LogpointClient};
use serde_json::json;

fn page(is_final: bool, total_pages: i64, rows: serde_json::Value) -> serde_json::Value {
    json!({
        "success": true,
        "finial": is_final,
        "complete": is_final,
        "totalPages": total_pages,
        "num_aggregated": rows.as_array().map(|r| r.len()).unwrap_or(0),
        "rows": rows,
        "columns": ["device_ip"],
        "grouping": [],
        "interesting_fields": ["device_ip"],
        "time_range": [1700000000u64, 1700003600u64],
        "orig_search_id": "sid-123",
        "query_type": "simple",
        "version": 1,
        "showAdditionalPanels": false,
        "status": {},
        "message": ""
    })
}

async fn mount_page(server: &MockServer, body: serde_json::Value, once: bool) {
    let mock = Mock::given(method("POST"))
        .and(path("/getsearchlogs"))
        .and(RequestDataField::new("searchId", "sid-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body));
    let mock = if once { mock.up_to_n_times(1) } else { mock };
    mock.mount(server).await;
}

#[tokio::test]
async fn test_rows_accumulate_in_arrival_order() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        page(false, 3, json!([{"n": 1}, {"n": 2}])),
        true,
    )
    .await;
    mount_page(&mock_server, page(false, 3, json!([{"n": 3}])), true).await;

    // Last page carries different metadata to prove last-page-wins.
    let mut last = page(true, 3, json!([{"n": 4}]));
    last["columns"] = json!(["count()"]);
    last["num_aggregated"] = json!(4);
    mount_page(&mock_server, last, false).await;

    let client = test_client(&mock_server.uri());
    let result = client.search_result("sid-123").await.unwrap();

    assert_eq!(
        result.rows,
        vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3}), json!({"n": 4})]
    );
    assert_eq!(result.meta.columns, vec!["count()"]);
    assert_eq!(result.meta.num_aggregated, 4);
    assert_eq!(result.meta.time_range, vec![1700000000, 1700003600]);
}

#[tokio::test]
async fn test_zero_total_pages_terminates_after_one_request() {
    let mock_server = MockServer::start().await;

    // finial is false here; the zero page count alone must end the loop,
    // and the page's rows still count.
    Mock::given(method("POST"))
        .and(path("/getsearchlogs"))
        .and(RequestDataField::new("searchId", "sid-123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(false, 0, json!([{"x": "only"}]))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.search_result("sid-123").await.unwrap();

    assert_eq!(result.rows, vec![json!({"x": "only"})]);
}

#[tokio::test]
async fn test_final_flag_terminates_regardless_of_total_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getsearchlogs"))
        .and(RequestDataField::new("searchId", "sid-123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(true, 99, json!([{"n": 1}]))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.search_result("sid-123").await.unwrap();

    assert_eq!(result.rows.len(), 1);
}

#[tokio::test]
async fn test_poll_budget_exhaustion_discards_rows() {
    let mock_server = MockServer::start().await;

    // Every page is non-terminal; the test client's budget is 5.
    Mock::given(method("POST"))
        .and(path("/getsearchlogs"))
        .and(RequestDataField::new("searchId", "sid-123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(false, 10, json!([{"n": 1}]))),
        )
        .expect(5)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.search_result("sid-123").await.unwrap_err();

    assert!(matches!(err, ClientError::PollExhausted { attempts: 5 }));
}

#[tokio::test]
async fn test_non_terminal_failure_page_rejects_with_message() {
    let mock_server = MockServer::start().await;

    let mut body = page(false, 3, json!([{"n": 1}]));
    body["success"] = json!(false);
    body["message"] = json!("query could not be parsed");
    mount_page(&mock_server, body, false).await;

    let client = test_client(&mock_server.uri());
    let err = client.search_result("sid-123").await.unwrap_err();

    match err {
        ClientError::Rejected { message } => {
            assert_eq!(message, "query could not be parsed");
        }
        other => panic!("expected Rejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_terminal_failure_page_still_completes() {
    let mock_server = MockServer::start().await;

    // The service sometimes clears `success` on the last page even though
    // the result set is fine; a terminal page tolerates it.
    let mut body = page(true, 1, json!([{"n": 1}]));
    body["success"] = json!(false);
    body["message"] = json!("ignored on terminal pages");
    mount_page(&mock_server, body, false).await;

    let client = test_client(&mock_server.uri());
    let result = client.search_result("sid-123").await.unwrap();

    assert_eq!(result.rows, vec![json!({"n": 1})]);
}

#[tokio::test]
async fn test_transport_error_mid_stream_propagates() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, page(false, 3, json!([{"n": 1}])), true).await;
    Mock::given(method("POST"))
        .and(path("/getsearchlogs"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.search_result("sid-123").await.unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 503, .. }));
}

#[tokio::test]
async fn test_pre_cancelled_token_aborts_without_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/getsearchlogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(true, 1, json!([]))))
        .expect(0)
        .mount(&mock_server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let client = test_client(&mock_server.uri());
    let err = client
        .search_result_with_cancel("sid-123", &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Cancelled));
}

#[tokio::test]
async fn test_cancellation_interrupts_poll_sleep() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, page(false, 3, json!([{"n": 1}])), false).await;

    // Long poll interval; cancellation must win the race against the sleep
    // instead of waiting it out.
    let client = LogpointClient::builder()
        .base_url(mock_server.uri())
        .credentials(test_credentials())
        .poll_interval(Duration::from_secs(30))
        .build()
        .unwrap();

    let cancel = CancellationToken::new();
    let poll_cancel = cancel.clone();
    let handle = tokio::spawn(async move {
        client
            .search_result_with_cancel("sid-123", &poll_cancel)
            .await
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    let result = tokio::time::timeout(Duration::from_secs(2), handle)
        .await
        .expect("cancellation should interrupt the sleep promptly")
        .unwrap();

    assert!(matches!(result, Err(ClientError::Cancelled)));
}
