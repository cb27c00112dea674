//! MCP Error Handling Tests
//!
//! Tests that validate BOTH the error/success channel AND the content of
//! tool responses for MCP compliance. Upstream failures must surface the
//! upstream status and body; local validation failures must name the
//! offending argument.

use msb_server::args::{GetOrderArgs, RefundOrderArgs};
use msb_server::handlers::{GetOrderHandler, RefundOrderHandler};
use rmcp::handler::server::wrapper::Parameters;
use std::sync::Arc;

use crate::test_utils::mock_services::MockCommerceGateway;
use crate::test_utils::test_fixtures::sample_order;

/// Extract text content from CallToolResult content vector
fn extract_text_content(content: &[rmcp::model::Content]) -> String {
    content
        .iter()
        .filter_map(|c| {
            if let Ok(json) = serde_json::to_value(c) {
                if let Some(text) = json.get("text") {
                    return text.as_str().map(|s| s.to_string());
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// SUCCESS RESPONSES - Must not carry is_error and must hold the upstream JSON
// =============================================================================

#[tokio::test]
async fn test_success_response_has_is_error_false() {
    let mock = MockCommerceGateway::new().with_response(sample_order("450789469"));
    let handler = GetOrderHandler::new(Arc::new(mock));

    let args = GetOrderArgs {
        order_id: "450789469".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    let response = result.expect("Expected successful response");
    assert!(
        !response.is_error.unwrap_or(false),
        "Success response MUST NOT have is_error: true"
    );
}

#[tokio::test]
async fn test_success_response_contains_upstream_payload() {
    let payload = sample_order("450789469");
    let mock = MockCommerceGateway::new().with_response(payload.clone());
    let handler = GetOrderHandler::new(Arc::new(mock));

    let args = GetOrderArgs {
        order_id: "450789469".to_string(),
    };

    let response = handler
        .handle(Parameters(args))
        .await
        .expect("Expected successful response");
    let text = extract_text_content(&response.content);

    let round_tripped: serde_json::Value =
        serde_json::from_str(&text).expect("response text should be JSON");
    assert_eq!(
        round_tripped, payload,
        "Tool result MUST carry the upstream JSON unmodified"
    );
}

// =============================================================================
// VALIDATION FAILURES - Must be invalid_params with the failing argument named
// =============================================================================

#[tokio::test]
async fn test_validation_failure_is_mcp_error() {
    let mock = MockCommerceGateway::new();
    let handler = GetOrderHandler::new(Arc::new(mock.clone()));

    let args = GetOrderArgs {
        order_id: "../../admin".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    assert!(result.is_err(), "Invalid identifier MUST fail the call");
    let err = result.expect_err("Expected validation error");
    let err_str = format!("{:?}", err);
    assert!(
        err_str.contains("Invalid arguments"),
        "Validation error MUST say the arguments were invalid. Got: {}",
        err_str
    );
    assert_eq!(
        mock.call_count(),
        0,
        "Validation failures MUST NOT reach the gateway"
    );
}

#[tokio::test]
async fn test_validation_failure_names_the_field() {
    let mock = MockCommerceGateway::new();
    let handler = GetOrderHandler::new(Arc::new(mock));

    let args = GetOrderArgs {
        order_id: "".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    let err = result.expect_err("Expected validation error");
    let err_str = format!("{:?}", err);
    assert!(
        err_str.contains("order_id") || err_str.contains("Order ID"),
        "Validation error MUST name the failing field. Got: {}",
        err_str
    );
}

// =============================================================================
// UPSTREAM FAILURES - Must propagate status and body through the MCP error
// =============================================================================

#[tokio::test]
async fn test_upstream_failure_is_mcp_error() {
    let mock = MockCommerceGateway::new().with_upstream_failure(404, r#"{"errors":"Not Found"}"#);
    let handler = GetOrderHandler::new(Arc::new(mock));

    let args = GetOrderArgs {
        order_id: "999999999".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    assert!(result.is_err(), "Upstream failure MUST fail the call");
}

#[tokio::test]
async fn test_upstream_failure_surfaces_status_and_body() {
    let mock = MockCommerceGateway::new()
        .with_upstream_failure(422, r#"{"errors":{"order":"cannot be refunded"}}"#);
    let handler = RefundOrderHandler::new(Arc::new(mock));

    let args = RefundOrderArgs {
        order_id: "450789469".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    let err = result.expect_err("Expected upstream error");
    let err_str = format!("{:?}", err);
    assert!(
        err_str.contains("422"),
        "MCP error MUST surface the upstream status. Got: {}",
        err_str
    );
    assert!(
        err_str.contains("cannot be refunded"),
        "MCP error MUST surface the upstream body. Got: {}",
        err_str
    );
}

#[tokio::test]
async fn test_internal_failure_surfaces_message() {
    let mock = MockCommerceGateway::new().with_failure("connection reset by peer");
    let handler = GetOrderHandler::new(Arc::new(mock));

    let args = GetOrderArgs {
        order_id: "450789469".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    let err = result.expect_err("Expected internal error");
    let err_str = format!("{:?}", err);
    assert!(
        err_str.contains("connection reset by peer"),
        "MCP error MUST carry the underlying failure. Got: {}",
        err_str
    );
}
