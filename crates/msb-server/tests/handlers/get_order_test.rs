//! Tests for GetOrderHandler

use msb_server::args::GetOrderArgs;
use msb_server::handlers::GetOrderHandler;
use rmcp::handler::server::wrapper::Parameters;
use std::sync::Arc;

use crate::test_utils::mock_services::{GatewayCall, MockCommerceGateway};
use crate::test_utils::test_fixtures::sample_order;

#[tokio::test]
async fn test_get_order_valid_id() {
    let mock = MockCommerceGateway::new().with_response(sample_order("450789469"));
    let handler = GetOrderHandler::new(Arc::new(mock.clone()));

    let args = GetOrderArgs {
        order_id: "450789469".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    assert!(result.is_ok());
    let response = result.expect("Expected successful response");
    assert!(!response.is_error.unwrap_or(false));
    assert_eq!(
        mock.calls(),
        vec![GatewayCall::GetOrder("450789469".to_string())]
    );
}

#[tokio::test]
async fn test_get_order_trims_whitespace() {
    let mock = MockCommerceGateway::new().with_response(sample_order("123456789"));
    let handler = GetOrderHandler::new(Arc::new(mock.clone()));

    let args = GetOrderArgs {
        order_id: "  123456789  ".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    assert!(result.is_ok());
    // The gateway sees the trimmed identifier
    assert_eq!(
        mock.calls(),
        vec![GatewayCall::GetOrder("123456789".to_string())]
    );
}

#[tokio::test]
async fn test_get_order_empty_id() {
    let mock = MockCommerceGateway::new();
    let handler = GetOrderHandler::new(Arc::new(mock.clone()));

    let args = GetOrderArgs {
        order_id: "".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    // Empty identifier should fail validation
    assert!(result.is_err());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_get_order_whitespace_only_id() {
    let mock = MockCommerceGateway::new();
    let handler = GetOrderHandler::new(Arc::new(mock.clone()));

    let args = GetOrderArgs {
        order_id: "   ".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    // Whitespace-only identifier should fail validation after trimming
    assert!(result.is_err());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_get_order_upstream_not_found() {
    let mock = MockCommerceGateway::new().with_upstream_failure(404, r#"{"errors":"Not Found"}"#);
    let handler = GetOrderHandler::new(Arc::new(mock));

    let args = GetOrderArgs {
        order_id: "999999999".to_string(),
    };

    let result = handler.handle(Parameters(args)).await;

    // Upstream error should propagate as MCP error
    assert!(result.is_err());
}

#[tokio::test]
async fn test_get_order_single_gateway_call() {
    let mock = MockCommerceGateway::new().with_response(sample_order("450789469"));
    let handler = GetOrderHandler::new(Arc::new(mock.clone()));

    let args = GetOrderArgs {
        order_id: "450789469".to_string(),
    };

    let _ = handler.handle(Parameters(args)).await;

    // Exactly one upstream request per tool call
    assert_eq!(mock.call_count(), 1);
}
