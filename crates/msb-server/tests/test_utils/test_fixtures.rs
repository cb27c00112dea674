//! Test fixtures for msb-server tests
//!
//! Provides factory functions for upstream JSON payloads and tool call
//! requests.

#![allow(dead_code)]

use msb_domain::value_objects::ShippingAddress;
use rmcp::model::CallToolRequestParam;
use serde_json::{Value, json};

/// Create a representative order payload
pub fn sample_order(order_id: &str) -> Value {
    json!({
        "order": {
            "id": order_id,
            "email": "bob.norman@mail.example.com",
            "financial_status": "paid",
            "fulfillment_status": null,
            "total_price": "199.65",
            "currency": "USD",
            "line_items": [
                {"id": 466157049, "title": "IPod Nano - 8gb", "quantity": 1}
            ]
        }
    })
}

/// Create a representative refund payload
pub fn sample_refund(order_id: &str) -> Value {
    json!({
        "refund": {
            "id": 929361462,
            "order_id": order_id,
            "note": null,
            "transactions": []
        }
    })
}

/// Create a representative customer payload
pub fn sample_customer(customer_id: &str) -> Value {
    json!({
        "customer": {
            "id": customer_id,
            "email": "bob.norman@mail.example.com",
            "first_name": "Bob",
            "last_name": "Norman",
            "orders_count": 1,
            "state": "disabled"
        }
    })
}

/// Create a representative product payload
pub fn sample_product(product_id: &str) -> Value {
    json!({
        "product": {
            "id": product_id,
            "title": "IPod Nano - 8GB",
            "vendor": "Apple",
            "product_type": "Cult Products",
            "status": "active"
        }
    })
}

/// Create a representative cancelled order payload
pub fn cancelled_order(order_id: &str) -> Value {
    json!({
        "order": {
            "id": order_id,
            "cancelled_at": "2026-01-14T10:00:00-05:00",
            "cancel_reason": "other",
            "financial_status": "voided"
        }
    })
}

/// Create a shipping address with well-known and unknown fields
pub fn dublin_address() -> ShippingAddress {
    serde_json::from_value(json!({
        "address1": "1 Grafton Street",
        "city": "Dublin",
        "country": "Ireland",
        "zip": "D02 AE86",
        "eircode_zone": "D02"
    }))
    .expect("address fixture deserializes")
}

/// Build a tool call request with JSON arguments
pub fn call_request(name: &str, arguments: Value) -> CallToolRequestParam {
    CallToolRequestParam {
        name: name.to_string().into(),
        arguments: arguments.as_object().cloned(),
        task: None,
        meta: None,
    }
}
