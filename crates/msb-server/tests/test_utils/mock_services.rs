//! Mock implementation of the commerce gateway port for testing

#![allow(dead_code)]

use async_trait::async_trait;
use msb_domain::error::{Error, Result};
use msb_domain::ports::CommerceGateway;
use msb_domain::value_objects::ShippingAddress;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// A single recorded gateway invocation
///
/// The address is recorded as the JSON value the gateway would forward, so
/// tests can assert the caller's mapping reached the port unmodified.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    GetOrder(String),
    RefundOrder(String),
    GetCustomer(String),
    GetProduct(String),
    UpdateShippingAddress(String, Value),
    CancelOrder(String),
}

/// Failure the mock raises instead of responding
#[derive(Debug, Clone)]
enum MockFailure {
    Upstream { status: u16, body: String },
    Internal(String),
}

/// Mock implementation of CommerceGateway for testing
///
/// Every operation records its arguments and returns the pre-configured
/// response (or failure). Cloning shares the recorded state, so a test can
/// keep a handle for assertions after moving a clone into the handler.
#[derive(Clone)]
pub struct MockCommerceGateway {
    /// Pre-configured response returned by every operation
    response: Arc<Mutex<Value>>,
    /// Failure to raise instead of responding, if set
    failure: Arc<Mutex<Option<MockFailure>>>,
    /// Recorded invocations in call order
    calls: Arc<Mutex<Vec<GatewayCall>>>,
}

impl MockCommerceGateway {
    /// Create a new mock gateway returning an empty object
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(json!({}))),
            failure: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure the mock to return a specific response
    pub fn with_response(self, response: Value) -> Self {
        *self.response.lock().expect("Lock poisoned") = response;
        self
    }

    /// Configure the mock to fail with an upstream status error
    pub fn with_upstream_failure(self, status: u16, body: &str) -> Self {
        *self.failure.lock().expect("Lock poisoned") = Some(MockFailure::Upstream {
            status,
            body: body.to_string(),
        });
        self
    }

    /// Configure the mock to fail with an internal error
    pub fn with_failure(self, message: &str) -> Self {
        *self.failure.lock().expect("Lock poisoned") =
            Some(MockFailure::Internal(message.to_string()));
        self
    }

    /// All recorded invocations, in call order
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().expect("Lock poisoned").clone()
    }

    /// Number of recorded invocations
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("Lock poisoned").len()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.lock().expect("Lock poisoned").push(call);
    }

    fn respond(&self) -> Result<Value> {
        if let Some(failure) = self.failure.lock().expect("Lock poisoned").as_ref() {
            return Err(match failure {
                MockFailure::Upstream { status, body } => Error::upstream(*status, body.clone()),
                MockFailure::Internal(message) => Error::internal(message.clone()),
            });
        }
        Ok(self.response.lock().expect("Lock poisoned").clone())
    }
}

impl Default for MockCommerceGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommerceGateway for MockCommerceGateway {
    async fn get_order(&self, order_id: &str) -> Result<Value> {
        self.record(GatewayCall::GetOrder(order_id.to_string()));
        self.respond()
    }

    async fn refund_order(&self, order_id: &str) -> Result<Value> {
        self.record(GatewayCall::RefundOrder(order_id.to_string()));
        self.respond()
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Value> {
        self.record(GatewayCall::GetCustomer(customer_id.to_string()));
        self.respond()
    }

    async fn get_product(&self, product_id: &str) -> Result<Value> {
        self.record(GatewayCall::GetProduct(product_id.to_string()));
        self.respond()
    }

    async fn update_shipping_address(
        &self,
        order_id: &str,
        address: &ShippingAddress,
    ) -> Result<Value> {
        let address_value = serde_json::to_value(address).expect("address serializes");
        self.record(GatewayCall::UpdateShippingAddress(
            order_id.to_string(),
            address_value,
        ));
        self.respond()
    }

    async fn cancel_order(&self, order_id: &str) -> Result<Value> {
        self.record(GatewayCall::CancelOrder(order_id.to_string()));
        self.respond()
    }
}
