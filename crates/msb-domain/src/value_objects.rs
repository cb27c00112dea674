//! Value Objects
//!
//! Types that cross the tool boundary. The bridge treats upstream payloads
//! as opaque JSON; the one structured value it carries is the shipping
//! address supplied to the address-update operation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Value Object: Shipping Address
///
/// A free-form address mapping forwarded to the commerce API unchanged.
/// The well-known address fields are typed for schema generation; anything
/// else the caller supplies is captured by the flattened `extra` map, so
/// serializing the address reproduces the caller's mapping exactly.
///
/// ## Business Rules
///
/// - No field is required, validated, or normalized locally
/// - Absent fields are omitted from the serialized form
/// - Unknown keys round-trip verbatim through `extra`
///
/// ## Example
///
/// ```rust
/// use msb_domain::value_objects::ShippingAddress;
///
/// let address = ShippingAddress {
///     city: Some("Dublin".to_string()),
///     country_code: Some("IE".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(
///     serde_json::to_string(&address).unwrap(),
///     r#"{"city":"Dublin","country_code":"IE"}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ShippingAddress {
    /// Recipient first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Recipient last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Full recipient name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Street address, first line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    /// Street address, second line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Region, state, or province
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    /// Two-letter province or state code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    /// Postal or ZIP code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Country name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Two-letter country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Any additional fields, passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
