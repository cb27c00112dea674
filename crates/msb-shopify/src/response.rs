//! Response status checking and JSON decoding

use msb_domain::error::{Error, Result};
use reqwest::Response;
use serde_json::Value;

/// Check response status and parse the JSON body
///
/// Any non-success status becomes [`Error::Upstream`] carrying the status
/// code and the raw body text; the body is never interpreted or reshaped.
/// Success responses are decoded as JSON and returned untouched.
pub async fn check_and_parse(response: Response) -> Result<Value> {
    let status = response.status();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(Error::upstream(status.as_u16(), body));
    }

    response
        .json()
        .await
        .map_err(|e| Error::json_with_source("Failed to decode response body", e))
}
