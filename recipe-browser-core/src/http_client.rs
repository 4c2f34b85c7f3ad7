//! Generic HTTP client tools
//!
//! Shared request flow for data sources: send, log, classify the status,
//! read the body and parse JSON. No retry: a failed fetch stays failed until
//! the user changes state or refreshes.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::BrowserError;
use crate::utils::log_sanitizer::abbreviate_body;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor
    /// * `source_name` - data source name (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(BrowserError::Network | Timeout)` - the request never completed
    /// * `Err(BrowserError::HttpStatus)` - the backend answered with a non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source_name: &str,
        url: &str,
    ) -> Result<String, BrowserError> {
        log::debug!("[{source_name}] GET {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                BrowserError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                BrowserError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{source_name}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{source_name}] Server answered HTTP {}", status.as_u16());
            return Err(BrowserError::HttpStatus {
                status: status.as_u16(),
                body: abbreviate_body(&body),
            });
        }

        let response_text = response.text().await.map_err(|e| BrowserError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{source_name}] Response Body: {}",
            abbreviate_body(&response_text)
        );

        Ok(response_text)
    }

    /// Parse a JSON response.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(BrowserError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str, source_name: &str) -> Result<T, BrowserError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{source_name}] JSON parse failed: {e}");
            log::error!(
                "[{source_name}] Raw response: {}",
                abbreviate_body(response_text)
            );
            BrowserError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecipePage;

    #[test]
    fn parse_json_valid() {
        let result: Result<RecipePage, BrowserError> =
            HttpUtils::parse_json(r#"{"data":[{"id":1,"title":"Soup"}],"total":1}"#, "test");
        assert!(
            matches!(&result, Ok(page) if page.total == 1 && page.data.len() == 1),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<RecipePage, BrowserError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(BrowserError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_wrong_shape() {
        let result: Result<RecipePage, BrowserError> =
            HttpUtils::parse_json(r#"{"items":[],"count":0}"#, "test");
        assert!(
            matches!(&result, Err(BrowserError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
