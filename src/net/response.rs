//! Minimal buffered HTTP response.
//!
//! This struct represents a **fully buffered** HTTP response: final URL
//! (after redirects, if the client follows them), status code + reason,
//! response headers, and the raw body bytes.
//!
//! ## Notes
//! - The body is stored as raw `Vec<u8>`. The [`Response`] impl exposes it
//!   as text only when it is valid UTF-8; binary bodies surface as a
//!   missing `body` accessor.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - `status_text` is typically derived from the status code's canonical
//!   reason phrase and may be `"Unknown"` for non-standard codes.

use http::HeaderMap;

use crate::response::Response;

/// A fully buffered HTTP response, as received.
#[derive(Debug)]
pub struct BufferedResponse {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl BufferedResponse {
    /// Buffers a `reqwest::Response` into this crate's response model.
    pub async fn from_reqwest(res: reqwest::Response) -> Result<Self, reqwest::Error> {
        let url = res.url().clone();
        let status = res.status().as_u16();
        let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
        let headers = res.headers().clone();
        let body = res.bytes().await?.to_vec();

        Ok(Self { url, status, status_text, headers, body })
    }
}

impl Response for BufferedResponse {
    fn body(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    fn status(&self) -> Option<u16> {
        Some(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Adapter;

    fn buffered(status: u16, body: &[u8]) -> BufferedResponse {
        BufferedResponse {
            url: url::Url::parse("https://api.example.com/users").unwrap(),
            status,
            status_text: "OK".to_string(),
            headers: HeaderMap::new(),
            body: body.to_vec(),
        }
    }

    #[test]
    fn exposes_a_status_accessor() {
        let res = buffered(200, b"{}");
        assert_eq!(Adapter::Faraday.status_of(&res).unwrap(), 200);
        assert!(Adapter::RestClient.status_of(&res).is_err());
    }

    #[test]
    fn utf8_body_is_exposed_as_text() {
        let res = buffered(200, br#"{"id": 1}"#);
        assert_eq!(res.body(), Some(r#"{"id": 1}"#));
    }

    #[test]
    fn non_utf8_body_is_a_missing_accessor() {
        let res = buffered(200, &[0xff, 0xfe, 0x00]);
        assert_eq!(Response::body(&res), None);
    }

    #[tokio::test]
    async fn buffers_a_reqwest_response() {
        let raw = http::Response::builder()
            .status(404)
            .header("content-type", "application/json")
            .body(r#"{"error":"Not Found"}"#)
            .unwrap();

        let res = BufferedResponse::from_reqwest(reqwest::Response::from(raw))
            .await
            .unwrap();
        assert_eq!(res.status, 404);
        assert_eq!(res.status_text, "Not Found");
        assert_eq!(res.headers["content-type"], "application/json");
        assert_eq!(Response::body(&res), Some(r#"{"error":"Not Found"}"#));
        assert_eq!(Adapter::Excon.status_of(&res).unwrap(), 404);
    }
}
