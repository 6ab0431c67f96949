//! Response capability and adapter selection.
//!
//! The processing pipeline never performs network I/O; it receives a fully
//! materialized response through the [`Response`] trait. Different HTTP
//! clients expose the numeric status under different names (`status` vs
//! `code`), so an [`Adapter`] tag in the configuration selects which
//! accessor the pipeline reads.

use crate::errors::Error;

/// Which status accessor a response exposes.
///
/// `Faraday` and `Excon` style responses carry a `status` field; everything
/// else (e.g. rest-client style responses) carries a `code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    Faraday,
    Excon,
    RestClient,
    /// Any other client whose responses expose `code`.
    Custom,
}

impl Adapter {
    /// Reads the numeric status code of `response` through the accessor
    /// this adapter selects.
    pub fn status_of(&self, response: &dyn Response) -> Result<u16, Error> {
        match self {
            Adapter::Faraday | Adapter::Excon => {
                response.status().ok_or(Error::MissingField("status"))
            }
            _ => response.code().ok_or(Error::MissingField("code")),
        }
    }
}

/// A fully buffered HTTP-result-like object.
///
/// Implementors override the accessors they actually have; the defaults
/// return `None`, which the pipeline surfaces as
/// [`Error::MissingField`](crate::errors::Error::MissingField).
pub trait Response {
    /// The response body as text, if present.
    fn body(&self) -> Option<&str> {
        None
    }

    /// Numeric status code for `status`-style responses.
    fn status(&self) -> Option<u16> {
        None
    }

    /// Numeric status code for `code`-style responses.
    fn code(&self) -> Option<u16> {
        None
    }
}

pub(crate) fn body_of(response: &dyn Response) -> Result<&str, Error> {
    response.body().ok_or(Error::MissingField("body"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StatusOnly(u16);
    impl Response for StatusOnly {
        fn status(&self) -> Option<u16> {
            Some(self.0)
        }
    }

    #[derive(Debug)]
    struct CodeOnly(u16);
    impl Response for CodeOnly {
        fn code(&self) -> Option<u16> {
            Some(self.0)
        }
    }

    #[test]
    fn faraday_and_excon_read_status() {
        assert_eq!(Adapter::Faraday.status_of(&StatusOnly(200)).unwrap(), 200);
        assert_eq!(Adapter::Excon.status_of(&StatusOnly(503)).unwrap(), 503);
    }

    #[test]
    fn other_adapters_read_code() {
        assert_eq!(Adapter::RestClient.status_of(&CodeOnly(404)).unwrap(), 404);
        assert_eq!(Adapter::Custom.status_of(&CodeOnly(201)).unwrap(), 201);
    }

    #[test]
    fn missing_accessor_is_reported_by_name() {
        match Adapter::Faraday.status_of(&CodeOnly(200)) {
            Err(Error::MissingField(field)) => assert_eq!(field, "status"),
            other => panic!("expected MissingField, got {other:?}"),
        }
        match Adapter::RestClient.status_of(&StatusOnly(200)) {
            Err(Error::MissingField(field)) => assert_eq!(field, "code"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn body_defaults_to_missing() {
        match body_of(&StatusOnly(200)) {
            Err(Error::MissingField(field)) => assert_eq!(field, "body"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }
}
