//! Dispatching of responses to the success or failure path.
//!
//! The dispatcher is the public entry point of the pipeline. It duplicates
//! the process-wide default configuration, applies an optional callback and
//! per-call [`Overrides`](crate::config::Overrides) (callback first,
//! overrides win), classifies the response by its adapter-selected numeric
//! status (`< 400` is success, `400` and up is failure) and delegates to
//! the configured handler.
//!
//! # Examples
//!
//! ```rust
//! use api_response::{process, Response};
//!
//! #[derive(Debug)]
//! struct Stub(u16, &'static str);
//!
//! impl Response for Stub {
//!     fn status(&self) -> Option<u16> { Some(self.0) }
//!     fn body(&self) -> Option<&str> { Some(self.1) }
//! }
//!
//! # fn main() -> Result<(), api_response::Error> {
//! let out = process(Stub(200, r#"{"id": 1}"#))?;
//! assert_eq!(out.payload().unwrap().as_value().unwrap()["id"], 1);
//! # Ok(()) }
//! ```

pub mod failure;
pub mod success;

use crate::config::{self, Config, Overrides};
use crate::errors::Error;
use crate::outcome::{Processed, Verdict};
use crate::response::Response;

/// A pluggable path strategy. The stock implementations are
/// [`success::SuccessHandler`] and [`failure::FailureHandler`]; hosts can
/// substitute their own through the configuration.
pub trait Handler: Send + Sync {
    fn handle(&self, response: &dyn Response, config: &Config) -> Result<Verdict, Error>;
}

/// Processes `response` with the process-wide default configuration.
pub fn process<R: Response>(response: R) -> Result<Processed<R>, Error> {
    process_configured(response, Overrides::new(), |_| {})
}

/// Processes `response` with per-call overrides merged onto the defaults.
pub fn process_with<R: Response>(
    response: R,
    overrides: Overrides,
) -> Result<Processed<R>, Error> {
    process_configured(response, overrides, |_| {})
}

/// Processes `response` with a configuration callback and per-call
/// overrides. The callback runs against the duplicated defaults before the
/// overrides are merged, so overrides win on conflict.
pub fn process_configured<R: Response>(
    response: R,
    overrides: Overrides,
    tweak: impl FnOnce(&mut Config),
) -> Result<Processed<R>, Error> {
    let mut config = config::snapshot();
    tweak(&mut config);
    overrides.apply(&mut config);
    process_snapshot(response, &config)
}

/// Processes `response` against an already finalized configuration
/// snapshot.
pub fn process_snapshot<R: Response>(
    response: R,
    config: &Config,
) -> Result<Processed<R>, Error> {
    let code = config.adapter.status_of(&response)?;
    let success = code < 400;
    log::debug!("dispatching status {code} to the {} path", if success { "success" } else { "failure" });

    let handler = if success {
        config.success_handler.clone()
    } else {
        config.failure_handler.clone()
    };

    Ok(match handler.handle(&response, config)? {
        Verdict::Raw => Processed::Raw(response),
        Verdict::Value(payload) => Processed::Value(payload),
        Verdict::Success(payload) => Processed::Success(payload),
        Verdict::Failure(report) => Processed::Failure(report),
    })
}
