//! Failure path: resolve a status label, decode or default the error
//! payload, and optionally wrap it.
//!
//! Flag precedence is fixed: `raw_response` first, then `monad`, then
//! `error_json`, then the plain default value. The two places that parse
//! the body (the `error_json` branch and the wrapped-failure error
//! extraction) are independent on purpose; both swallow parse errors by
//! falling back to `default_return_value` or the raw body string.

use serde_json::Value;

use crate::config::Config;
use crate::errors::Error;
use crate::outcome::{FailureReport, Payload, StatusTag, Verdict};
use crate::processor::Handler;
use crate::response::{body_of, Response};
use crate::status;

/// Stock handler for responses classified as failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailureHandler;

impl Handler for FailureHandler {
    fn handle(&self, response: &dyn Response, config: &Config) -> Result<Verdict, Error> {
        if config.raw_response {
            return Ok(Verdict::Raw);
        }
        if config.monad {
            return build_failure(response, config);
        }
        if config.error_json {
            let raw = body_of(response)?;
            return Ok(match config.parser.parse(raw) {
                Ok(parsed) => Verdict::Value(Payload::Value(parsed)),
                Err(_) => Verdict::Value(Payload::Value(fallback_value(config, raw))),
            });
        }

        Ok(Verdict::Value(Payload::Value(
            config.default_return_value.clone().unwrap_or(Value::Null),
        )))
    }
}

/// `default_return_value` when set, else the raw body string.
fn fallback_value(config: &Config, raw: &str) -> Value {
    config
        .default_return_value
        .clone()
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

fn build_failure(response: &dyn Response, config: &Config) -> Result<Verdict, Error> {
    let (error, error_key) = match (&config.default_error, &config.default_error_key) {
        (Some(error), Some(key)) => (Value::String(error.clone()), Some(key.clone())),
        _ => {
            // A missing default means the identity comes from the body.
            // An unparseable body short-circuits the whole return to the
            // plain fallback value.
            let raw = body_of(response)?;
            let parsed = match config.parser.parse(raw) {
                Ok(parsed) => parsed,
                Err(_) => {
                    log::warn!("failure body is not parseable, returning the fallback value");
                    return Ok(Verdict::Value(Payload::Value(fallback_value(config, raw))));
                }
            };

            let error = match &config.default_error {
                Some(error) => Value::String(error.clone()),
                // A null `error` field counts as absent.
                None => parsed
                    .get("error")
                    .filter(|v| !v.is_null())
                    .cloned()
                    .unwrap_or_else(|| parsed.clone()),
            };
            // The key is symbol-like; a non-string `error_key` in the body
            // is ignored rather than stringified.
            let error_key = config.default_error_key.clone().or_else(|| {
                parsed.get("error_key").and_then(Value::as_str).map(str::to_string)
            });
            (error, error_key)
        }
    };

    let status = resolve_status(response, config)?;
    Ok(Verdict::Failure(FailureReport { error, error_key, status }))
}

/// Resolves the failure status label: the configured default when set
/// (normalized to the configured representation), else the response's
/// numeric code, symbolized when `symbol_status` is on. Registry misses
/// pass the numeric code through.
fn resolve_status(response: &dyn Response, config: &Config) -> Result<StatusTag, Error> {
    if let Some(default) = &config.default_status {
        return Ok(normalize_default(default, config));
    }

    let code = config.adapter.status_of(response)?;
    if config.symbol_status {
        Ok(match status::symbol_for(code) {
            Ok(symbol) => StatusTag::symbol(symbol),
            Err(_) => StatusTag::Code(code),
        })
    } else {
        Ok(StatusTag::Code(code))
    }
}

fn normalize_default(default: &StatusTag, config: &Config) -> StatusTag {
    match default {
        StatusTag::Code(code) if config.symbol_status => match status::symbol_for(*code) {
            Ok(symbol) => StatusTag::symbol(symbol),
            Err(_) => StatusTag::Code(*code),
        },
        other => other.clone(),
    }
}
