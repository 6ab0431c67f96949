//! Success path: parse, extract, map, wrap.

use crate::config::Config;
use crate::errors::Error;
use crate::extract::extract;
use crate::outcome::{Payload, Verdict};
use crate::processor::Handler;
use crate::response::{body_of, Response};

/// Stock handler for responses classified as success.
///
/// Parse errors are not recovered on this path: a success response with an
/// unparseable body propagates [`Error::Parse`] to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuccessHandler;

impl Handler for SuccessHandler {
    fn handle(&self, response: &dyn Response, config: &Config) -> Result<Verdict, Error> {
        if config.raw_response {
            return Ok(Verdict::Raw);
        }

        let raw = body_of(response)?;
        let parsed = config.parser.parse(raw)?;
        let extracted = extract(parsed, raw, &config.extract_from_body)?;

        let payload = match &config.struct_mapper {
            Some(mapper) => Payload::from(mapper.map(extracted)?),
            None => Payload::Value(extracted),
        };

        Ok(if config.monad {
            Verdict::Success(payload)
        } else {
            Verdict::Value(payload)
        })
    }
}
