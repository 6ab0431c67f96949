//! Configurable post-processing for HTTP-like responses.
//!
//! Given a fully materialized response (status/code + body), the pipeline
//! decides success vs. failure, parses the body, optionally extracts a
//! sub-value, optionally maps the result onto a typed structure, and
//! optionally wraps the outcome in a Success/Failure result.
//!
//! # Examples
//!
//! ```rust
//! use api_response::{process_with, Overrides, Response, StructMapper};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct User { id: i64, name: String }
//!
//! #[derive(Debug)]
//! struct Stub(u16, &'static str);
//! impl Response for Stub {
//!     fn status(&self) -> Option<u16> { Some(self.0) }
//!     fn body(&self) -> Option<&str> { Some(self.1) }
//! }
//!
//! # fn main() -> Result<(), api_response::Error> {
//! let out = process_with(
//!     Stub(200, r#"{"id": 1, "name": "John"}"#),
//!     Overrides::new().struct_mapper(StructMapper::of::<User>()),
//! )?;
//! let user = out.payload().unwrap().downcast_one::<User>().unwrap();
//! assert_eq!(user.id, 1);
//! assert_eq!(user.name, "John");
//! # Ok(()) }
//! ```

pub mod config;
pub mod errors;
pub mod extract;
pub mod net;
pub mod outcome;
pub mod parser;
pub mod processor;
pub mod response;
pub mod status;
pub mod structmap;

pub use config::{configure, reset_config, snapshot, Config, Overrides};
pub use errors::Error;
pub use extract::{Projection, ProjectionError};
pub use net::BufferedResponse;
pub use outcome::{FailureReport, Payload, Processed, StatusTag, Verdict};
pub use parser::{BodyParser, JsonParser};
pub use processor::{process, process_configured, process_snapshot, process_with, Handler};
pub use response::{Adapter, Response};
pub use structmap::{Mapped, StructMapper, StructValue};
