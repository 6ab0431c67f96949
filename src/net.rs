//! Buffered response model and a small fetch helper.
//!
//! The processing core never performs network I/O; this module is the thin
//! collaborator that materializes a response before it is handed in.

pub mod fetch;
pub mod response;

pub use fetch::fetch;
pub use response::BufferedResponse;
