#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed response body: {0}")]
    Parse(String),

    #[error("Extraction failed with an encoding error: {0}")]
    Extract(String),

    #[error("Struct construction failed: {0}")]
    Struct(String),

    #[error("Response has no `{0}` accessor")]
    MissingField(&'static str),

    #[error("No registry entry for status {0}")]
    UnknownStatus(String),
}
