use crate::net::BufferedResponse;

/// Loads an URL and returns the buffered response, ready for processing.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let response = api_response::net::fetch("https://api.example.com/users").await?;
/// let _outcome = api_response::process(response)?;
/// # Ok(()) }
/// ```
pub async fn fetch(url: &str) -> Result<BufferedResponse, reqwest::Error> {
    let client = reqwest::Client::new();
    let res = client.get(url).send().await?;

    // Note: does not deal with streaming
    BufferedResponse::from_reqwest(res).await
}
