use reqwest::header::USER_AGENT;

use super::errors::KapianError;

/// Fetches a user-supplied URL and returns the body as opaque text for the
/// classifier. No retries; the caller surfaces the failure and the user may
/// try again.
pub async fn fetch_text(url: &str) -> Result<String, KapianError> {
    let response = reqwest::Client::new()
        .get(url)
        .header(USER_AGENT, "kapian/0.1 (+reqwest)")
        .send()
        .await
        .map_err(|e| KapianError::Transport(format!("GET {url} failed: {e}")))?;

    if !response.status().is_success() {
        return Err(KapianError::Transport(format!(
            "HTTP error {} from {}",
            response.status(),
            response.url()
        )));
    }

    response
        .text()
        .await
        .map_err(|e| KapianError::Transport(format!("Failed to read body from {url}: {e}")))
}
