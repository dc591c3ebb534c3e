use crate::core::StocksError;

/// Turn a non-2xx response into [`StocksError::Status`].
pub(crate) fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, StocksError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(StocksError::Status {
        status: status.as_u16(),
        url: resp.url().to_string(),
    })
}

/// Read the response body as text. `_endpoint` only labels the trace event.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::trace!(endpoint = _endpoint, bytes = text.len(), "response body received");

    Ok(text)
}
