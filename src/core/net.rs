use reqwest::Response;

use crate::core::FinbotError;

/// Read the response body as text, mapping a non-2xx status to [`FinbotError::Status`].
pub(crate) async fn get_text(resp: Response, endpoint: &str) -> Result<String, FinbotError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(FinbotError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    let text = resp.text().await?;
    tracing::trace!(endpoint, bytes = text.len(), "read response body");
    Ok(text)
}
