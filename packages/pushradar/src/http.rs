//! Internal HTTP dispatch: the single path every API call goes through.

use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::client::PushRadar;
use crate::error::RadarError;

/// Library identification header, sent on every request.
pub(crate) const LIBRARY_HEADER: &str = "X-PushRadar-Library";
pub(crate) const LIBRARY_NAME: &str = "pushradar-server-rust";

/// Raw transport result. Any received response lands here, non-2xx
/// included; interpreting `status` is the caller's job.
#[derive(Debug)]
pub(crate) struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl PushRadar {
    /// Perform one API request. Attaches the bearer-token and library
    /// identification headers, resolves with the response envelope for any
    /// answered request, and fails with `RadarError::Transport` only when
    /// no response was obtained at all.
    pub(crate) async fn dispatch(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<ApiResponse, RadarError> {
        let url = format!("{}{}", self.api_endpoint, path);
        debug!(%method, %url, "dispatching API request");

        let mut request = self
            .http
            .request(method, &url)
            .bearer_auth(&self.secret_key)
            .header(LIBRARY_HEADER, format!("{} {}", LIBRARY_NAME, self.version));

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "API response received");

        Ok(ApiResponse { status, body })
    }
}
