//! Error types for client construction, validation, and API calls.

#[derive(Debug, thiserror::Error)]
pub enum RadarError {
    /// The secret key is missing, empty, or lacks the `sk_` prefix.
    #[error("invalid secret key: {0}. You can find your key on the API page of your dashboard")]
    Config(String),

    /// Channel name is empty (after trimming).
    #[error("channel name empty. Please provide a channel name")]
    EmptyChannelName,

    /// Channel name contains a character outside the allowed set.
    #[error("invalid channel name: {0}. Channel names cannot contain spaces, and must consist only of characters in [A-Za-z0-9_=@,.;-]")]
    InvalidChannelName(String),

    /// Socket ID is empty.
    #[error("socket ID empty. Please provide the socket ID of the client connection")]
    EmptySocketId,

    /// Channel authentication requested for a channel without a
    /// `private-` or `presence-` prefix.
    #[error("channel authentication can only be used with private and presence channels, got: {0}")]
    NotRestrictedChannel(String),

    /// A payload could not be serialized, or a response body could not be
    /// decoded as the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request could not be completed at all (DNS, connect, TLS).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response was received but its status was not 200. Carries the raw
    /// response body as diagnostic text.
    #[error("API request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_display_carries_status_and_body() {
        let err = RadarError::Upstream {
            status: 500,
            body: "{\"error\":\"boom\"}".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn invalid_channel_name_names_the_offender() {
        let msg = RadarError::InvalidChannelName("bad channel".to_string()).to_string();
        assert!(msg.contains("bad channel"));
        assert!(msg.contains("cannot contain spaces"));
    }
}
