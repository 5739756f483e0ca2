//! The `PushRadar` client: construction plus the three API operations.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::channel;
use crate::error::RadarError;

/// Production API base URL (versioned path).
pub const API_ENDPOINT: &str = "https://api.pushradar.com/v3";

/// Every secret key issued by the dashboard starts with this.
const SECRET_KEY_PREFIX: &str = "sk_";

/// Token payload returned by a successful channel authentication. The
/// client-side library presents `auth` when subscribing to the restricted
/// channel.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthToken {
    pub auth: String,
}

/// Server-side client for the PushRadar broadcast API.
///
/// Immutable after construction and cheap to clone; clones share the
/// underlying connection pool. Calls may run concurrently with no ordering
/// guarantee between their completions.
#[derive(Debug, Clone)]
pub struct PushRadar {
    pub(crate) secret_key: String,
    pub(crate) api_endpoint: String,
    pub(crate) version: &'static str,
    pub(crate) http: reqwest::Client,
}

impl PushRadar {
    /// Create a client for the production API. Validates the secret key
    /// (`sk_` prefix, non-empty) up front; makes no network call.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, RadarError> {
        Self::with_endpoint(secret_key, API_ENDPOINT)
    }

    /// Like [`PushRadar::new`] but against a custom base URL, for tests and
    /// self-hosted proxies. A trailing slash on `endpoint` is stripped so
    /// path concatenation stays predictable.
    pub fn with_endpoint(
        secret_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, RadarError> {
        let secret_key = secret_key.into();
        if secret_key.is_empty() || !secret_key.starts_with(SECRET_KEY_PREFIX) {
            return Err(RadarError::Config(format!(
                "expected a key starting with {SECRET_KEY_PREFIX:?}"
            )));
        }

        let mut api_endpoint = endpoint.into();
        while api_endpoint.ends_with('/') {
            api_endpoint.pop();
        }

        Ok(Self {
            secret_key,
            api_endpoint,
            version: env!("CARGO_PKG_VERSION"),
            http: reqwest::Client::new(),
        })
    }

    /// Authenticate a client's subscription to a restricted channel.
    ///
    /// The channel must pass name validation and carry a `private-` or
    /// `presence-` prefix; `socket_id` identifies the client connection
    /// being authorized. On success returns the token payload the client
    /// presents to complete its subscription.
    pub async fn authenticate(
        &self,
        channel_name: &str,
        socket_id: &str,
    ) -> Result<AuthToken, RadarError> {
        let channel = channel::validate_name(channel_name)?;
        if !channel::requires_auth(channel) {
            return Err(RadarError::NotRestrictedChannel(channel.to_string()));
        }
        if socket_id.is_empty() {
            return Err(RadarError::EmptySocketId);
        }

        let response = self
            .dispatch(
                Method::GET,
                "/channels/auth",
                &[("channel", channel), ("socketID", socket_id)],
                None,
            )
            .await?;

        if response.status == 200 {
            Ok(serde_json::from_str(&response.body)?)
        } else {
            Err(RadarError::Upstream {
                status: response.status,
                body: response.body,
            })
        }
    }

    /// Broadcast `data` to every subscriber of a channel.
    ///
    /// The payload is serialized to a JSON string and embedded as that
    /// string inside the outer request body; the remote service expects
    /// this double encoding. The returned future touches no shared state,
    /// so callers wanting fire-and-forget semantics can spawn it and drop
    /// the handle.
    pub async fn broadcast(
        &self,
        channel_name: &str,
        data: &impl Serialize,
    ) -> Result<(), RadarError> {
        let channel = channel::validate_name(channel_name)?;
        let payload = serde_json::to_string(data)?;

        let response = self
            .dispatch(
                Method::POST,
                "/broadcasts",
                &[],
                Some(&json!({ "channel": channel, "data": payload })),
            )
            .await?;

        if response.status == 200 {
            Ok(())
        } else {
            Err(RadarError::Upstream {
                status: response.status,
                body: response.body,
            })
        }
    }

    /// Register opaque metadata for a client connection, best-effort.
    ///
    /// Only synchronous validation and serialization failures are returned;
    /// the HTTP outcome is deliberately not surfaced. Transport failures
    /// and non-200 statuses are logged at `warn` and discarded.
    pub async fn register_client_data(
        &self,
        socket_id: &str,
        client_data: &impl Serialize,
    ) -> Result<(), RadarError> {
        if socket_id.is_empty() {
            return Err(RadarError::EmptySocketId);
        }
        let payload = serde_json::to_string(client_data)?;

        let result = self
            .dispatch(
                Method::POST,
                "/client-data",
                &[],
                Some(&json!({ "socketID": socket_id, "clientData": payload })),
            )
            .await;

        match result {
            Ok(response) if response.status != 200 => {
                warn!(
                    status = response.status,
                    body = %response.body,
                    "client-data registration rejected"
                );
            }
            Err(err) => {
                warn!(%err, "client-data registration failed");
            }
            Ok(_) => {}
        }

        Ok(())
    }
}
