use std::fmt;

use chrono::Utc;
use reqwest::Client;

use crate::{
    Error, Res,
    config::{CLIENT_ID_VAR, CLIENT_SECRET_VAR, Config},
    types::AccessToken,
};

/// Seconds before the reported expiry at which a token is treated as stale.
pub const EXPIRY_BUFFER_SECS: u64 = 240;

/// Client id and secret of the registered Spotify application.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Extracts the credentials from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] naming the environment variable
    /// when `CLIENT_ID` or `CLIENT_SECRET` is unset or blank. No request is
    /// made in that case.
    pub fn from_config(config: &Config) -> Res<Self> {
        let client_id = require(config.client_id.as_deref(), CLIENT_ID_VAR)?;
        let client_secret = require(config.client_secret.as_deref(), CLIENT_SECRET_VAR)?;
        Ok(Self::new(client_id, client_secret))
    }
}

fn require(value: Option<&str>, var: &'static str) -> Res<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::MissingCredential(var)),
    }
}

impl AccessToken {
    pub fn is_expired_at(&self, now: u64) -> bool {
        now + EXPIRY_BUFFER_SECS >= self.obtained_at + self.expires_in
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }
}

/// Exchanges the application credentials for an access token.
///
/// Performs the OAuth 2.0 client credentials grant: a form-encoded
/// `grant_type=client_credentials` POST to the token endpoint, authenticated
/// with HTTP Basic auth built from the client id and secret. The returned
/// token is stamped with the current time so its expiry can be checked later.
///
/// # Errors
///
/// - [`Error::TokenRejected`] if the endpoint answers with a non-success status
/// - [`Error::Http`] for network failures or an undecodable response body
///
/// # Example
///
/// ```
/// let creds = Credentials::new("id", "secret");
/// let token = request_token(&Client::new(), DEFAULT_TOKEN_URL, &creds).await?;
/// println!("Token valid for {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Res<AccessToken> {
    let res = http
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(Error::TokenRejected(status, body));
    }

    let mut token: AccessToken = res.json().await?;
    token.obtained_at = Utc::now().timestamp() as u64;
    Ok(token)
}
