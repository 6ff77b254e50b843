use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    Res,
    config::Config,
    spotify::auth::{self, Credentials},
    types::AccessToken,
};

/// Authenticated Spotify Web API client.
///
/// Construction validates the credentials but does not touch the network;
/// the first request triggers the token exchange and the token is reused
/// until it is about to expire.
pub struct SpotifyClient {
    pub(crate) http: Client,
    pub(crate) api_url: String,
    pub(crate) market: String,
    token_url: String,
    credentials: Credentials,
    token: Mutex<Option<AccessToken>>,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Res<Self> {
        let credentials = Credentials::from_config(config)?;
        Ok(Self::with_credentials(config, credentials))
    }

    pub fn with_credentials(config: &Config, credentials: Credentials) -> Self {
        Self {
            http: Client::new(),
            api_url: config.api_url.clone(),
            market: config.market.clone(),
            token_url: config.token_url.clone(),
            credentials,
            token: Mutex::new(None),
        }
    }

    /// Returns a valid bearer token, requesting a new one when needed.
    pub async fn access_token(&self) -> Res<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.access_token.clone());
            }
        }

        let token = auth::request_token(&self.http, &self.token_url, &self.credentials).await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }
}
