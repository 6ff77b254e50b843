use crate::{
    Res,
    spotify::SpotifyClient,
    types::{TopTracksResponse, Track},
};

/// Anything able to list an artist's top tracks.
///
/// The CLI pipeline only depends on this capability, so a test double can
/// stand in for the real API.
#[allow(async_fn_in_trait)]
pub trait TopTracksSource {
    async fn get_top_tracks(&self, artist_id: &str) -> Res<Vec<Track>>;
}

impl TopTracksSource for SpotifyClient {
    /// Retrieves the top tracks of an artist from the Spotify Web API.
    ///
    /// Uses the `/artists/{id}/top-tracks` endpoint for the configured market.
    /// Tracks are returned in the order the API sends them, which is most
    /// popular first.
    ///
    /// # Errors
    ///
    /// - Token exchange failures from [`SpotifyClient::access_token`]
    /// - Non-success statuses, e.g. an unknown artist id
    /// - Network errors or a malformed response body
    ///
    /// # Example
    ///
    /// ```
    /// let tracks = client.get_top_tracks("0TnOYISbd1XYRBk9myaseg").await?;
    /// println!("Found {} tracks", tracks.len());
    /// ```
    async fn get_top_tracks(&self, artist_id: &str) -> Res<Vec<Track>> {
        let token = self.access_token().await?;
        let api_url = format!(
            "{uri}/artists/{id}/top-tracks",
            uri = &self.api_url,
            id = artist_id
        );

        let response = self
            .http
            .get(&api_url)
            .query(&[("market", &self.market)])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<TopTracksResponse>().await?;
        Ok(res.tracks)
    }
}
