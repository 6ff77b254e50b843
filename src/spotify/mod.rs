//! # Spotify Integration Module
//!
//! This module is the integration layer between the CLI and the Spotify Web
//! API. It authenticates with the OAuth 2.0 client credentials flow and
//! retrieves the top tracks of an artist.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (pipeline, table output)
//!          ↓
//! TopTracksSource (capability seam)
//!          ↓
//! SpotifyClient
//!     ├── Authentication (client credentials, token cache)
//!     └── Artist Operations (top tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Credential validation and the `client_credentials` token
//!   exchange against the accounts service.
//! - [`artists`] - The [`TopTracksSource`] capability and its implementation
//!   for [`SpotifyClient`].
//! - [`client`] - The authenticated client holding the HTTP connection pool,
//!   configuration and the cached access token.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client credentials token exchange
//! - `GET /artists/{id}/top-tracks` - An artist's top tracks for a market
//!
//! ## Error Handling
//!
//! Requests are sent once. Non-success statuses are turned into
//! [`crate::Error`] values and propagated to the caller; nothing is retried.
//!
//! ## Usage
//!
//! ```rust
//! let config = Config::from_env();
//! let client = SpotifyClient::new(&config)?;
//! let tracks = client.get_top_tracks("0TnOYISbd1XYRBk9myaseg").await?;
//! ```

pub mod artists;
pub mod auth;
pub mod client;

pub use artists::TopTracksSource;
pub use auth::Credentials;
pub use client::SpotifyClient;
