//! Spotify Top Tracks CLI Library
//!
//! This library fetches the top tracks of an artist from the Spotify Web API
//! using the OAuth 2.0 client credentials flow, reshapes them into table rows
//! and prints them.
//!
//! # Modules
//!
//! - `cli` - The top tracks pipeline and table rendering
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by the whole crate
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Row mapping helpers
//!
//! # Example
//!
//! ```
//! use toptracks::{cli, config, spotify::SpotifyClient};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> toptracks::Res<()> {
//!     config::load_env()?;
//!     let config = config::Config::from_env();
//!     let client = SpotifyClient::new(&config)?;
//!     cli::top_tracks(&client, cli::ARTIST_ID).await
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the crate reports an [`Error`], so callers can
/// match on the failure kind or simply bubble it up with `?`.
///
/// # Example
///
/// ```
/// use toptracks::Res;
///
/// fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Status lines go to stderr so that stdout only ever carries the table.
///
/// # Example
///
/// ```
/// info!("Requesting access token...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Fetched {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only the
/// binary entry point should reach for this; library code returns [`Error`].
///
/// # Example
///
/// ```
/// error!("Failed to fetch top tracks: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No tracks returned for artist {}", artist_id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
