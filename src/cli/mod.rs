//! # CLI Module
//!
//! The user-facing pipeline of toptracks: fetch the top tracks for the
//! configured artist, map them into rows and print them as a table.
//!
//! ## Data Flow
//!
//! ```text
//! TopTracksSource::get_top_tracks
//!     ↓
//! utils::to_records (name, popularity, duration_minutes)
//!     ↓
//! render_table → stdout
//! ```
//!
//! Status output (spinner, info lines) is written to stderr, stdout only
//! receives the table.

mod top_tracks;

pub use top_tracks::ARTIST_ID;
pub use top_tracks::fetch_records;
pub use top_tracks::render_table;
pub use top_tracks::top_tracks;
