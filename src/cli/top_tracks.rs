use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{Res, spotify::TopTracksSource, success, types::TrackRecord, utils, warning};

/// Spotify id of the artist whose top tracks are printed.
pub const ARTIST_ID: &str = "0TnOYISbd1XYRBk9myaseg";

/// Fetches the top tracks of `artist_id` and prints them as a table.
///
/// # Errors
///
/// Any failure from the source is propagated unchanged; nothing is printed
/// to stdout in that case.
pub async fn top_tracks<S: TopTracksSource>(source: &S, artist_id: &str) -> Res<()> {
    let records = fetch_records(source, artist_id).await?;
    if records.is_empty() {
        warning!("No tracks returned for artist {}", artist_id);
    } else {
        success!("Fetched {} tracks!", records.len());
    }

    println!("{}", render_table(&records));
    Ok(())
}

/// Fetches the top tracks and maps them into table records.
pub async fn fetch_records<S: TopTracksSource>(
    source: &S,
    artist_id: &str,
) -> Res<Vec<TrackRecord>> {
    let pb = spinner("Fetching top tracks...");
    let tracks = source.get_top_tracks(artist_id).await;
    pb.finish_and_clear();

    Ok(utils::to_records(&tracks?))
}

/// Renders records as a table with `name`, `popularity` and
/// `duration_minutes` columns.
pub fn render_table(records: &[TrackRecord]) -> Table {
    Table::new(records)
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
