use std::{env, fs};

use tempfile::tempdir;
use toptracks::Error;
use toptracks::cli::render_table;
use toptracks::config::{
    Config, DEFAULT_API_URL, DEFAULT_MARKET, DEFAULT_TOKEN_URL, load_env_from,
};
use toptracks::types::{Track, TrackRecord};
use toptracks::utils::*;

// Helper function to create a test track
fn create_test_track(name: &str, popularity: u32, duration_ms: u64) -> Track {
    Track {
        name: name.to_string(),
        popularity,
        duration_ms,
    }
}

#[test]
fn test_ms_to_minutes() {
    assert_eq!(ms_to_minutes(180_000), 3.0);
    assert_eq!(ms_to_minutes(222_000), 3.7);
    assert_eq!(ms_to_minutes(0), 0.0);
    assert_eq!(ms_to_minutes(90_000), 1.5);
}

#[test]
fn test_to_records_single_track() {
    let records = to_records(&[create_test_track("Song A", 77, 222_000)]);

    assert_eq!(
        records,
        vec![TrackRecord {
            name: "Song A".to_string(),
            popularity: 77,
            duration_minutes: 3.7,
        }]
    );
}

#[test]
fn test_to_records_preserves_count_and_order() {
    let tracks = vec![
        create_test_track("Timber", 84, 204_160),
        create_test_track("Give Me Everything", 80, 252_306),
        create_test_track("Hotel Room Service", 71, 237_786),
        create_test_track("Timber", 84, 204_160), // Duplicate is kept
        create_test_track("Low Popularity", 3, 180_000),
    ];

    let records = to_records(&tracks);

    // One record per track, nothing filtered or de-duplicated
    assert_eq!(records.len(), tracks.len());

    // Same order as the input, name and popularity passed through unchanged
    for (track, record) in tracks.iter().zip(&records) {
        assert_eq!(record.name, track.name);
        assert_eq!(record.popularity, track.popularity);
        assert_eq!(record.duration_minutes, track.duration_ms as f64 / 60_000.0);
    }

    // No local sorting by popularity
    assert_eq!(records[4].name, "Low Popularity");
}

#[test]
fn test_to_records_empty() {
    let records = to_records(&[]);
    assert!(records.is_empty());
}

#[test]
fn test_render_table_columns() {
    let records = to_records(&[
        create_test_track("Song A", 77, 222_000),
        create_test_track("Song B", 65, 180_000),
    ]);

    let table = render_table(&records);
    assert_eq!(table.count_rows(), 3); // header + 2 rows

    let rendered = table.to_string();
    let header = rendered
        .lines()
        .find(|l| l.contains("name"))
        .expect("header line");
    let name_pos = header.find("name").unwrap();
    let popularity_pos = header.find("popularity").unwrap();
    let duration_pos = header.find("duration_minutes").unwrap();
    assert!(name_pos < popularity_pos && popularity_pos < duration_pos);

    // Rows keep their order
    let song_a = rendered.find("Song A").unwrap();
    let song_b = rendered.find("Song B").unwrap();
    assert!(song_a < song_b);
    assert!(rendered.contains("3.7"));
}

#[test]
fn test_render_table_empty() {
    let table = render_table(&[]);

    // Only the header row is present
    assert_eq!(table.count_rows(), 1);
    assert!(table.to_string().contains("duration_minutes"));
}

#[test]
fn test_config_defaults() {
    let config = Config::from_lookup(|_| None);

    assert_eq!(config.client_id, None);
    assert_eq!(config.client_secret, None);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.market, DEFAULT_MARKET);
}

#[test]
fn test_config_overrides() {
    let config = Config::from_lookup(|key| match key {
        "CLIENT_ID" => Some("id".to_string()),
        "CLIENT_SECRET" => Some("secret".to_string()),
        "SPOTIFY_API_URL" => Some("http://localhost:9000/v1/".to_string()),
        "SPOTIFY_API_TOKEN_URL" => Some("http://localhost:9000/api/token".to_string()),
        "SPOTIFY_MARKET" => Some("DE".to_string()),
        _ => None,
    });

    assert_eq!(config.client_id.as_deref(), Some("id"));
    assert_eq!(config.client_secret.as_deref(), Some("secret"));
    // Trailing slash is dropped so paths can be appended
    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.token_url, "http://localhost:9000/api/token");
    assert_eq!(config.market, "DE");
}

#[test]
fn test_config_blank_overrides_use_defaults() {
    let config = Config::from_lookup(|key| match key {
        "CLIENT_ID" => Some(String::new()),
        "SPOTIFY_API_URL" => Some(String::new()),
        "SPOTIFY_API_TOKEN_URL" => Some("  ".to_string()),
        "SPOTIFY_MARKET" => Some(String::new()),
        _ => None,
    });

    assert_eq!(config.client_id, None);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.market, DEFAULT_MARKET);
}

#[test]
fn test_load_env_without_file() {
    let dir = tempdir().unwrap();
    let candidates = vec![dir.path().join(".env"), dir.path().join("nested/.env")];

    assert!(load_env_from(&candidates).unwrap().is_none());
    assert!(load_env_from(&[]).unwrap().is_none());
}

#[test]
fn test_load_env_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "=broken\n").unwrap();

    let err = load_env_from(&[path]).unwrap_err();
    assert!(matches!(err, Error::Env(_)));
}

#[test]
fn test_load_env_first_existing_file_wins() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing/.env");
    let first = dir.path().join("first.env");
    let second = dir.path().join("second.env");
    fs::write(
        &first,
        "TOPTRACKS_LOAD_ENV_TEST=first\nPATH=overridden-by-env-file\n",
    )
    .unwrap();
    fs::write(&second, "TOPTRACKS_LOAD_ENV_TEST=second\n").unwrap();

    let loaded = load_env_from(&[missing, first.clone(), second]).unwrap();
    assert_eq!(loaded, Some(first));

    assert_eq!(env::var("TOPTRACKS_LOAD_ENV_TEST").unwrap(), "first");

    // Variables already set in the process are kept
    assert_ne!(env::var("PATH").unwrap(), "overridden-by-env-file");
}
