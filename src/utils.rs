use crate::types::{Track, TrackRecord};

const MS_PER_MINUTE: f64 = 60_000.0;

pub fn ms_to_minutes(ms: u64) -> f64 {
    ms as f64 / MS_PER_MINUTE
}

/// Maps API tracks to table records, one record per track, order preserved.
pub fn to_records(tracks: &[Track]) -> Vec<TrackRecord> {
    tracks
        .iter()
        .map(|t| TrackRecord {
            name: t.name.clone(),
            popularity: t.popularity,
            duration_minutes: ms_to_minutes(t.duration_ms),
        })
        .collect()
}
