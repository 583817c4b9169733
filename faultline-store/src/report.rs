//! Snapshot helpers for the view layer
//!
//! Pure functions over a loaded record set; the UI calls these after
//! `load_all` to render statistics and search results without touching the
//! ledger again.

use crate::record::Record;
use crate::workflow::ReviewStatus;

/// Aggregate statistics over a record snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryStats {
    /// Total number of records
    pub total: usize,
    /// Records awaiting review
    pub pending: usize,
    /// Verified records
    pub verified: usize,
    /// Rejected records
    pub rejected: usize,
    /// Mean magnitude across all records (0.0 for an empty snapshot)
    pub average_magnitude: f64,
}

/// Compute status counts and average magnitude for a snapshot.
pub fn summarize(records: &[Record]) -> SummaryStats {
    let mut stats = SummaryStats {
        total: records.len(),
        ..SummaryStats::default()
    };

    for record in records {
        match record.status {
            ReviewStatus::Pending => stats.pending += 1,
            ReviewStatus::Verified => stats.verified += 1,
            ReviewStatus::Rejected => stats.rejected += 1,
        }
        stats.average_magnitude += record.magnitude;
    }
    if stats.total > 0 {
        stats.average_magnitude /= stats.total as f64;
    }

    stats
}

/// Case-insensitive substring search over station id and coordinates.
///
/// An empty term matches everything, so a UI can bind this directly to a
/// search box.
pub fn search<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.station_id.to_lowercase().contains(&needle)
                || r.coordinates.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(station: &str, coords: &str, magnitude: f64, status: ReviewStatus) -> Record {
        Record {
            id: format!("id-{station}"),
            payload: "blob".to_string(),
            created_at: 0,
            station_id: station.to_string(),
            coordinates: coords.to_string(),
            magnitude,
            status,
        }
    }

    #[test]
    fn test_summarize_empty() {
        let stats = summarize(&[]);
        assert_eq!(stats, SummaryStats::default());
    }

    #[test]
    fn test_summarize_counts_and_average() {
        let records = vec![
            record("ST-1", "0,0", 2.0, ReviewStatus::Pending),
            record("ST-2", "0,0", 4.0, ReviewStatus::Verified),
            record("ST-3", "0,0", 6.0, ReviewStatus::Rejected),
            record("ST-4", "0,0", 4.0, ReviewStatus::Verified),
        ];

        let stats = summarize(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.verified, 2);
        assert_eq!(stats.rejected, 1);
        assert!((stats.average_magnitude - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_search_matches_station_or_coordinates() {
        let records = vec![
            record("ST-7", "34.05,-118.24", 4.2, ReviewStatus::Pending),
            record("ST-8", "35.68,139.69", 3.1, ReviewStatus::Pending),
        ];

        assert_eq!(search(&records, "st-7").len(), 1);
        assert_eq!(search(&records, "139.69").len(), 1);
        assert_eq!(search(&records, "ST").len(), 2);
        assert_eq!(search(&records, "").len(), 2);
        assert!(search(&records, "nowhere").is_empty());
    }
}
