//! # models::execution
//!
//! Execution-sizing volumes shown on the execution deck.

use serde::Serialize;

/// Share-count volumes for a single ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    /// Volume expected on the rebalance date.
    pub projected_volume: u64,
    /// Volume traded so far in the session.
    pub current_volume: u64,
    pub avg_daily_volume: u64,
}

impl ExecutionRecord {
    pub const fn new(projected_volume: u64, current_volume: u64, avg_daily_volume: u64) -> Self {
        Self { projected_volume, current_volume, avg_daily_volume }
    }
}

/// Fixed volumes for the tickers the desk is tracking.  Keys are uppercase.
pub static EXECUTION_TABLE: [(&str, ExecutionRecord); 8] = [
    ("PATH", ExecutionRecord::new(39_400_000, 26_800_000, 4_200_000)),
    ("DECK", ExecutionRecord::new(52_000_000, 38_500_000, 5_800_000)),
    ("ELF",  ExecutionRecord::new(31_200_000, 22_100_000, 3_400_000)),
    ("BILL", ExecutionRecord::new(28_500_000, 19_200_000, 3_100_000)),
    ("MNDY", ExecutionRecord::new(22_100_000, 15_400_000, 2_800_000)),
    ("PCTY", ExecutionRecord::new(18_900_000, 12_100_000, 2_200_000)),
    ("EEFT", ExecutionRecord::new(15_600_000, 9_800_000,  1_900_000)),
    ("WEX",  ExecutionRecord::new(12_400_000, 7_500_000,  1_600_000)),
];

/// Look up the fixed record for an already-normalised (uppercase) ticker.
pub fn lookup(ticker: &str) -> Option<ExecutionRecord> {
    EXECUTION_TABLE
        .iter()
        .find(|(key, _)| *key == ticker)
        .map(|(_, record)| *record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        let record = lookup("PATH").unwrap();
        assert_eq!(record.projected_volume, 39_400_000);
        assert_eq!(record.current_volume, 26_800_000);
        assert_eq!(record.avg_daily_volume, 4_200_000);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        // Normalisation is the caller's job.
        assert!(lookup("path").is_none());
        assert!(lookup("ZZZZ").is_none());
    }

    #[test]
    fn test_serializes_three_camel_case_fields() {
        let value = serde_json::to_value(ExecutionRecord::new(1, 2, 3)).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["projectedVolume"], 1);
        assert_eq!(obj["currentVolume"], 2);
        assert_eq!(obj["avgDailyVolume"], 3);
    }
}
