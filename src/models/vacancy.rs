//! # models::vacancy
//!
//! The **vacancy watchlist**: index constituents flagged as likely to leave
//! the index, each with a risk category and an estimated probability.

use serde::Serialize;

// ─── RiskType ─────────────────────────────────────────────────────────────────

/// Why a constituent is at risk of vacating its index slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskType {
    /// Announced or rumoured acquisition.
    Ma,
    /// Market cap fell below the index floor.
    Cap,
    Earnings,
    Delist,
}

// ─── VacancyEntry ─────────────────────────────────────────────────────────────

/// One row of the vacancy monitor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyEntry {
    pub ticker: &'static str,
    pub price: f64,
    /// Display label, e.g. `"M&A TARGET"`.
    pub risk_tag: &'static str,
    pub risk_type: RiskType,
    /// Estimated probability of removal, 0–100.
    pub probability: u8,
}

/// The fixed vacancy table served by `GET /api/vacancy`.
pub static VACANCIES: [VacancyEntry; 6] = [
    VacancyEntry { ticker: "SNV",  price: 45.20, risk_tag: "M&A TARGET",       risk_type: RiskType::Ma,       probability: 92 },
    VacancyEntry { ticker: "ZION", price: 38.75, risk_tag: "MARKET CAP < $5B", risk_type: RiskType::Cap,      probability: 78 },
    VacancyEntry { ticker: "CBSH", price: 52.10, risk_tag: "M&A TARGET",       risk_type: RiskType::Ma,       probability: 85 },
    VacancyEntry { ticker: "FNB",  price: 13.45, risk_tag: "MARKET CAP < $5B", risk_type: RiskType::Cap,      probability: 71 },
    VacancyEntry { ticker: "UMBF", price: 89.30, risk_tag: "EARNINGS MISS",    risk_type: RiskType::Earnings, probability: 65 },
    VacancyEntry { ticker: "GBCI", price: 42.80, risk_tag: "DELISTING RISK",   risk_type: RiskType::Delist,   probability: 58 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_type_serializes_lowercase() {
        let json = serde_json::to_string(&RiskType::Earnings).unwrap();
        assert_eq!(json, "\"earnings\"");
        assert_eq!(serde_json::to_string(&RiskType::Ma).unwrap(), "\"ma\"");
    }

    #[test]
    fn test_entry_uses_camel_case_keys() {
        let value = serde_json::to_value(VACANCIES[0]).unwrap();
        assert_eq!(value["ticker"], "SNV");
        assert_eq!(value["riskTag"], "M&A TARGET");
        assert_eq!(value["riskType"], "ma");
        assert_eq!(value["probability"], 92);
        assert!((value["price"].as_f64().unwrap() - 45.20).abs() < 1e-9);
    }

    #[test]
    fn test_probabilities_are_percentages() {
        assert!(VACANCIES.iter().all(|v| v.probability <= 100));
    }
}
