//! Job posts and the bids placed on them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Catalog shipped with the binary
const BUNDLED_JOBS: &str = include_str!("../../data/jobs.json");

#[derive(Debug, Error)]
pub enum JobDataError {
    #[error("failed to read job catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid job catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A bid placed by a helper on a job post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub date: NaiveDate,
}

/// A job post shown in the list and detail views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPost {
    pub id: String,
    pub name: String,
    pub creator: String,
    pub description: String,
    pub price: f64,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub bids: Vec<Bid>,
}

impl JobPost {
    pub fn has_bids(&self) -> bool {
        !self.bids.is_empty()
    }

    /// Lowest bid, if any
    pub fn lowest_bid(&self) -> Option<&Bid> {
        self.bids.iter().min_by(|a, b| a.price.total_cmp(&b.price))
    }

    pub fn price_label(&self) -> String {
        format_price(self.price)
    }
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Parse a job catalog from JSON text
pub fn parse_jobs(json: &str) -> Result<Vec<JobPost>, JobDataError> {
    Ok(serde_json::from_str(json)?)
}

/// Load the bundled catalog
pub fn bundled_jobs() -> Result<Vec<JobPost>, JobDataError> {
    parse_jobs(BUNDLED_JOBS)
}

/// Load a catalog from a JSON file
pub fn load_jobs(path: &Path) -> Result<Vec<JobPost>, JobDataError> {
    let content = fs::read_to_string(path).map_err(|source| JobDataError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_jobs(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bundled_catalog_parses() {
        let jobs = bundled_jobs().unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].id, "JOB-01");
        assert_eq!(jobs[0].bids.len(), 3);
        assert!(!jobs[2].has_bids());
    }

    #[test]
    fn test_bids_default_to_empty() {
        let json = r#"[{
            "id": "X",
            "name": "Gardener",
            "creator": "Pak Budi",
            "description": "Weekly garden care",
            "price": 40,
            "deadline": "2026-12-01"
        }]"#;
        let jobs = parse_jobs(json).unwrap();
        assert!(jobs[0].bids.is_empty());
        assert_eq!(jobs[0].deadline, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_jobs("{not json").unwrap_err();
        assert!(matches!(err, JobDataError::Parse(_)));
        assert!(err.to_string().starts_with("invalid job catalog"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_jobs(Path::new("/nonexistent/bidboard/jobs.json")).unwrap_err();
        assert!(matches!(err, JobDataError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/bidboard/jobs.json"));
    }

    #[test]
    fn test_lowest_bid() {
        let jobs = bundled_jobs().unwrap();
        assert_eq!(jobs[0].lowest_bid().unwrap().name, "Yuni Astuti");
        assert!(jobs[2].lowest_bid().is_none());
    }

    #[test]
    fn test_price_label() {
        assert_eq!(format_price(350.0), "$350.00");
        assert_eq!(format_price(12.5), "$12.50");
    }
}
