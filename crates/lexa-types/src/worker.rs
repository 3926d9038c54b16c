//! Sponsored worker records
//!
//! A `WorkerSummary` is the flat record of one sponsored worker as the
//! compliance dashboard knows it. Dates are calendar dates with no time zone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TypesError};

/// Identifier of a sponsored worker (e.g. `W004`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(pub String);

impl WorkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compliance status of a sponsored worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    Warning,
    Critical,
    Pending,
}

impl ComplianceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
            Self::Pending => "Pending",
        }
    }

    /// Whether the status needs attention from the sponsor
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Warning | Self::Critical)
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceStatus {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "compliant" => Ok(Self::Compliant),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            "pending" => Ok(Self::Pending),
            _ => Err(TypesError::unknown("compliance status", s)),
        }
    }
}

/// Flat record of a sponsored worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSummary {
    pub id: WorkerId,
    pub name: String,
    pub role: String,
    /// Standard Occupational Classification code
    pub soc_code: String,
    pub visa_type: String,
    pub visa_expiry: NaiveDate,
    /// Annual salary in whole pounds
    pub salary: u32,
    pub status: ComplianceStatus,
    /// Risk score, 0 (none) to 100 (certain breach)
    pub risk_score: u8,
    pub last_audit: NaiveDate,
}

impl WorkerSummary {
    /// Days from `as_of` until the visa expires. Negative once expired.
    pub fn days_until_visa_expiry(&self, as_of: NaiveDate) -> i64 {
        (self.visa_expiry - as_of).num_days()
    }

    pub fn is_visa_expired(&self, as_of: NaiveDate) -> bool {
        self.visa_expiry < as_of
    }
}

/// Workers ordered by descending risk score; ties keep their input order
pub fn rank_by_risk(workers: &[WorkerSummary]) -> Vec<&WorkerSummary> {
    let mut ranked: Vec<&WorkerSummary> = workers.iter().collect();
    ranked.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker(id: &str, risk: u8, expiry: NaiveDate) -> WorkerSummary {
        WorkerSummary {
            id: WorkerId::new(id),
            name: format!("Worker {}", id),
            role: "Engineer".to_string(),
            soc_code: "2136".to_string(),
            visa_type: "Skilled Worker".to_string(),
            visa_expiry: expiry,
            salary: 45_000,
            status: ComplianceStatus::Compliant,
            risk_score: risk,
            last_audit: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn test_days_until_visa_expiry() {
        let w = worker("W1", 10, NaiveDate::from_ymd_opt(2024, 4, 12).unwrap());
        let as_of = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(w.days_until_visa_expiry(as_of), 23);
        assert!(!w.is_visa_expired(as_of));

        let later = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        assert_eq!(w.days_until_visa_expiry(later), -8);
        assert!(w.is_visa_expired(later));
    }

    #[test]
    fn test_rank_by_risk_is_stable() {
        let expiry = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let workers = vec![
            worker("W1", 12, expiry),
            worker("W2", 92, expiry),
            worker("W3", 12, expiry),
            worker("W4", 68, expiry),
        ];

        let ids: Vec<&str> = rank_by_risk(&workers).iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["W2", "W4", "W1", "W3"]);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("critical".parse::<ComplianceStatus>().unwrap(), ComplianceStatus::Critical);
        assert_eq!("Warning".parse::<ComplianceStatus>().unwrap(), ComplianceStatus::Warning);
        assert!("fine".parse::<ComplianceStatus>().is_err());

        let parsed: crate::Result<ComplianceStatus> = "fine".parse();
        assert_eq!(parsed, Err(TypesError::unknown("compliance status", "fine")));
        assert!(ComplianceStatus::Critical.needs_attention());
        assert!(!ComplianceStatus::Pending.needs_attention());
    }

    #[test]
    fn test_worker_serializes_camel_case() {
        let w = worker("W004", 92, NaiveDate::from_ymd_opt(2024, 4, 12).unwrap());
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["id"], "W004");
        assert_eq!(json["socCode"], "2136");
        assert_eq!(json["visaExpiry"], "2024-04-12");
        assert_eq!(json["riskScore"], 92);
        assert_eq!(json["status"], "Compliant");
    }
}
