//! Monitoring agent roster
//!
//! Agents are descriptive labels shown to the user and forwarded to the
//! generation backend. They carry no behaviour.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TypesError};

/// Which monitoring agent a roster entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    #[serde(rename = "orchestrator")]
    Orchestrator,
    #[serde(rename = "doc-intel")]
    DocumentIntel,
    #[serde(rename = "timeline")]
    Timeline,
    #[serde(rename = "change-detect")]
    ChangeDetection,
    #[serde(rename = "reporting")]
    Reporting,
    #[serde(rename = "simulation")]
    Simulation,
    #[serde(rename = "conversational")]
    Conversational,
}

impl AgentId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orchestrator => "orchestrator",
            Self::DocumentIntel => "doc-intel",
            Self::Timeline => "timeline",
            Self::ChangeDetection => "change-detect",
            Self::Reporting => "reporting",
            Self::Simulation => "simulation",
            Self::Conversational => "conversational",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "orchestrator" => Ok(Self::Orchestrator),
            "doc-intel" | "document-intel" => Ok(Self::DocumentIntel),
            "timeline" => Ok(Self::Timeline),
            "change-detect" | "change-detection" => Ok(Self::ChangeDetection),
            "reporting" => Ok(Self::Reporting),
            "simulation" => Ok(Self::Simulation),
            "conversational" => Ok(Self::Conversational),
            _ => Err(TypesError::unknown("agent id", s)),
        }
    }
}

/// Displayed activity state of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Idle,
    Busy,
    Warning,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Idle => write!(f, "idle"),
            Self::Busy => write!(f, "busy"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Flat record of one roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    pub id: AgentId,
    pub name: String,
    pub status: AgentStatus,
    pub capabilities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_task: Option<String>,
    /// Health score, 0-100
    pub health_score: u8,
    pub last_action: String,
}
