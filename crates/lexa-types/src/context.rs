//! Advisory context - the snapshot forwarded with every advisory query

use serde::{Deserialize, Serialize};

use crate::agent::AgentSummary;
use crate::worker::WorkerSummary;

/// Snapshot of domain data attached to one advisory query.
///
/// Built fresh by the caller for each question and serialized verbatim into
/// the prompt body. It has no lifecycle of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryContext {
    pub workers: Vec<WorkerSummary>,
    pub agents: Vec<AgentSummary>,
    /// Aggregate status as displayed, e.g. "94% Compliant"
    pub overall_status: String,
    pub licence_number: String,
}

impl AdvisoryContext {
    pub fn new(overall_status: impl Into<String>, licence_number: impl Into<String>) -> Self {
        Self {
            workers: Vec::new(),
            agents: Vec::new(),
            overall_status: overall_status.into(),
            licence_number: licence_number.into(),
        }
    }

    pub fn with_workers(mut self, workers: Vec<WorkerSummary>) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_agents(mut self, agents: Vec<AgentSummary>) -> Self {
        self.agents = agents;
        self
    }

    /// Compact JSON text, as embedded in the prompt
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Workers whose status is Warning or Critical
    pub fn workers_needing_attention(&self) -> impl Iterator<Item = &WorkerSummary> {
        self.workers.iter().filter(|w| w.status.needs_attention())
    }
}
