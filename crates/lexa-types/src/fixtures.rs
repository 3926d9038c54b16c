//! Demo snapshot of a sponsor licence
//!
//! Five sponsored workers and six monitoring agents, matching what the
//! dashboard shows out of the box.

use chrono::NaiveDate;

use crate::agent::{AgentId, AgentStatus, AgentSummary};
use crate::context::AdvisoryContext;
use crate::worker::{ComplianceStatus, WorkerId, WorkerSummary};

pub const LICENCE_NUMBER: &str = "L-88912-X";
pub const OVERALL_STATUS: &str = "94% Compliant";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

#[allow(clippy::too_many_arguments)]
fn worker(
    id: &str,
    name: &str,
    role: &str,
    soc_code: &str,
    visa_expiry: NaiveDate,
    salary: u32,
    status: ComplianceStatus,
    risk_score: u8,
    last_audit: NaiveDate,
) -> WorkerSummary {
    WorkerSummary {
        id: WorkerId::new(id),
        name: name.to_string(),
        role: role.to_string(),
        soc_code: soc_code.to_string(),
        visa_type: "Skilled Worker".to_string(),
        visa_expiry,
        salary,
        status,
        risk_score,
        last_audit,
    }
}

pub fn mock_workers() -> Vec<WorkerSummary> {
    use ComplianceStatus::*;

    vec![
        worker(
            "W001",
            "Sarah Jenkins",
            "Software Engineer",
            "2136",
            date(2025, 6, 15),
            45_000,
            Compliant,
            12,
            date(2024, 3, 1),
        ),
        worker(
            "W002",
            "David Chen",
            "Data Analyst",
            "2139",
            date(2024, 5, 20),
            38_000,
            Warning,
            68,
            date(2024, 3, 10),
        ),
        worker(
            "W003",
            "Elena Rodriguez",
            "Project Manager",
            "2424",
            date(2026, 11, 2),
            52_000,
            Compliant,
            5,
            date(2024, 2, 15),
        ),
        worker(
            "W004",
            "Marcus Thorne",
            "UI/UX Designer",
            "2137",
            date(2024, 4, 12),
            41_000,
            Critical,
            92,
            date(2024, 3, 18),
        ),
        worker(
            "W005",
            "Linda Wu",
            "DevOps Lead",
            "2136",
            date(2027, 1, 10),
            65_000,
            Compliant,
            8,
            date(2024, 1, 20),
        ),
    ]
}

fn agent(
    id: AgentId,
    name: &str,
    status: AgentStatus,
    health_score: u8,
    last_action: &str,
    capabilities: &[&str],
    current_task: &str,
) -> AgentSummary {
    AgentSummary {
        id,
        name: name.to_string(),
        status,
        capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
        current_task: Some(current_task.to_string()),
        health_score,
        last_action: last_action.to_string(),
    }
}

pub fn mock_agents() -> Vec<AgentSummary> {
    use AgentStatus::*;

    vec![
        agent(
            AgentId::Orchestrator,
            "Compliance Orchestrator",
            Active,
            98,
            "Self-audit complete",
            &["Coordination", "Alert Routing", "Health Monitoring"],
            "Analyzing overall compliance state",
        ),
        agent(
            AgentId::DocumentIntel,
            "Doc Intel Agent",
            Busy,
            95,
            "OCR extraction: Marcus T.",
            &["OCR", "NLP", "Forgery Detection"],
            "Processing BRP for Marcus Thorne",
        ),
        agent(
            AgentId::Timeline,
            "Timeline Agent",
            Active,
            100,
            "Updated renewal buffers",
            &["Predictive Scheduling", "Expiry Tracking"],
            "Optimizing renewal buffers",
        ),
        agent(
            AgentId::ChangeDetection,
            "Change Detection",
            Idle,
            92,
            "Payroll sync successful",
            &["HRIS Sync", "Anomaly Detection"],
            "Monitoring payroll for variance",
        ),
        agent(
            AgentId::Simulation,
            "Audit Simulator",
            Busy,
            96,
            "Injecting stress scenario #4",
            &["Mock Audits", "Stress Testing"],
            "Running Weekly Mock Inspection",
        ),
        agent(
            AgentId::Reporting,
            "Narrative Agent",
            Idle,
            99,
            "Generated monthly summary",
            &["Storytelling", "Regulatory Language"],
            "Waiting for audit triggers",
        ),
    ]
}

/// The context the chat panel sends with every question
pub fn demo_context() -> AdvisoryContext {
    AdvisoryContext::new(OVERALL_STATUS, LICENCE_NUMBER)
        .with_workers(mock_workers())
        .with_agents(mock_agents())
}
