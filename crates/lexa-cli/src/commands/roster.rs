//! Worker and agent roster

use chrono::NaiveDate;
use colored::*;

use lexa_types::{fixtures, rank_by_risk, AgentStatus, ComplianceStatus};

use crate::display;

fn status_label(status: ComplianceStatus) -> ColoredString {
    match status {
        ComplianceStatus::Compliant => status.as_str().bright_green(),
        ComplianceStatus::Warning => status.as_str().yellow(),
        ComplianceStatus::Critical => status.as_str().bright_red(),
        ComplianceStatus::Pending => status.as_str().bright_black(),
    }
}

fn expiry_label(days: i64) -> ColoredString {
    if days < 0 {
        format!("expired {}d ago", -days).bright_red()
    } else if days <= 90 {
        format!("{}d left", days).yellow()
    } else {
        format!("{}d left", days).normal()
    }
}

pub fn run(status: Option<ComplianceStatus>, as_of: NaiveDate) -> anyhow::Result<()> {
    let context = fixtures::demo_context();

    display::section(&format!(
        "Licence {} - {}",
        context.licence_number, context.overall_status
    ));
    display::labeled("As of", &as_of.to_string());
    let flagged = context.workers_needing_attention().count();
    if flagged > 0 {
        display::warning(&format!("{} of {} workers need attention", flagged, context.workers.len()));
    }
    println!();

    let ranked = rank_by_risk(&context.workers);
    let shown: Vec<_> = ranked
        .into_iter()
        .filter(|w| status.map_or(true, |s| w.status == s))
        .collect();

    if shown.is_empty() {
        display::info("No workers match");
    }

    for worker in shown {
        println!(
            "  {:>3}  {:<18} {:<18} {:<10} SOC {}  £{:<7} {}",
            worker.risk_score.to_string().bright_white().bold(),
            worker.name,
            worker.role.bright_black(),
            status_label(worker.status),
            worker.soc_code,
            worker.salary,
            expiry_label(worker.days_until_visa_expiry(as_of)),
        );
    }

    println!();
    println!("{}", "Agents".bright_white().bold());
    println!("{}", "─".repeat(60));
    for agent in &context.agents {
        let state = match agent.status {
            AgentStatus::Active => "●".bright_green(),
            AgentStatus::Busy => "●".bright_cyan(),
            AgentStatus::Idle => "○".bright_black(),
            AgentStatus::Warning => "●".yellow(),
        };
        println!(
            "  {} {:<24} {:>3}%  {}",
            state,
            agent.name,
            agent.health_score,
            agent.current_task.as_deref().unwrap_or("-").bright_black()
        );
    }

    Ok(())
}
