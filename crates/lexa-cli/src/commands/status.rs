//! Backend status

use std::time::Duration;

use colored::*;

use lexa_advisor::AdvisoryService;

use crate::display;

pub async fn run(service: &AdvisoryService, timeout: Option<Duration>) -> anyhow::Result<()> {
    println!("{}", "Advisory Backend".bright_white().bold());
    println!("{}", "─".repeat(50));

    let llm = service.llm();
    let config = service.config();

    display::labeled("Provider", &llm.kind().to_string());
    display::labeled(
        "Model",
        config.model.as_deref().or(llm.model()).unwrap_or("-"),
    );
    display::labeled("Temperature", &format!("{:.1}", config.temperature));
    display::labeled(
        "Timeout",
        &timeout.map_or("none".to_string(), |t| format!("{}s", t.as_secs())),
    );

    print!("  {}: ", "Availability".bright_white());
    if llm.is_available().await {
        println!("{}", "● Ready".bright_green());
    } else {
        println!("{}", "○ Unavailable".yellow());
        println!(
            "  {}",
            "Set GEMINI_API_KEY, or LEXA_LLM_PROVIDER=ollama for a local model".bright_black()
        );
        println!(
            "  {}",
            "Questions will be answered with the recalibrating fallback".bright_black()
        );
    }

    Ok(())
}
