//! Display utilities for the CLI

use colored::*;

use lexa_advisor::{ChatMessage, ChatRole};

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", "━".repeat(60).bright_black());
    println!(" {}", title.bright_white().bold());
    println!("{}", "━".repeat(60).bright_black());
}

/// Print an error message
pub fn error(message: &str) {
    println!("  {} {}", "✗".bright_red(), message.bright_red());
}

/// Print an info message
pub fn info(message: &str) {
    println!("  {} {}", "→".bright_blue(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message.yellow());
}

/// Print a labeled value
pub fn labeled(label: &str, value: &str) {
    println!("  {}: {}", label.bright_white(), value.bright_cyan());
}

/// Print one chat message, one paragraph per line
pub fn chat_message(message: &ChatMessage) {
    let speaker = match message.role {
        ChatRole::User => "You".bright_white().bold(),
        ChatRole::Assistant => "Lexa".bright_green().bold(),
    };
    println!();
    println!("{} {}", speaker, message.timestamp.bright_black());
    for line in message.content.lines() {
        println!("  {}", line);
    }
}

/// Spinner shown while waiting on the backend
pub fn spinner(message: &str) -> anyhow::Result<indicatif::ProgressBar> {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(indicatif::ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}
