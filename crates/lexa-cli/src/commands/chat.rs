//! Interactive advisory chat

use colored::*;
use dialoguer::Input;

use lexa_advisor::{AdvisorySession, ConversationError};
use lexa_types::fixtures;

use crate::display;

pub async fn run(mut session: AdvisorySession) -> anyhow::Result<()> {
    display::section("Lexa Intelligence Agent");
    println!(
        "  {}",
        "/reset clears the conversation, /quit exits".bright_black()
    );

    for message in session.conversation().messages() {
        display::chat_message(message);
    }

    loop {
        let suggestions = session.conversation().suggestions();
        if !suggestions.is_empty() {
            println!();
            println!("  {}", "Try asking:".bright_white());
            for (i, q) in suggestions.iter().enumerate() {
                println!("    {} {}", format!("[{}]", i + 1).bright_cyan(), q);
            }
        }

        println!();
        let input: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()?;
        let input = input.trim();

        match input {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                display::info("Conversation reset");
                if let Some(welcome) = session.conversation().messages().first() {
                    display::chat_message(welcome);
                }
                continue;
            }
            _ => {}
        }

        // A bare number picks a starter question
        let question = match input.parse::<usize>() {
            Ok(n) if (1..=suggestions.len()).contains(&n) => suggestions[n - 1],
            _ => input,
        };

        // Fresh snapshot per question
        let context = fixtures::demo_context();

        let pb = display::spinner("Lexa is thinking...")?;
        let result = session.ask(question, &context).await;
        pb.finish_and_clear();

        match result {
            Ok(_) => {
                if let Some(answer) = session.conversation().last() {
                    display::chat_message(answer);
                }
            }
            Err(ConversationError::EmptyInput) => continue,
            Err(e) => display::error(&e.to_string()),
        }
    }

    Ok(())
}
