//! One-shot advisory question

use colored::*;

use lexa_advisor::{AdviceOutcome, AdvisorySession};
use lexa_types::fixtures;

use crate::display;

pub async fn run(mut session: AdvisorySession, question: &str, verbose: bool) -> anyhow::Result<()> {
    let context = fixtures::demo_context();

    let pb = display::spinner("Consulting Lexa...")?;
    let result = session.ask(question, &context).await;
    pb.finish_and_clear();

    let outcome = result?;

    if verbose {
        let llm = session.service().llm();
        display::labeled("Provider", &llm.kind().to_string());
        display::labeled("Model", llm.model().unwrap_or("-"));
        match &outcome {
            AdviceOutcome::Generated(_) => display::labeled("Outcome", "generated"),
            AdviceOutcome::Fallback(reason) => {
                display::warning(&format!("Fallback answer ({})", reason))
            }
        }
        println!();
    }

    println!("{}", outcome.text());

    if verbose && outcome.is_generated() {
        println!();
        println!(
            "{}",
            "Guidance only. The Authorising Officer holds final legal responsibility.".bright_black()
        );
    }

    Ok(())
}
