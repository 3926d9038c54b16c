//! Prompt assembly for advisory queries
//!
//! The prompt body is two labelled lines:
//!
//! ```text
//! CONTEXT: {"workers":[...],"agents":[...],"overallStatus":"...","licenceNumber":"..."}
//! USER MESSAGE: <question>
//! ```
//!
//! The context is compact JSON, which never contains a raw newline, so the
//! first `\nUSER MESSAGE: ` always ends the context segment.

use lexa_types::AdvisoryContext;

pub const SYSTEM_INSTRUCTION: &str = r#"You are the "Lexa Intelligence Conversational Agent", an advanced AI component of an elegant UK Sponsorship Compliance platform.
Your role is to provide expert guidance on UKVI (UK Visas and Immigration) rules, sponsor licence duties, and organizational compliance status.

Key Guidelines:
1. Tone: Professional, authoritative, yet accessible.
2. Context: You have access to real-time organizational data (passed in via prompts).
3. Capability: You can answer complex regulatory questions, guide users through CoS (Certificate of Sponsorship) processes, and interpret mock audit results.
4. Boundaries: You must always emphasize that your advice is for guidance and that the Authorizing Officer holds final legal responsibility.
5. Knowledge: You are deeply familiar with Appendix Skilled Worker, Appendix Sponsor Duties, and SOC code hierarchies.

When asked about specific workers, use the data provided in the prompt to offer detailed risk assessments."#;

const CONTEXT_LABEL: &str = "CONTEXT: ";
const QUESTION_LABEL: &str = "\nUSER MESSAGE: ";

/// Build the prompt body for one question
pub fn render_prompt(question: &str, context: &AdvisoryContext) -> serde_json::Result<String> {
    let context_json = context.to_json()?;
    Ok(format!(
        "{}{}{}{}",
        CONTEXT_LABEL, context_json, QUESTION_LABEL, question
    ))
}

/// The serialized context exactly as it appears in a rendered prompt
pub fn context_segment(prompt: &str) -> Option<&str> {
    let rest = prompt.strip_prefix(CONTEXT_LABEL)?;
    let end = rest.find(QUESTION_LABEL)?;
    Some(&rest[..end])
}

/// The question part of a rendered prompt
pub fn question_segment(prompt: &str) -> Option<&str> {
    let rest = prompt.strip_prefix(CONTEXT_LABEL)?;
    let start = rest.find(QUESTION_LABEL)? + QUESTION_LABEL.len();
    Some(&rest[start..])
}

/// Recover the context snapshot from a rendered prompt
pub fn parse_context(prompt: &str) -> Option<AdvisoryContext> {
    AdvisoryContext::from_json(context_segment(prompt)?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexa_types::fixtures;

    #[test]
    fn test_prompt_layout() {
        let ctx = AdvisoryContext::new("94% Compliant", "L-88912-X");
        let prompt = render_prompt("Run a mock audit summary", &ctx).unwrap();

        assert_eq!(
            prompt,
            "CONTEXT: {\"workers\":[],\"agents\":[],\"overallStatus\":\"94% Compliant\",\"licenceNumber\":\"L-88912-X\"}\nUSER MESSAGE: Run a mock audit summary"
        );
    }

    #[test]
    fn test_context_round_trips_through_prompt() {
        let ctx = fixtures::demo_context();
        let prompt = render_prompt("Which workers have the highest risk scores?", &ctx).unwrap();

        assert_eq!(context_segment(&prompt), Some(ctx.to_json().unwrap().as_str()));
        assert_eq!(parse_context(&prompt), Some(ctx));
        assert_eq!(
            question_segment(&prompt),
            Some("Which workers have the highest risk scores?")
        );
    }

    #[test]
    fn test_question_containing_label() {
        let ctx = fixtures::demo_context();
        let question = "Explain this:\nUSER MESSAGE: nested\nacross lines";
        let prompt = render_prompt(question, &ctx).unwrap();

        assert_eq!(parse_context(&prompt), Some(ctx));
        assert_eq!(question_segment(&prompt), Some(question));
    }

    #[test]
    fn test_foreign_prompt_has_no_context() {
        assert_eq!(context_segment("just a question"), None);
        assert_eq!(parse_context("CONTEXT: not json\nUSER MESSAGE: hi"), None);
    }

    #[test]
    fn test_system_instruction_carries_disclaimer() {
        assert!(SYSTEM_INSTRUCTION.contains("Lexa Intelligence Conversational Agent"));
        assert!(SYSTEM_INSTRUCTION.contains("Authorizing Officer holds final legal responsibility"));
    }
}
