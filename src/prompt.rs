use tracing::warn;

/// System message sent ahead of every summarization request.
pub const SYSTEM_PROMPT: &str = "You are a meeting-notes assistant.
Return a clean, concise, well-structured summary.
If the prompt asks for bullets, use \"-\" bullets.
Always include (if available): Decisions, Action Items (with owners & due dates), Risks/Blockers, Next Steps.";

/// Instruction the UI starts with.
pub const DEFAULT_INSTRUCTION: &str =
    "Summarize in concise bullet points. Include action items and owners.";

/// Max length (in characters) of the instruction forwarded to the provider
pub const MAX_INSTRUCTION_LEN: usize = 2000;

/// Remove control characters (newlines and tabs survive) and hard-truncate.
///
/// Truncation is logged at `warn` with the original length.
pub fn sanitize_instruction(raw: &str) -> String {
    let cleaned: Vec<char> = raw
        .chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .collect();

    if cleaned.len() > MAX_INSTRUCTION_LEN {
        warn!(
            instruction_chars = cleaned.len(),
            max_chars = MAX_INSTRUCTION_LEN,
            "Custom instruction truncated"
        );
    }
    cleaned.into_iter().take(MAX_INSTRUCTION_LEN).collect()
}

/// Builds the user message: the custom instruction followed by the transcript.
pub fn build_user_message(instruction: &str, transcript: &str) -> String {
    format!(
        "CUSTOM INSTRUCTION:\n{}\n\nTRANSCRIPT:\n{}",
        sanitize_instruction(instruction),
        transcript
    )
}

/// Rough token estimate, also used for the UI's word estimate.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}
