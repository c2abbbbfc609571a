//! Strips code-fence artifacts from model output to recover a JSON
//! payload candidate.

/// Extract the JSON candidate from raw model text.
///
/// The prompts ask for raw JSON, but models still wrap replies in a
/// fenced code block often enough that this has to be tolerated. The
/// steps, in order:
///
/// 1. Trim surrounding whitespace.
/// 2. If the text opens with a triple backtick, split on the fence
///    delimiter and keep the first enclosed segment.
/// 3. Drop a leading `json` language tag from that segment.
/// 4. Trim again.
///
/// Bare JSON passes through untouched (modulo the trim). When the model
/// emits several fenced segments only the first is kept -- this is a
/// deliberate simplification, not a general markdown parser.
pub fn extract_json_candidate(raw: &str) -> &str {
    let mut text = raw.trim();
    if text.starts_with("```") {
        text = text.split("```").nth(1).unwrap_or("");
        text = text.strip_prefix("json").unwrap_or(text);
    }
    text.trim()
}
