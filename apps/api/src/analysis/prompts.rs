// Resume analysis LLM prompt templates.
// All prompts for the analysis module are defined here.

/// Resume text is capped at this many characters before prompt construction.
pub const MAX_RESUME_CHARS: usize = 12_000;

pub const ATS_ANALYSIS_PROMPT: &str = r#"You are a strict ATS (Applicant Tracking System).

Analyze the resume below and return ONLY in this format:

SCORE: <number>/100

CRITICAL_ISSUES:
- point 1
- point 2

MISSING_KEYWORDS:
- keyword 1
- keyword 2

RECOMMENDATIONS:
- suggestion 1
- suggestion 2

RESUME:
{resume_text}"#;

/// Builds the ATS analysis prompt, embedding the resume text verbatim after
/// the `RESUME:` marker. Input longer than [`MAX_RESUME_CHARS`] is truncated
/// first.
pub fn build_ats_prompt(resume_text: &str) -> String {
    ATS_ANALYSIS_PROMPT.replace("{resume_text}", truncate_resume_text(resume_text))
}

/// Returns at most the first [`MAX_RESUME_CHARS`] characters of `text`.
/// Counted in chars, not bytes, so a multi-byte code point is never split.
pub fn truncate_resume_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_RESUME_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
