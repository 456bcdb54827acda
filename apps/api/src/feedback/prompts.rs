// Resume feedback prompt templates.
// All prompts for the feedback module are defined here.

pub const RESUME_FEEDBACK_SYSTEM: &str = "\
You are an experienced career coach and resume reviewer. \
Give specific, actionable feedback on the resume you are shown: strengths, \
weaknesses, and concrete improvements. Quote the resume where it helps. \
Be direct and practical; do not invent experience the candidate does not have.";

pub const RESUME_FEEDBACK_PROMPT: &str = r#"Review the following resume and provide feedback.

RESUME TEXT:
{resume_text}

{focus_section}"#;

/// Rendered into the prompt when the user supplied a question or focus area.
pub const FOCUS_SECTION: &str = r#"QUESTION / FOCUS AREA:
{question}

Address this question directly in your feedback."#;

pub const DEFAULT_FOCUS: &str =
    "Give overall feedback covering content, structure, and presentation.";
