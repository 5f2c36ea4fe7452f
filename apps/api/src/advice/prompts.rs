// System personas for the advice module. User prompts live in the
// template directory and are loaded per request.

pub const CAREER_SYSTEM: &str = "You are an expert career strategist with up-to-the-minute \
    knowledge of labor-market trends, compensation data, and emerging skills demands.";

pub const FEEDBACK_SYSTEM: &str = "You are a resume expert who provides line-by-line \
    critique and improvement suggestions.";

/// Marker the advice templates use for the extracted resume text.
pub const RESUME_TEXT_MARKER: &str = "resume_text";
