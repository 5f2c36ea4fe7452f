// Resume-based advice: career recommendations and resume feedback.
// Both read the caller's latest resume and fail with RESUME_REQUIRED
// before any LLM call when none is on file.

pub mod handlers;
pub mod prompts;
