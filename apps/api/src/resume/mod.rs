// Resume intake: PDF validation, text extraction, archiving, persistence.
// The stored text is what the advisory endpoints send to the LLM.

pub mod extract;
pub mod handlers;
