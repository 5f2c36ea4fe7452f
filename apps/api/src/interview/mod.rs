// Mock interview practice: question generation and answer critique.

pub mod handlers;
pub mod prompts;
pub mod scoring;
