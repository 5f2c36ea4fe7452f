pub const INTERVIEWER_SYSTEM: &str = "You are a job interviewer.";

pub const COACH_SYSTEM: &str = "You are a skilled interview coach.";
