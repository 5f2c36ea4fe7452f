pub mod interview;
pub mod resume;
pub mod user;
