pub mod auth;
pub mod calculator;
pub mod import;
pub mod log;
pub mod preferences;
pub mod report;
pub mod sessions;
