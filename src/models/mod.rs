pub mod account;
pub mod preferences;
pub mod report;
pub mod rollup;
pub mod session;
