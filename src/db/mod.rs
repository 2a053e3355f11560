pub mod accounts;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod preferences;
pub mod sessions;
pub mod stats;
