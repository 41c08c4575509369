pub mod config;
pub mod format;
pub mod logging;
pub mod request_log;
