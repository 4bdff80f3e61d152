//! CLI commands for relnote

pub mod config;
pub mod dispatch;
pub mod format;
pub mod init;
pub mod related;
pub mod resolve;
