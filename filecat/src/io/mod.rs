//! Side-effecting helpers: filesystem, terminal, configuration.

pub mod config;
pub mod confirm;
pub mod discovery;
pub mod output;
pub mod references;
