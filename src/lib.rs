pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod mcp_server;
pub mod parsing;
pub mod service;
pub mod types;
