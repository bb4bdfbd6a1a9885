pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod crypto;
pub mod error;
pub mod logging;
pub mod output;
pub mod rpc;
