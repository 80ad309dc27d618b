pub mod analysis;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod model;
pub mod output;
pub mod session;
pub mod tui;
pub mod util;
