pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod oneshot;
pub mod ui;
pub mod upload;
