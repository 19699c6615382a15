//! CLI library components for the SSIM schedule converter.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
