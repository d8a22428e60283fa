//! Shared errors and configuration for Matchday.
//!
//! This crate provides the pieces every other crate leans on:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, DatabaseConfig, LogConfig, LogFormat};
pub use error::{AppError, AppResult};
