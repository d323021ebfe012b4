pub mod auth;
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
