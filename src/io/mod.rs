//! Configuration intake, errors and the terminal front end

/// Command-line interface and run loop
pub mod cli;
/// Constants, settings and configuration validation
pub mod configuration;
/// Error types
pub mod error;
/// Animated GIF preview export
pub mod image;
/// Terminal presenter
pub mod progress;
/// Status line formatting
pub mod status;
