//! Input/output surface: CLI, export, progress, and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Generation constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export of finished banners
pub mod image;
/// Batch progress display
pub mod progress;
/// Mask snapshot capture and GIF export
pub mod visualization;
