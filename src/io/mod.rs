//! Input/output operations: CLI, persistence, rendering, and errors

/// Command-line interface and batch generation
pub mod cli;
/// Constants and draw configuration
pub mod configuration;
/// Error types and result alias
pub mod error;
/// JSON save/load of patterns
pub mod persist;
/// Progress reporting
pub mod progress;
/// PNG rendering of patterns
pub mod render;
