//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Language listing command handler.
pub mod languages;

/// Model catalog listing command handler.
pub mod models;

/// Translation command handler.
pub mod translate;
