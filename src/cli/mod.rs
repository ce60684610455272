//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use crate::translation::TranslateError;

/// Maps a failed run to a sysexits-style process exit code.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<TranslateError>() {
        Some(TranslateError::Configuration(_)) => exitcode::CONFIG,
        Some(TranslateError::Validation(_)) => exitcode::USAGE,
        Some(TranslateError::Transport { .. }) => exitcode::UNAVAILABLE,
        Some(
            TranslateError::IncompleteResponse { .. }
            | TranslateError::MalformedResponse(_)
            | TranslateError::MalformedPayload(_),
        ) => exitcode::PROTOCOL,
        None => exitcode::SOFTWARE,
    }
}
