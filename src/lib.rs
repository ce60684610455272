//! # polytl - Multi-locale Batch Translation
//!
//! `polytl` translates a batch of sentences from one language into several
//! target languages with a single request to an OpenAI-compatible chat
//! completion endpoint. The model is asked for a strict JSON document, which is
//! then re-validated and filtered down to the requested locales.
//!
//! ## Quick Start
//!
//! ```bash
//! # One sentence per line, into English, Spanish and Italian
//! polytl --from fr --to en,es,it ./sentences.txt
//!
//! # From stdin, result written to a file
//! echo "Bonjour le monde" | polytl --from fr --to en,de --output out.json
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! # async fn demo() -> Result<(), polytl::translation::TranslateError> {
//! use polytl::translation::{TranslationClient, TranslationRequest, TranslatorConfig, DEFAULT_TIMEOUT};
//!
//! let config = TranslatorConfig {
//!     api_key: std::env::var("OPENAI_API_KEY").ok(),
//!     model: "gpt-4o".to_string(),
//!     endpoint: "https://api.openai.com".to_string(),
//!     timeout: DEFAULT_TIMEOUT,
//! };
//! let request = TranslationRequest::new(["Bonjour"], "fr", ["en", "es"]);
//! let payload = TranslationClient::new().translate(&config, &request).await?;
//! assert!(payload.iter().all(|entry| entry.keys().all(|k| k == "en" || k == "es")));
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Defaults are stored in `~/.config/polytl/config.toml`:
//!
//! ```toml
//! [polytl]
//! model = "gpt-4o"
//! endpoint = "https://api.openai.com"
//! from = "fr"
//! to = ["en", "es"]
//! api_key_env = "OPENAI_API_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Tracing subscriber setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation core: validation, prompts, the completion call and response filtering.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
