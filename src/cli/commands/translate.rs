use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use tracing::info;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::translation::{TranslationClient, TranslationRequest};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Vec<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let resolve_options = ResolveOptions {
        from: options.from,
        to: options.to,
        model: options.model,
        endpoint: options.endpoint,
    };
    let resolved = resolve_config(&resolve_options, &config_file)?;

    let sentences = InputReader::read_sentences(options.file.as_deref())?;
    if sentences.is_empty() {
        bail!("Error: Input is empty");
    }

    let request = TranslationRequest {
        sentences,
        source_locale: resolved.source_locale,
        target_locales: resolved.target_locales,
    };

    let spinner = Spinner::for_request(&request, options.quiet);
    let result = TranslationClient::new()
        .translate(&resolved.translator, &request)
        .await;
    drop(spinner);
    let payload = result?;

    let json = serde_json::to_string_pretty(&payload).context("Failed to serialize translations")?;

    match options.output {
        Some(path) => {
            atomic_write(&path, &format!("{json}\n"))?;
            info!(path = %path.display(), entries = payload.len(), "translations written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
