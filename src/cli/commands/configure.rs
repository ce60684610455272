//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{InquireError, MultiSelect, Select, Text};

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, PolytlConfig,
};
use crate::translation::{DEFAULT_MODEL, MODEL_CATALOG, SUPPORTED_LANGUAGES};
use crate::ui::Style;

/// Runs the configure command to edit default settings.
///
/// Lets the user pick the default model, endpoint, source and target languages,
/// and the environment variable holding the API key.
pub fn run_configure() -> Result<()> {
    let manager = ConfigManager::new()?;

    let outcome = session_outcome(edit_and_save(&manager))?;

    println!();
    match outcome {
        SessionOutcome::Saved => println!(
            "{} Configuration saved to {}",
            Style::success("✓"),
            Style::secondary(manager.config_path().display())
        ),
        SessionOutcome::Abandoned => println!("{}", Style::secondary("Configuration unchanged")),
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum SessionOutcome {
    Saved,
    Abandoned,
}

/// Ctrl+C or Escape at any prompt abandons the session before anything is written.
fn session_outcome(result: Result<()>) -> Result<SessionOutcome> {
    match result {
        Ok(()) => Ok(SessionOutcome::Saved),
        Err(err)
            if matches!(
                err.downcast_ref::<InquireError>(),
                Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
            ) =>
        {
            Ok(SessionOutcome::Abandoned)
        }
        Err(err) => Err(err),
    }
}

/// Prints the current configuration without editing it.
pub fn show_config() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    println!(
        "{} {}",
        Style::label("config file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
    print_current_defaults(&config);

    Ok(())
}

fn edit_and_save(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);

    let current = config.polytl.clone();

    let model = select_model(current.model.as_deref())?;
    let endpoint = input_endpoint(current.endpoint.as_deref())?;
    let from = select_source_language(current.from.as_deref())?;
    let to = select_target_languages(current.to.as_deref().unwrap_or_default())?;
    let api_key_env = input_api_key_env(current.api_key_env_name())?;

    config.polytl = PolytlConfig {
        model: Some(model),
        endpoint: Some(endpoint),
        from: Some(from),
        to: Some(to),
        api_key_env: Some(api_key_env),
        ..current
    };

    manager.save(&config)
}

fn display_or_unset(value: Option<&str>) -> String {
    value.map_or_else(|| Style::secondary("(not set)"), Style::value)
}

fn print_current_defaults(config: &ConfigFile) {
    let settings = &config.polytl;
    let to = settings.to.as_ref().map(|codes| codes.join(", "));
    let api_key = if settings.get_api_key().is_some() {
        Style::value("(set)")
    } else {
        Style::secondary("(not set)")
    };

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}        {}",
        Style::label("model"),
        display_or_unset(settings.model.as_deref())
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        display_or_unset(settings.endpoint.as_deref())
    );
    println!(
        "  {}         {}",
        Style::label("from"),
        display_or_unset(settings.from.as_deref())
    );
    println!(
        "  {}           {}",
        Style::label("to"),
        display_or_unset(to.as_deref())
    );
    println!(
        "  {}  {}",
        Style::label("api_key_env"),
        Style::value(settings.api_key_env_name())
    );
    println!("  {}      {}", Style::label("api_key"), api_key);
    println!();
}

fn select_model(default: Option<&str>) -> Result<String> {
    let options: Vec<String> = MODEL_CATALOG.iter().map(|m| m.name.to_string()).collect();

    let default_index = options
        .iter()
        .position(|m| m == default.unwrap_or(DEFAULT_MODEL))
        .unwrap_or(0);

    let selection = Select::new("Default model:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn input_endpoint(default: Option<&str>) -> Result<String> {
    let endpoint = Text::new("API endpoint:")
        .with_default(default.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("Base URL of an OpenAI-compatible API, without /v1")
        .prompt()?;

    if endpoint.trim().is_empty() {
        bail!("Endpoint cannot be empty");
    }

    Ok(endpoint.trim().to_string())
}

fn language_options() -> Vec<String> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect()
}

// "code - Name" -> "code"
fn code_of(option: &str) -> String {
    option.split(" - ").next().unwrap_or(option).to_string()
}

fn select_source_language(default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| SUPPORTED_LANGUAGES.iter().position(|(code, _)| *code == d))
        .unwrap_or(0);

    let selection = Select::new("Default source language:", language_options())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(code_of(&selection))
}

fn select_target_languages(defaults: &[String]) -> Result<Vec<String>> {
    let default_indices: Vec<usize> = SUPPORTED_LANGUAGES
        .iter()
        .enumerate()
        .filter(|(_, (code, _))| defaults.iter().any(|d| d == code))
        .map(|(index, _)| index)
        .collect();

    let selection = MultiSelect::new("Default target languages:", language_options())
        .with_default(&default_indices)
        .prompt()?;

    if selection.is_empty() {
        bail!("Select at least one target language");
    }

    Ok(selection.iter().map(|s| code_of(s)).collect())
}

fn input_api_key_env(default: &str) -> Result<String> {
    let name = Text::new("Environment variable holding the API key:")
        .with_default(default)
        .with_help_message(&format!("Defaults to {DEFAULT_API_KEY_ENV}"))
        .prompt()?;

    if name.trim().is_empty() {
        bail!("Environment variable name cannot be empty");
    }

    Ok(name.trim().to_string())
}
