mod client;
mod error;
mod language;
mod models;
mod prompt;
mod response;

pub use client::{DEFAULT_TIMEOUT, TranslationClient, TranslationRequest, TranslatorConfig};
pub use error::{TranslateError, ValidationError};
pub use language::{SUPPORTED_LANGUAGES, is_locale_shaped, language_name};
pub use models::{CostEstimate, DEFAULT_MODEL, MODEL_CATALOG, ModelProfile};
pub use prompt::{Locale, SYSTEM_PROMPT, build_user_prompt};
pub use response::{
    CompletionResult, FINISH_REASON_STOP, TranslationPayload, filter_payload, parse_completion,
};
