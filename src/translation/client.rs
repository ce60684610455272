use reqwest::Client;
use serde::Serialize;
use std::borrow::Cow;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::error::{TranslateError, ValidationError};
use super::language::{is_locale_shaped, language_name};
use super::models::ModelProfile;
use super::prompt::{Locale, SYSTEM_PROMPT, build_user_prompt};
use super::response::{TranslationPayload, api_error_message, parse_completion};

/// Upper bound on a single completion call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(500);

/// Everything the translator needs from configuration, passed in per call.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL of the OpenAI-compatible API, without `/v1/...`.
    pub endpoint: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub sentences: Vec<String>,
    pub source_locale: String,
    pub target_locales: Vec<String>,
}

impl TranslationRequest {
    pub fn new<S, T>(sentences: S, source_locale: impl Into<String>, target_locales: T) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            sentences: sentences.into_iter().map(Into::into).collect(),
            source_locale: source_locale.into(),
            target_locales: target_locales.into_iter().map(Into::into).collect(),
        }
    }

    /// Checks the shape of the locales and that there is something to translate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_locale_shaped(&self.source_locale) {
            return Err(ValidationError::InvalidLocale(self.source_locale.clone()));
        }

        if self.target_locales.is_empty()
            || !self.target_locales.iter().all(|l| is_locale_shaped(l))
        {
            return Err(ValidationError::InvalidLocaleList(
                self.target_locales.clone(),
            ));
        }

        if self.sentences.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Clone, Default)]
pub struct TranslationClient {
    client: Client,
}

impl TranslationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates every sentence of `request` into each of its target locales.
    ///
    /// Failures are logged here, once, and returned as a typed error. There is no
    /// partial result: either every step succeeds or the call fails.
    pub async fn translate(
        &self,
        config: &TranslatorConfig,
        request: &TranslationRequest,
    ) -> Result<TranslationPayload, TranslateError> {
        self.try_translate(config, request)
            .await
            .inspect_err(|err| error!(kind = err.kind(), error = %err, "translation failed"))
    }

    async fn try_translate(
        &self,
        config: &TranslatorConfig,
        request: &TranslationRequest,
    ) -> Result<TranslationPayload, TranslateError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TranslateError::Configuration("no API key configured".into()))?;

        request.validate()?;

        let model = ModelProfile::resolve(&config.model);

        let source = Locale {
            code: request.source_locale.as_str(),
            name: language_name(&request.source_locale)?,
        };
        let targets = request
            .target_locales
            .iter()
            .map(|code| language_name(code).map(|name| Locale { code: code.as_str(), name }))
            .collect::<Result<Vec<_>, _>>()?;

        let user_prompt = build_user_prompt(&request.sentences, source, &targets);
        debug!(model = model.name, prompt = %user_prompt, "built translation prompt");

        let body = self.complete(config, api_key, model, &user_prompt).await?;

        let completion = parse_completion(&body)?;

        let cost = model.estimate_cost(completion.prompt_tokens, completion.completion_tokens);
        info!(
            model = model.name,
            prompt_tokens = completion.prompt_tokens,
            completion_tokens = completion.completion_tokens,
            "estimated price => {:.3} + {:.3} = {:.3} USD",
            cost.input,
            cost.output,
            cost.total()
        );

        let payload = completion.into_payload(&request.target_locales)?;
        if payload.is_empty() {
            warn!(
                sentences = request.sentences.len(),
                "no requested locale survived filtering"
            );
        }

        Ok(payload)
    }

    /// Sends the prompt pair and returns the raw body of a successful response.
    async fn complete(
        &self,
        config: &TranslatorConfig,
        api_key: &str,
        model: &ModelProfile,
        user_prompt: &str,
    ) -> Result<String, TranslateError> {
        let url = format!(
            "{}/v1/chat/completions",
            config.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: model.name,
            messages: [
                Message {
                    role: "system",
                    content: Cow::Borrowed(SYSTEM_PROMPT),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(user_prompt),
                },
            ],
            temperature: 0.0,
        };

        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .timeout(config.timeout)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| TranslateError::transport(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::transport(&e))?;

        info!(
            status = status.as_u16(),
            "responded in {:.2} seconds",
            started.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            return Err(TranslateError::Transport {
                status: Some(status.as_u16()),
                message: api_error_message(&body),
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(source: &str, targets: &[&str]) -> TranslationRequest {
        TranslationRequest::new(["Bonjour"], source, targets.iter().copied())
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(request("fr", &["en", "es"]).validate(), Ok(()));
    }

    #[test]
    fn test_validate_source_not_two_chars() {
        assert_eq!(
            request("french", &["en"]).validate(),
            Err(ValidationError::InvalidLocale("french".into()))
        );
        assert!(request("", &["en"]).validate().is_err());
    }

    #[test]
    fn test_validate_empty_targets() {
        assert!(matches!(
            request("fr", &[]).validate(),
            Err(ValidationError::InvalidLocaleList(_))
        ));
    }

    #[test]
    fn test_validate_bad_target_element() {
        assert!(matches!(
            request("fr", &["en", "spanish"]).validate(),
            Err(ValidationError::InvalidLocaleList(_))
        ));
    }

    #[test]
    fn test_validate_empty_sentences() {
        let req = TranslationRequest::new(Vec::<String>::new(), "fr", ["en"]);
        assert_eq!(req.validate(), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_chat_request_wire_format() {
        let body = serde_json::to_value(ChatCompletionRequest {
            model: "gpt-4o",
            messages: [
                Message {
                    role: "system",
                    content: Cow::Borrowed("sys"),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed("usr"),
                },
            ],
            temperature: 0.0,
        })
        .unwrap_or_default();

        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-4o",
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "usr" }
                ],
                "temperature": 0.0
            })
        );
    }
}
