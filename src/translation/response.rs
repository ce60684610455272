//! Interpretation of chat completion responses into translation payloads.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::error::TranslateError;

/// One map of `locale -> translated text` per input sentence, in input order.
pub type TranslationPayload = Vec<BTreeMap<String, String>>;

/// Finish reason reported when the model completed normally.
pub const FINISH_REASON_STOP: &str = "stop";

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct Choice {
    finish_reason: Option<String>,
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// The part of a completion response the translator cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub finish_reason: String,
    pub content: Option<String>,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct TranslationEnvelope {
    datas: Vec<Map<String, Value>>,
}

/// Parses the outer completion body and checks that generation finished cleanly.
///
/// A truncated or filtered completion is rejected outright: its JSON content
/// cannot be trusted to be complete.
pub fn parse_completion(body: &str) -> Result<CompletionResult, TranslateError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| TranslateError::MalformedResponse("response has no choices".into()))?;

    let finish_reason = choice.finish_reason.unwrap_or_else(|| "null".to_string());
    if finish_reason != FINISH_REASON_STOP {
        return Err(TranslateError::IncompleteResponse { finish_reason });
    }

    Ok(CompletionResult {
        finish_reason,
        content: choice.message.content,
        prompt_tokens: response.usage.prompt_tokens,
        completion_tokens: response.usage.completion_tokens,
    })
}

impl CompletionResult {
    /// Decodes the JSON carried in the message content and keeps only the requested locales.
    pub fn into_payload(self, target_locales: &[String]) -> Result<TranslationPayload, TranslateError> {
        let content = self.content.ok_or_else(|| {
            TranslateError::MalformedPayload("completion message has no content".into())
        })?;

        let envelope: TranslationEnvelope = serde_json::from_str(&content)
            .map_err(|e| TranslateError::MalformedPayload(e.to_string()))?;

        filter_payload(envelope.datas, target_locales)
    }
}

/// Drops every locale that was not requested, then every entry left empty.
///
/// Values of unrequested keys are never inspected. A requested locale whose
/// value is not a string makes the payload malformed.
pub fn filter_payload<I>(datas: I, target_locales: &[String]) -> Result<TranslationPayload, TranslateError>
where
    I: IntoIterator<Item = Map<String, Value>>,
{
    let mut payload = Vec::new();

    for entry in datas {
        let mut kept = BTreeMap::new();
        for (locale, value) in entry {
            if !target_locales.contains(&locale) {
                continue;
            }
            match value {
                Value::String(text) => {
                    kept.insert(locale, text);
                }
                other => {
                    return Err(TranslateError::MalformedPayload(format!(
                        "translation for '{locale}' is not a string: {other}"
                    )));
                }
            }
        }
        if !kept.is_empty() {
            payload.push(kept);
        }
    }

    Ok(payload)
}

/// Extracts `error.message` from an API error body, falling back to the raw body.
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body).map_or_else(
        |_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "(empty response body)".to_string()
            } else {
                trimmed.to_string()
            }
        },
        |parsed| parsed.error.message,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completion_body(finish_reason: &str, content: &str) -> String {
        json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": finish_reason
            }],
            "usage": { "prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160 }
        })
        .to_string()
    }

    fn locales(codes: &[&str]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_completion_stop() {
        let result = parse_completion(&completion_body("stop", r#"{"datas":[]}"#)).unwrap();
        assert_eq!(result.finish_reason, "stop");
        assert_eq!(result.prompt_tokens, 120);
        assert_eq!(result.completion_tokens, 40);
        assert_eq!(result.content.as_deref(), Some(r#"{"datas":[]}"#));
    }

    #[test]
    fn test_parse_completion_truncated() {
        let err = parse_completion(&completion_body("length", r#"{"datas":[{"en":"Hel"#)).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::IncompleteResponse { ref finish_reason } if finish_reason == "length"
        ));
    }

    #[test]
    fn test_parse_completion_null_finish_reason() {
        let body = json!({
            "choices": [{ "message": { "content": "{}" }, "finish_reason": null }],
            "usage": { "prompt_tokens": 1, "completion_tokens": 1 }
        })
        .to_string();
        assert!(matches!(
            parse_completion(&body),
            Err(TranslateError::IncompleteResponse { .. })
        ));
    }

    #[test]
    fn test_parse_completion_not_json() {
        assert!(matches!(
            parse_completion("<html>Bad Gateway</html>"),
            Err(TranslateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_parse_completion_no_choices() {
        let body = json!({ "choices": [], "usage": { "prompt_tokens": 1, "completion_tokens": 0 } })
            .to_string();
        let err = parse_completion(&body).unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn test_into_payload_filters_unrequested_locales() {
        let content = r#"{"datas":[{"en":"Hello","es":"Hola","xx":"ZZ"},{"en":"World","fr":"Monde"}]}"#;
        let payload = parse_completion(&completion_body("stop", content))
            .unwrap()
            .into_payload(&locales(&["en", "es", "fr"]))
            .unwrap();

        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].get("en").map(String::as_str), Some("Hello"));
        assert_eq!(payload[0].get("es").map(String::as_str), Some("Hola"));
        assert!(!payload[0].contains_key("xx"));
        assert_eq!(payload[1].len(), 2);
        assert_eq!(payload[1].get("fr").map(String::as_str), Some("Monde"));
    }

    #[test]
    fn test_into_payload_malformed_content() {
        let result = parse_completion(&completion_body("stop", "```json\n{\"datas\": [}\n```"))
            .unwrap()
            .into_payload(&locales(&["en"]));
        assert!(matches!(result, Err(TranslateError::MalformedPayload(_))));
    }

    #[test]
    fn test_into_payload_missing_datas() {
        let result = parse_completion(&completion_body("stop", r#"{"translations":[]}"#))
            .unwrap()
            .into_payload(&locales(&["en"]));
        assert!(matches!(result, Err(TranslateError::MalformedPayload(_))));
    }

    #[test]
    fn test_into_payload_missing_content() {
        let result = CompletionResult {
            finish_reason: "stop".into(),
            content: None,
            prompt_tokens: 0,
            completion_tokens: 0,
        }
        .into_payload(&locales(&["en"]));
        assert!(matches!(result, Err(TranslateError::MalformedPayload(_))));
    }

    fn entry(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_filter_payload_drops_emptied_entries() {
        let datas = vec![entry(json!({ "de": "Hallo" })), entry(json!({ "en": "Hello" }))];
        let payload = filter_payload(datas, &locales(&["en"])).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].get("en").map(String::as_str), Some("Hello"));
    }

    #[test]
    fn test_filter_payload_all_empty_is_ok() {
        let datas = vec![entry(json!({ "de": "Hallo" }))];
        assert!(filter_payload(datas, &locales(&["en"])).unwrap().is_empty());
    }

    #[test]
    fn test_filter_payload_ignores_values_of_unrequested_keys() {
        let datas = vec![
            entry(json!({ "en": "Hello", "notes": { "tone": "formal" } })),
            entry(json!({ "en": "World", "xx": null, "count": 2 })),
        ];
        let payload = filter_payload(datas, &locales(&["en"])).unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].len(), 1);
        assert_eq!(payload[1].get("en").map(String::as_str), Some("World"));
    }

    #[test]
    fn test_filter_payload_requested_value_not_a_string() {
        let datas = vec![entry(json!({ "en": { "text": "Hello" } }))];
        let err = filter_payload(datas, &locales(&["en"])).unwrap_err();
        assert!(matches!(err, TranslateError::MalformedPayload(ref msg) if msg.contains("'en'")));
    }

    #[test]
    fn test_into_payload_entry_not_an_object() {
        let result = parse_completion(&completion_body("stop", r#"{"datas":["Hello"]}"#))
            .unwrap()
            .into_payload(&locales(&["en"]));
        assert!(matches!(result, Err(TranslateError::MalformedPayload(_))));
    }

    #[test]
    fn test_api_error_message_from_payload() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(api_error_message(body), "Incorrect API key provided");
    }

    #[test]
    fn test_api_error_message_fallbacks() {
        assert_eq!(api_error_message("Service Unavailable\n"), "Service Unavailable");
        assert_eq!(api_error_message(""), "(empty response body)");
    }
}
