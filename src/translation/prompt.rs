/// A locale code paired with its English display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

pub const SYSTEM_PROMPT: &str = "As a sophisticated translation AI, your role is to accurately translate sentences \
     from a specified source language to multiple target languages. \
     All translations must be returned as a single, pure JSON object, adhering strictly to JSON format standards. \
     Use ISO 639-1 codes to specify languages. \
     Should the input be HTML, return the translated content preserving the original HTML formatting. \
     In cases where the sentence contains newline characters '\\n', or tab characters '\\t', \
     ensure these are retained in the translation without alteration. \
     Your output should be free from markdown (e.g., ```json) or any extraneous formatting characters, \
     focusing solely on maintaining the integrity of the JSON structure.";

/// Builds the per-call user instruction listing every sentence to translate.
pub fn build_user_prompt(sentences: &[String], source: Locale<'_>, targets: &[Locale<'_>]) -> String {
    let noun = if sentences.len() == 1 {
        "sentence"
    } else {
        "sentences"
    };
    let target_list = targets
        .iter()
        .map(|t| format!("{} (ISO 639-1 code: {})", t.name, t.code))
        .collect::<Vec<_>>()
        .join(", ");
    let numbered = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| format!("\n{}: {sentence}", index + 1))
        .collect::<String>();

    format!(
        "Translate the {count} {noun} provided below from the source language {source_name} \
         (ISO 639-1 code: {source_code}) to the target languages specified: {target_list}. \
         Before translating, silently correct any spelling or grammatical errors in each sentence. \
         If the source language is also a target language, include the corrected version of the sentence \
         for that language as well, not a plain copy of the input. \
         Format the translation output as a JSON string adhering to the following structure: \
         {{\"datas\":[{{\"locale_iso\": \"Translated Text\"}}]}}, where 'locale_iso' is replaced with \
         the appropriate ISO 639-1 code for each translation. \
         The \"datas\" array must contain exactly one object per sentence, in the order the sentences are given. \
         Ensure the output strictly follows this JSON format, without any extraneous characters or formatting. \
         Sentences to translate:{numbered}",
        count = sentences.len(),
        source_name = source.name,
        source_code = source.code,
    )
}
