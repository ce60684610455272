use crate::translation::{SUPPORTED_LANGUAGES, language_name};
use crate::ui::Style;

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for (code, _) in SUPPORTED_LANGUAGES {
        let name = language_name(code).unwrap_or_default();
        println!("  {}  {}", Style::code(code), Style::secondary(name));
    }
}
