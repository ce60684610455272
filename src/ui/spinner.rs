use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::translation::TranslationRequest;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";

/// Progress indicator drawn on stderr while a translation request is in flight.
///
/// Cleared from the terminal when dropped.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Starts a spinner describing `request`. Draws nothing when `quiet` is set.
    pub fn for_request(request: &TranslationRequest, quiet: bool) -> Self {
        if quiet {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new_spinner()
            .with_style(ProgressStyle::default_spinner().tick_chars(TICK_CHARS))
            .with_message(request_message(request));
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

fn request_message(request: &TranslationRequest) -> String {
    let count = request.sentences.len();
    let noun = if count == 1 { "sentence" } else { "sentences" };
    format!(
        "Translating {count} {noun} from {} into {}...",
        request.source_locale,
        request.target_locales.join(", ")
    )
}
