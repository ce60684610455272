use crate::translation::MODEL_CATALOG;
use crate::ui::Style;

/// Prints the model catalog with per-million-token prices.
///
/// Unknown model names still work at translation time: the request is sent
/// with the default model instead, and priced as such.
pub fn print_models() {
    println!("{}", Style::header("Known models (USD per 1M tokens)"));
    for model in MODEL_CATALOG {
        let marker = if model.is_default() {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {}  {}{}",
            Style::value(format!("{:20}", model.name)),
            Style::secondary(format!(
                "input {:>6.2}  output {:>6.2}",
                model.input_price_per_million, model.output_price_per_million
            )),
            marker
        );
    }
}
