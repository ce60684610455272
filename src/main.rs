use anyhow::Result;
use clap::Parser;

use polytl::cli::commands::{configure, languages, models, translate};
use polytl::cli::{Args, Command, exit_code};
use polytl::logging;
use polytl::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(args.quiet);

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Configure { show }) => {
            if show {
                configure::show_config()?;
            } else {
                configure::run_configure()?;
            }
        }
        Some(Command::Languages) => {
            languages::print_languages();
        }
        Some(Command::Models) => {
            models::print_models();
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
                model: args.model,
                endpoint: args.endpoint,
                output: args.output,
                quiet: args.quiet,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
