//! `knock-knock` command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! knock-knock --settings config/settings.json
//! knock-knock --service gpt4 --temperature 0.5
//! ```

mod cli;

use clap::Parser;
use cli::Cli;
use jester_model_providers::openai::OpenAiProvider;
use jester_models::llm::LlmProvider;
use knock_knock::ShowManager;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli.tracing().init();

    let options = cli.run_options();
    let themes = ShowManager::new();
    let mut stdout = std::io::stdout().lock();

    let result = knock_knock::run(
        &options,
        &themes,
        |credentials| -> Arc<dyn LlmProvider> { Arc::new(OpenAiProvider::new(credentials.clone())) },
        &mut stdout,
    )
    .await;

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, external = err.is_external(), "run failed");
            let _ = writeln!(std::io::stderr(), "Error: {err}");
            ExitCode::FAILURE
        }
    }
}
