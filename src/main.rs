use std::path::PathBuf;

use clap::Parser;
use complaint_eval::report::{render_header, render_outcome, render_report};
use complaint_eval::{
    builtin_samples, load_samples, logging, run_evaluation, ConfigError, Credentials,
    OpenAIModel, PromptTemplate, OPENAI_API_KEY_NAME,
};

/// Scores a prompt template on labeled 311 complaints.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Prompt template file; `{complaint}` is replaced with each complaint.
    #[arg(long, value_name = "FILE")]
    prompt: Option<PathBuf>,

    /// Samples file, one `<department> <complaint>` record per line.
    #[arg(long, value_name = "FILE")]
    samples: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(ConfigError::MissingCredential(_)) => {
            eprintln!("ERROR: Please set {} environment variable", OPENAI_API_KEY_NAME);
            eprintln!("Add it to your shell environment or to a .env file");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, credentials).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, credentials: Credentials) -> complaint_eval::Result<()> {
    let template = match &cli.prompt {
        Some(path) => PromptTemplate::from_file(path)?,
        None => PromptTemplate::default(),
    };
    let samples = match &cli.samples {
        Some(path) => load_samples(path)?,
        None => builtin_samples(),
    };
    let model = OpenAIModel::new(credentials, template)?;

    println!("{}", render_header(samples.len()));
    let total = samples.len();
    let evaluation = run_evaluation(&model, &samples, |outcome| {
        println!("{}", render_outcome(outcome, total))
    })
    .await?;
    println!("{}", render_report(&evaluation.report));
    Ok(())
}
