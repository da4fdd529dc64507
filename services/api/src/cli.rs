use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lending_ai::error::AppError;

use crate::infra::run_score;
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Decision Service",
    about = "Run the loan decision service or score application exports from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a CSV export of loan applications and print each outcome
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to the CSV export of application forms
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Override the configured model column file
    #[arg(long)]
    pub(crate) columns: Option<PathBuf>,
    /// Override the configured model artifact file
    #[arg(long)]
    pub(crate) artifact: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
    }
}
