use crate::demo::{run_batch, run_demo, run_evaluate, BatchArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fundready::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Funding Readiness Scorer",
    about = "Score startup funding readiness from diligence sheets, via HTTP or the command line",
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
    /// Evaluate diligence sheets from the command line
    Score {
        #[command(subcommand)]
        command: ScoreCommand,
    },
    /// Score a built-in sample sheet and print the full report
    Demo,
}

#[derive(Subcommand, Debug)]
enum ScoreCommand {
    /// Evaluate a single JSON score sheet and print its report
    Evaluate(EvaluateArgs),
    /// Evaluate every row of a CSV sheet export and print a results table
    Batch(BatchArgs),
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score {
            command: ScoreCommand::Evaluate(args),
        } => run_evaluate(args),
        Command::Score {
            command: ScoreCommand::Batch(args),
        } => run_batch(args),
        Command::Demo => run_demo(),
    }
}
