use crate::report::{run_assess, run_compare, run_import, AssessArgs, CompareArgs, ImportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ev_policy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EV Policy Decision Engine",
    about = "Assess EV rollout scenarios and serve the policy engine over HTTP",
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
    /// Evaluate one scenario and print its report
    Assess(AssessArgs),
    /// Compare a scenario with the national baseline or a second scenario
    Compare(CompareArgs),
    /// Evaluate every scenario row of a CSV sheet
    Import(ImportArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Compare(args) => run_compare(args),
        Command::Import(args) => run_import(args),
    }
}
