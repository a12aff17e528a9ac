use crate::demo::{run_dashboard, run_demo, run_jobs, DemoArgs, JobsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hiring_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hiring Desk",
    about = "Run the hiring desk job-posting service or walk through it from the command line",
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
    /// Walk a job posting through the wizard and print each screen
    Demo(DemoArgs),
    /// Print the analytics dashboard read model
    Dashboard,
    /// Print the jobs list for one tab
    Jobs(JobsArgs),
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
        Command::Demo(args) => run_demo(args),
        Command::Dashboard => run_dashboard(),
        Command::Jobs(args) => run_jobs(args),
    }
}
