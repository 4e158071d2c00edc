//! CLI commands for forgeline

use clap::Subcommand;
use color_eyre::eyre::Result;

pub mod check;
pub mod init;
pub mod run;

/// All available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Execute a deployment plan with forge
    Run(run::RunCommand),

    /// Validate a plan and show its dependency bindings without deploying
    Check(check::CheckCommand),

    /// Scaffold a sample config and plan in the current directory
    Init(init::InitCommand),
}

impl Command {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Command::Run(cmd) => cmd.run().await,
            Command::Check(cmd) => cmd.run().await,
            Command::Init(cmd) => cmd.run().await,
        }
    }
}
