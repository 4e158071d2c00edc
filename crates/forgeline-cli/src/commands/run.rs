//! Execute a deployment plan

use std::path::{Path, PathBuf};

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;
use dialoguer::Confirm;
use forgeline_core::{DeployTarget, Deployment, Plan, Sequencer};

use crate::config::Config;
use crate::forge::ForgeRunner;
use crate::rpc;

/// Execute a deployment plan with forge
#[derive(Args)]
pub struct RunCommand {
    /// Path to the plan file
    plan: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,

    /// Where to write the label -> address record after a successful run
    #[arg(long, default_value = "deployments.json")]
    output: PathBuf,
}

impl RunCommand {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        if !config.key_from_env {
            println!(
                "{} private_key is written literally in forgeline.toml; prefer a ${{VAR}} environment reference",
                style("!").yellow()
            );
        }

        let content = std::fs::read_to_string(&self.plan)
            .map_err(|_| eyre!("Could not read plan file {}", self.plan.display()))?;
        let plan = Plan::from_toml(&content)?;

        println!(
            "{} Connecting to {}...",
            style("→").blue(),
            style(&config.rpc_url).cyan()
        );
        let chain_id = rpc::preflight_chain_id(&config.rpc_url).await?;

        println!(
            "{} {} step(s) to deploy (chain ID: {})",
            style("→").blue(),
            plan.steps.len(),
            chain_id
        );
        for step in &plan.steps {
            println!("   {} {}", style(&step.label).cyan(), step.artifact);
        }

        if !self.yes {
            println!();
            let confirmed = Confirm::new()
                .with_prompt("Deploy these contracts? Re-running a plan creates new instances")
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{} Cancelled", style("*").dim());
                return Ok(());
            }
        }

        let target = DeployTarget {
            rpc_url: config.rpc_url,
            private_key: config.private_key,
        };
        let mut sequencer = Sequencer::new(target, ForgeRunner);

        let mut deployed = Vec::with_capacity(plan.steps.len());
        for step in &plan.steps {
            println!(
                "{} Deploying {}...",
                style("→").blue(),
                style(step.artifact.unit_name()).cyan()
            );

            let deployment = sequencer.run_step(step)?;
            println!(
                "{} {} deployed at {}",
                style("✓").green(),
                style(&deployment.label).cyan(),
                style(&deployment.address).yellow()
            );
            deployed.push(deployment);
        }

        write_record(&self.output, &deployed)?;

        println!();
        println!(
            "{} {} contract(s) deployed, addresses written to {}",
            style("✓").green().bold(),
            deployed.len(),
            self.output.display()
        );

        Ok(())
    }
}

/// Write the label -> address record. Only called after a fully successful
/// run; a failed plan leaves no partial record behind.
fn write_record(path: &Path, deployed: &[Deployment]) -> Result<()> {
    let record: serde_json::Map<String, serde_json::Value> = deployed
        .iter()
        .map(|d| (d.label.clone(), serde_json::Value::String(d.address.clone())))
        .collect();

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(record))?;
    std::fs::write(path, json)?;
    Ok(())
}
