//! Validate a plan without deploying

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;
use forgeline_core::{Plan, StepArg};

/// Validate a plan and show its dependency bindings without deploying
#[derive(Args)]
pub struct CheckCommand {
    /// Path to the plan file
    plan: PathBuf,
}

impl CheckCommand {
    pub async fn run(self) -> Result<()> {
        let content = std::fs::read_to_string(&self.plan)
            .map_err(|_| eyre!("Could not read plan file {}", self.plan.display()))?;
        let plan = Plan::from_toml(&content)?;

        println!(
            "{} Plan is valid: {} step(s)",
            style("✓").green(),
            plan.steps.len()
        );
        println!();

        for (index, step) in plan.steps.iter().enumerate() {
            println!(
                "{}. {} {}",
                index + 1,
                style(&step.label).cyan().bold(),
                step.artifact
            );
            for arg in &step.args {
                match arg {
                    StepArg::Literal(value) => println!("     arg: {}", value),
                    StepArg::Ref(arg_ref) => println!(
                        "     arg: address of {}",
                        style(&arg_ref.label).cyan()
                    ),
                }
            }
        }

        Ok(())
    }
}
