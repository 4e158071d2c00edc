//! Scaffold forgeline files in the current directory

use std::path::Path;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;

const CONFIG_FILE: &str = "forgeline.toml";
const PLAN_FILE: &str = "plan.toml";

const SAMPLE_CONFIG: &str = r#"# Network endpoint and signing credential for forge create.
# Values support ${VAR} environment references; keep private keys out of
# this file.
rpc_url = "http://127.0.0.1:8545"
private_key = "${DEPLOYER_PRIVATE_KEY}"
"#;

const SAMPLE_PLAN: &str = r#"# Deployment plan: steps run in order, top to bottom.
# An argument of the form { ref = "<label>" } is replaced by the address
# deployed for that earlier step.

[[steps]]
label = "deployer"
artifact = "src/Deployer.sol:Deployer"
args = []

[[steps]]
label = "token"
artifact = "src/Token.sol:Token"
args = [{ ref = "deployer" }]
"#;

/// Scaffold a sample config and plan in the current directory
#[derive(Args)]
pub struct InitCommand;

impl InitCommand {
    pub async fn run(self) -> Result<()> {
        write_if_absent(Path::new(CONFIG_FILE), SAMPLE_CONFIG)?;
        write_if_absent(Path::new(PLAN_FILE), SAMPLE_PLAN)?;

        println!();
        println!("Next steps:");
        println!(
            "  1. Point {} at your network and key",
            style(CONFIG_FILE).cyan()
        );
        println!(
            "  2. Describe your deployment sequence in {}",
            style(PLAN_FILE).cyan()
        );
        println!(
            "  3. Run {} to validate, then {} to deploy",
            style("forgeline check plan.toml").cyan(),
            style("forgeline run plan.toml").cyan()
        );

        Ok(())
    }
}

fn write_if_absent(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        return Err(eyre!("{} already exists, refusing to overwrite", path.display()));
    }
    std::fs::write(path, content)?;
    println!("{} Created {}", style("✓").green(), path.display());
    Ok(())
}
