//! Real forge process execution

use std::process::Command;

use forgeline_core::{invocation, Invocation, Result, ToolOutput, ToolRunner};

/// Runs invocations by spawning the `forge` binary and blocking until it
/// exits. Deployments must complete in order before the next step's command
/// can be built, so there is no parallelism, cancellation, or timeout here.
pub struct ForgeRunner;

impl ToolRunner for ForgeRunner {
    fn run(&mut self, inv: &Invocation) -> Result<ToolOutput> {
        let output = Command::new(invocation::PROGRAM).args(inv.args()).output()?;

        Ok(ToolOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
