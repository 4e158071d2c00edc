//! Dependency-ordered plan execution
//!
//! Strictly sequential: each invocation runs to completion before the next
//! step's command is built, because later constructor arguments may depend
//! on earlier results. Every failure is fatal to the whole plan. There are
//! no retries: deployments are not idempotent, so re-running a step without
//! operator confirmation would create new contract instances.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::invocation::Invocation;
use crate::output::extract_address;
use crate::plan::{Plan, Step, StepArg};
use crate::types::ArtifactId;

/// Captured outcome of one external tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub success: bool,
    /// Human-readable exit status, e.g. `exit status: 1`.
    pub status: String,
    pub stdout: String,
    pub stderr: String,
}

/// Executes a built invocation and captures its output.
///
/// The real implementation spawns the `forge` binary and blocks until it
/// exits; tests substitute a scripted fake.
pub trait ToolRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<ToolOutput>;
}

/// Network endpoint and signing credential bound into every invocation.
///
/// Loaded from configuration at construction time; never a compile-time
/// constant.
#[derive(Debug, Clone)]
pub struct DeployTarget {
    pub rpc_url: String,
    pub private_key: String,
}

/// Result of one executed plan step.
#[derive(Debug, Clone)]
pub struct Deployment {
    pub label: String,
    pub artifact: ArtifactId,
    pub address: String,
}

/// Runs plan steps in order, threading each extracted address into later
/// steps' constructor arguments.
pub struct Sequencer<R> {
    target: DeployTarget,
    runner: R,
    addresses: HashMap<String, String>,
}

impl<R: ToolRunner> Sequencer<R> {
    pub fn new(target: DeployTarget, runner: R) -> Self {
        Self {
            target,
            runner,
            addresses: HashMap::new(),
        }
    }

    /// Address produced for a label, if that step has already run.
    pub fn address(&self, label: &str) -> Option<&str> {
        self.addresses.get(label).map(String::as_str)
    }

    /// Build, execute, and parse a single step. The invocation is only
    /// constructed here, once every address it depends on is available.
    pub fn run_step(&mut self, step: &Step) -> Result<Deployment> {
        let args = self.resolve_args(step)?;
        let invocation = Invocation::forge_create(
            &self.target.rpc_url,
            &self.target.private_key,
            &step.artifact,
            &args,
        );

        let output = self.runner.run(&invocation)?;
        if !output.success {
            return Err(Error::ToolFailed {
                status: output.status,
                stderr: output.stderr,
            });
        }

        let address = extract_address(&output.stdout)?;
        self.addresses.insert(step.label.clone(), address.clone());

        Ok(Deployment {
            label: step.label.clone(),
            artifact: step.artifact.clone(),
            address,
        })
    }

    /// Run every step in order, aborting on the first failure.
    pub fn execute(&mut self, plan: &Plan) -> Result<Vec<Deployment>> {
        plan.validate()?;
        plan.steps.iter().map(|step| self.run_step(step)).collect()
    }

    fn resolve_args(&self, step: &Step) -> Result<Vec<String>> {
        step.args
            .iter()
            .map(|arg| match arg {
                StepArg::Literal(value) => Ok(value.clone()),
                StepArg::Ref(arg_ref) => self
                    .addresses
                    .get(&arg_ref.label)
                    .cloned()
                    .ok_or_else(|| Error::MissingDependency {
                        step: step.label.clone(),
                        dependency: arg_ref.label.clone(),
                    }),
            })
            .collect()
    }
}
