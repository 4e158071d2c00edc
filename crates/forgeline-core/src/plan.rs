//! Deployment plan model
//!
//! A plan is an ordered list of steps. Later steps may use the address
//! deployed by an earlier step as a constructor argument, forming a linear
//! dependency chain. Steps are data, not code, so a deployment sequence can
//! be edited, reordered, or partially disabled without touching the tool.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::ArtifactId;

/// One constructor argument: either a literal value passed to forge
/// verbatim, or a reference to the address deployed by an earlier step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StepArg {
    Ref(ArgRef),
    Literal(String),
}

/// Reference to an earlier step's deployed address, written in plan files as
/// `{ ref = "<label>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArgRef {
    #[serde(rename = "ref")]
    pub label: String,
}

/// A single deployment in the plan.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Name under which this step's address is recorded and referenced.
    pub label: String,
    pub artifact: ArtifactId,
    #[serde(default)]
    pub args: Vec<StepArg>,
}

/// An ordered deployment sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    pub steps: Vec<Step>,
}

impl Plan {
    /// Parse and validate a plan from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let plan: Plan = toml::from_str(content)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Construction-time checks, run before any process is spawned: the plan
    /// is non-empty, labels are unique, artifacts are non-empty, and every
    /// reference resolves to an earlier step. Forward and self references
    /// are rejected because a step must not be issued until the results it
    /// depends on exist.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(Error::EmptyPlan);
        }

        let mut produced: HashSet<&str> = HashSet::new();
        for step in &self.steps {
            if step.artifact.as_str().is_empty() {
                return Err(Error::EmptyArtifact(step.label.clone()));
            }

            for arg in &step.args {
                if let StepArg::Ref(arg_ref) = arg {
                    if !produced.contains(arg_ref.label.as_str()) {
                        return Err(Error::MissingDependency {
                            step: step.label.clone(),
                            dependency: arg_ref.label.clone(),
                        });
                    }
                }
            }

            if !produced.insert(step.label.as_str()) {
                return Err(Error::DuplicateLabel(step.label.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_with_both_arg_forms() {
        let toml_content = r#"
[[steps]]
label = "deployer"
artifact = "src/contracts/setup/Deployer.sol:Deployer"
args = []

[[steps]]
label = "deposit"
artifact = "src/contracts/core/Deposit.sol:Deposit"
args = [
    "0x9c4bad94539254189bb933df374b1c2eb9096913a1f6a3326b84133d2b9b9bad",
    { ref = "deployer" },
]
"#;

        let plan = Plan::from_toml(toml_content).unwrap();

        assert_eq!(plan.steps.len(), 2);
        assert_eq!(plan.steps[0].label, "deployer");
        assert!(plan.steps[0].args.is_empty());

        let deposit = &plan.steps[1];
        assert_eq!(deposit.args.len(), 2);
        assert_eq!(
            deposit.args[0],
            StepArg::Literal(
                "0x9c4bad94539254189bb933df374b1c2eb9096913a1f6a3326b84133d2b9b9bad".to_string()
            )
        );
        assert_eq!(
            deposit.args[1],
            StepArg::Ref(ArgRef {
                label: "deployer".to_string()
            })
        );
    }

    #[test]
    fn test_args_default_to_empty() {
        let toml_content = r#"
[[steps]]
label = "deployer"
artifact = "src/Deployer.sol:Deployer"
"#;

        let plan = Plan::from_toml(toml_content).unwrap();
        assert!(plan.steps[0].args.is_empty());
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let toml_content = r#"
[[steps]]
label = "token"
artifact = "src/Token.sol:Token"
args = [{ ref = "deployer" }]
"#;

        match Plan::from_toml(toml_content) {
            Err(Error::MissingDependency { step, dependency }) => {
                assert_eq!(step, "token");
                assert_eq!(dependency, "deployer");
            }
            other => panic!("expected missing dependency, got {:?}", other),
        }
    }

    #[test]
    fn test_forward_reference_rejected() {
        let toml_content = r#"
[[steps]]
label = "token"
artifact = "src/Token.sol:Token"
args = [{ ref = "deployer" }]

[[steps]]
label = "deployer"
artifact = "src/Deployer.sol:Deployer"
"#;

        assert!(matches!(
            Plan::from_toml(toml_content),
            Err(Error::MissingDependency { .. })
        ));
    }

    #[test]
    fn test_self_reference_rejected() {
        let toml_content = r#"
[[steps]]
label = "token"
artifact = "src/Token.sol:Token"
args = [{ ref = "token" }]
"#;

        assert!(matches!(
            Plan::from_toml(toml_content),
            Err(Error::MissingDependency { .. })
        ));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let toml_content = r#"
[[steps]]
label = "token"
artifact = "src/Token.sol:Token"

[[steps]]
label = "token"
artifact = "src/OtherToken.sol:OtherToken"
"#;

        match Plan::from_toml(toml_content) {
            Err(Error::DuplicateLabel(label)) => assert_eq!(label, "token"),
            other => panic!("expected duplicate label, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_artifact_rejected() {
        let toml_content = r#"
[[steps]]
label = "token"
artifact = ""
"#;

        match Plan::from_toml(toml_content) {
            Err(Error::EmptyArtifact(label)) => assert_eq!(label, "token"),
            other => panic!("expected empty artifact, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_plan_rejected() {
        assert!(matches!(
            Plan::from_toml("steps = []"),
            Err(Error::EmptyPlan)
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            Plan::from_toml("steps = 3"),
            Err(Error::InvalidPlan(_))
        ));
    }
}
