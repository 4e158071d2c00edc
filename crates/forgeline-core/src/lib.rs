pub mod error;
pub mod invocation;
pub mod output;
pub mod plan;
pub mod sequencer;
pub mod types;

pub use error::{Error, Result};
pub use invocation::Invocation;
pub use output::extract_address;
pub use plan::{ArgRef, Plan, Step, StepArg};
pub use sequencer::{DeployTarget, Deployment, Sequencer, ToolOutput, ToolRunner};
pub use types::ArtifactId;
