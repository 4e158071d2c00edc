use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("forge failed ({status}):\n{stderr}")]
    ToolFailed { status: String, stderr: String },

    #[error("could not run forge: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected at least two 0x-prefixed tokens in forge output, found {found}")]
    Parse { found: usize },

    #[error("step '{step}' references '{dependency}', which no earlier step produces")]
    MissingDependency { step: String, dependency: String },

    #[error("duplicate step label: {0}")]
    DuplicateLabel(String),

    #[error("step '{0}' has an empty artifact identifier")]
    EmptyArtifact(String),

    #[error("deployment plan contains no steps")]
    EmptyPlan,

    #[error("invalid plan file: {0}")]
    InvalidPlan(#[from] toml::de::Error),
}
