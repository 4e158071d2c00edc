//! `forge create` invocation construction
//!
//! Builds the argument list for a single deployment call. Arguments are
//! handed to the process spawner as a structured list, never joined into a
//! shell string, so no quoting or escaping is applied.

use std::fmt;

use crate::types::ArtifactId;

/// Name of the external deployment tool binary.
pub const PROGRAM: &str = "forge";

/// A fully-bound `forge create` invocation.
///
/// Immutable once built. Execution is delegated to a
/// [`ToolRunner`](crate::sequencer::ToolRunner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
    key_index: usize,
}

impl Invocation {
    /// Bind an artifact, its constructor arguments, and the fixed
    /// network/credential parameters into a `forge create` call.
    ///
    /// The artifact identifier must be non-empty and each constructor
    /// argument must already be rendered to the textual encoding forge
    /// expects; both are passed through verbatim. An empty argument list
    /// omits the `--constructor-args` clause entirely.
    pub fn forge_create(
        rpc_url: &str,
        private_key: &str,
        artifact: &ArtifactId,
        constructor_args: &[String],
    ) -> Self {
        let mut args = vec!["create".to_string(), "--rpc-url".to_string(), rpc_url.to_string()];

        if !constructor_args.is_empty() {
            args.push("--constructor-args".to_string());
            args.extend(constructor_args.iter().cloned());
        }

        args.push("--private-key".to_string());
        let key_index = args.len();
        args.push(private_key.to_string());
        args.push(artifact.as_str().to_string());

        Self { args, key_index }
    }

    /// Arguments to pass to the `forge` binary, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    /// Human-readable form with the private-key value redacted. The real key
    /// only ever reaches the spawned process's argument list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PROGRAM)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i == self.key_index {
                write!(f, " <private-key>")?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
