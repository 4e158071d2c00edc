use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a compiled contract unit, in forge's `<path>:<unit-name>` form
/// (e.g. `src/Token.sol:Token`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The contract unit name after the last `:`, or the whole identifier
    /// when no unit name is given.
    pub fn unit_name(&self) -> &str {
        self.0.rsplit(':').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ArtifactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ArtifactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_name() {
        let id = ArtifactId::from("src/contracts/core/Vault.sol:Vault");
        assert_eq!(id.unit_name(), "Vault");
    }

    #[test]
    fn test_unit_name_without_separator() {
        let id = ArtifactId::from("Vault");
        assert_eq!(id.unit_name(), "Vault");
    }

    #[test]
    fn test_display_is_verbatim() {
        let id = ArtifactId::from("src/Token.sol:Token");
        assert_eq!(id.to_string(), "src/Token.sol:Token");
    }
}
