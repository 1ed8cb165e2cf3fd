use serde::{Deserialize, Serialize};

/// A named rule, issued by a source authority, restricting which consumers
/// may use a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    /// Identifier of the policy (e.g., "verified-partner")
    pub id: String,

    /// Authority that issued the policy, typically a URL
    pub source: String,
}

impl AccessPolicy {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        AccessPolicy {
            id: id.into(),
            source: source.into(),
        }
    }
}
