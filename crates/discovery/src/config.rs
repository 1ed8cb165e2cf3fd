use serde::{Deserialize, Serialize};

/// How proposals that declare no access-policy list at all are treated when
/// a query enables the access-policy predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrestrictedProposalMode {
    /// A proposal without a policy list never satisfies an access-policy
    /// filter. This is the historically observed behavior and the default.
    Exclude,

    /// A proposal without a policy list is open to everyone and satisfies
    /// any access-policy filter.
    Include,
}

impl Default for UnrestrictedProposalMode {
    fn default() -> Self {
        UnrestrictedProposalMode::Exclude
    }
}

/// Configuration for the proposal finder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Treatment of proposals with no access-policy list
    #[serde(default)]
    pub unrestricted_proposals: UnrestrictedProposalMode,
}
