use serde::{Deserialize, Serialize};

use crate::proposal::ProviderId;

/// Query descriptor for filtered proposal search.
///
/// Every field is optional; `None` disables the corresponding predicate so
/// that axis matches everything. This keeps "caller didn't specify" distinct
/// from "caller specified an empty value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposalFilter {
    /// Only proposals published by this provider
    pub provider_id: Option<ProviderId>,

    /// Only proposals advertising this service type
    pub service_type: Option<String>,

    /// Only proposals served from a matching location
    pub location: Option<LocationFilter>,

    /// Only proposals carrying a matching access policy
    pub access_policy: Option<AccessPolicyFilter>,
}

/// Location criteria for proposal search.
///
/// Only the node type is compared. A `LocationFilter` with `node_type: None`
/// is enabled but trivially satisfied: it passes every proposal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    /// Required node type of the serving node
    pub node_type: Option<String>,
}

/// Access-policy criteria for proposal search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicyFilter {
    /// Required policy identifier
    pub id: Option<String>,

    /// Required policy source authority
    pub source: Option<String>,
}

impl AccessPolicyFilter {
    /// Whether the filter actually constrains anything. A filter with both
    /// fields unset behaves as if the access-policy predicate was disabled.
    pub fn is_constrained(&self) -> bool {
        self.id.is_some() || self.source.is_some()
    }
}
