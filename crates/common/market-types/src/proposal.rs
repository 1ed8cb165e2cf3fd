use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::access_policy::AccessPolicy;

/// Identity of a provider publishing proposals to the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    pub fn new(id: impl Into<String>) -> Self {
        ProviderId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        ProviderId(s.to_string())
    }
}

/// Unique identity of a proposal within a snapshot.
///
/// A provider advertises at most one proposal per service type, so the pair
/// of the two is the proposal's identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalId {
    /// Provider that published the proposal
    pub provider_id: ProviderId,

    /// Type of the advertised service (e.g., "wireguard", "openvpn")
    pub service_type: String,
}

impl fmt::Display for ProposalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider_id, self.service_type)
    }
}

/// Geographic and network placement of the node backing a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Continent code (e.g., "EU")
    pub continent: Option<String>,

    /// ISO country code (e.g., "LT")
    pub country: Option<String>,

    /// City name
    pub city: Option<String>,

    /// Kind of node serving the proposal (e.g., "residential", "datacenter")
    pub node_type: Option<String>,
}

/// Definition of the advertised service itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Where the service is served from
    pub location: Location,

    /// Service-type specific parameters as free-form JSON
    #[serde(default)]
    pub options: serde_json::Value,
}

/// An advertisement of a service offered by a provider.
///
/// Proposals are immutable once published; the local cache replaces whole
/// entries rather than mutating them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProposal {
    /// Identity of the publishing provider
    pub provider_id: ProviderId,

    /// Type of the advertised service
    pub service_type: String,

    /// What is being offered and from where
    pub service_definition: ServiceDefinition,

    /// Policies restricting which consumers may use the proposal.
    /// `None` means the proposal declares no restriction list at all,
    /// which is distinct from an empty list.
    pub access_policies: Option<Vec<AccessPolicy>>,

    /// When the proposal was registered with the local cache
    pub registered_at: DateTime<Utc>,
}

impl ServiceProposal {
    /// Identity of this proposal, unique within a snapshot.
    pub fn unique_id(&self) -> ProposalId {
        ProposalId {
            provider_id: self.provider_id.clone(),
            service_type: self.service_type.clone(),
        }
    }
}
