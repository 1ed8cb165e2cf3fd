use std::sync::Arc;

use log::debug;
use market_types::{AccessPolicyFilter, LocationFilter, ProposalFilter, ProposalId, ServiceProposal};

use crate::config::{DiscoveryConfig, UnrestrictedProposalMode};
use crate::policy_match;
use crate::storage::ProposalStorage;

/// Finds proposals in the local cache, by exact identity or by filter.
///
/// The finder is stateless over the storage: every query clones one snapshot
/// out of the cache and evaluates against it, so concurrent queries need no
/// coordination and never observe a half-refreshed cache.
pub struct ProposalFinder {
    storage: Arc<ProposalStorage>,
    config: DiscoveryConfig,
}

impl ProposalFinder {
    /// Create a finder with the default configuration.
    pub fn new(storage: Arc<ProposalStorage>) -> Self {
        Self::with_config(storage, DiscoveryConfig::default())
    }

    /// Create a finder with an explicit configuration.
    pub fn with_config(storage: Arc<ProposalStorage>, config: DiscoveryConfig) -> Self {
        Self { storage, config }
    }

    /// Fetch a proposal by exact identity.
    ///
    /// Returns `None` when no such proposal is known; absence is a normal
    /// outcome, not an error. If the snapshot ever held duplicate identities
    /// the first encountered entry wins.
    pub async fn get_proposal(&self, id: &ProposalId) -> Option<ServiceProposal> {
        let snapshot = self.storage.proposals().await;
        snapshot.into_iter().find(|proposal| proposal.unique_id() == *id)
    }

    /// Fetch all proposals satisfying every enabled axis of the filter.
    ///
    /// Always succeeds; an empty result is a normal outcome. Order of the
    /// returned proposals is unspecified.
    pub async fn find_proposals(&self, filter: &ProposalFilter) -> Vec<ServiceProposal> {
        let snapshot = self.storage.proposals().await;
        let total = snapshot.len();

        let matched: Vec<ServiceProposal> = snapshot
            .into_iter()
            .filter(|proposal| {
                matches_filter(proposal, filter, self.config.unrestricted_proposals)
            })
            .collect();

        debug!("Matched {} of {} known proposals", matched.len(), total);
        matched
    }
}

/// AND across the enabled filter axes, short-circuiting on the first miss.
fn matches_filter(
    proposal: &ServiceProposal,
    filter: &ProposalFilter,
    mode: UnrestrictedProposalMode,
) -> bool {
    if let Some(provider_id) = &filter.provider_id {
        if *provider_id != proposal.provider_id {
            return false;
        }
    }
    if let Some(service_type) = &filter.service_type {
        if *service_type != proposal.service_type {
            return false;
        }
    }
    if let Some(location) = &filter.location {
        if !matches_location(proposal, location) {
            return false;
        }
    }
    if let Some(access_policy) = &filter.access_policy {
        // A filter with both fields unset constrains nothing; the axis
        // behaves as if it was disabled.
        if access_policy.is_constrained()
            && !matches_access_policy(proposal, access_policy, mode)
        {
            return false;
        }
    }

    true
}

/// Only the node type is compared. An enabled filter without a node type
/// passes every proposal.
fn matches_location(proposal: &ServiceProposal, filter: &LocationFilter) -> bool {
    if let Some(node_type) = &filter.node_type {
        let location = &proposal.service_definition.location;
        if location.node_type.as_deref() != Some(node_type.as_str()) {
            return false;
        }
    }

    true
}

fn matches_access_policy(
    proposal: &ServiceProposal,
    filter: &AccessPolicyFilter,
    mode: UnrestrictedProposalMode,
) -> bool {
    match &proposal.access_policies {
        // Policy-filtered queries have always excluded proposals that carry
        // no restriction list; Exclude keeps that contract, Include treats
        // them as open to every consumer.
        None => mode == UnrestrictedProposalMode::Include,
        Some(policies) => policy_match::evaluate(filter, policies).is_matched(),
    }
}
