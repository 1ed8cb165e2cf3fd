use log::debug;
use market_types::{ProposalId, ServiceProposal};
use tokio::sync::RwLock;

/// Local cache of currently known service proposals.
///
/// The write side is driven by a refresh subsystem pulling proposals from
/// the network; the finder only ever reads. Readers always receive a cloned
/// snapshot, so a query keeps iterating over a stable local copy even while
/// the cache is being refreshed underneath it.
pub struct ProposalStorage {
    proposals: RwLock<Vec<ServiceProposal>>,
}

impl ProposalStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self {
            proposals: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of all currently known proposals. Order is unspecified.
    pub async fn proposals(&self) -> Vec<ServiceProposal> {
        let proposals = self.proposals.read().await;
        proposals.clone()
    }

    /// Replace the whole snapshot.
    pub async fn set_proposals(&self, new_proposals: Vec<ServiceProposal>) {
        debug!("Replacing proposal snapshot with {} entries", new_proposals.len());
        let mut proposals = self.proposals.write().await;
        *proposals = new_proposals;
    }

    /// Add a proposal, replacing any existing entry with the same identity.
    pub async fn add_proposal(&self, proposal: ServiceProposal) {
        let id = proposal.unique_id();
        let mut proposals = self.proposals.write().await;
        match proposals.iter_mut().find(|p| p.unique_id() == id) {
            Some(existing) => {
                debug!("Replacing proposal {}", id);
                *existing = proposal;
            }
            None => {
                debug!("Adding proposal {}", id);
                proposals.push(proposal);
            }
        }
    }

    /// Remove the proposal with the given identity, if present.
    pub async fn remove_proposal(&self, id: &ProposalId) {
        let mut proposals = self.proposals.write().await;
        proposals.retain(|p| p.unique_id() != *id);
    }

    /// Whether a proposal with the given identity is currently known.
    pub async fn has_proposal(&self, id: &ProposalId) -> bool {
        let proposals = self.proposals.read().await;
        proposals.iter().any(|p| p.unique_id() == *id)
    }
}

impl Default for ProposalStorage {
    fn default() -> Self {
        Self::new()
    }
}
