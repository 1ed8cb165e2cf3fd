//! market-types
//! Defines the common data structures shared across the meshmarket workspace:
//! service proposals published by providers, the access policies attached to
//! them, and the filter descriptors used to query the local proposal cache.

pub mod access_policy;
pub mod filter;
pub mod proposal;

// Re-export core types for easier access
pub use access_policy::AccessPolicy;
pub use filter::{AccessPolicyFilter, LocationFilter, ProposalFilter};
pub use proposal::{Location, ProposalId, ProviderId, ServiceDefinition, ServiceProposal};
