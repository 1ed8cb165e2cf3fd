#![deny(unsafe_code)]
//! market-discovery - local proposal discovery for the meshmarket node
//!
//! This crate provides the read side of the marketplace cache:
//! - A snapshot store of currently known service proposals
//! - Exact proposal lookup by identity
//! - Filtered search across provider, service type, location and
//!   access-policy axes

pub mod config;
pub mod finder;
pub mod policy_match;
pub mod storage;

// Re-export common types
pub use config::{DiscoveryConfig, UnrestrictedProposalMode};
pub use finder::ProposalFinder;
pub use policy_match::PolicyMatchState;
pub use storage::ProposalStorage;
