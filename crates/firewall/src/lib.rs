#![deny(unsafe_code)]
//! firewall - helpers for managing kernel-level allowlists on the node
//!
//! Only command construction lives here; executing the commands and applying
//! rules to the kernel is owned by the process-management layer.

pub mod ipset;

pub use ipset::SetType;
