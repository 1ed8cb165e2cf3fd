//! Argument builders for the external `ipset` set-management tool.
//!
//! Each operation returns the argument vector to pass to the `ipset` binary;
//! nothing here spawns a process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Type of an IP set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetType(String);

impl SetType {
    /// Set type backed by a hash of IP addresses. Clashes are resolved by
    /// storing clashing elements in an array and, as a last resort, by
    /// growing the hash dynamically.
    pub fn hash_ip() -> Self {
        SetType("hash:ip".to_string())
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operation which prints version information.
pub fn op_version() -> Vec<String> {
    vec!["version".to_string()]
}

/// Operation which creates a new set.
pub fn op_set_create(
    set_name: &str,
    set_type: SetType,
    netmask_prefix: Option<u8>,
    hash_size: Option<u32>,
) -> Vec<String> {
    let mut args = vec!["create".to_string(), set_name.to_string(), set_type.to_string()];
    if let Some(prefix) = netmask_prefix {
        args.push("--netmask".to_string());
        args.push(prefix.to_string());
    }
    if let Some(size) = hash_size {
        args.push("--hashsize".to_string());
        args.push(size.to_string());
    }
    args
}

/// Operation which destroys a named set.
pub fn op_set_delete(set_name: &str) -> Vec<String> {
    vec!["destroy".to_string(), set_name.to_string()]
}

/// Operation which adds an IP entry to the named set.
pub fn op_set_ip_add(set_name: &str, ip: IpAddr) -> Vec<String> {
    vec!["add".to_string(), set_name.to_string(), ip.to_string()]
}

/// Operation which deletes an IP entry from the named set.
pub fn op_set_ip_remove(set_name: &str, ip: IpAddr) -> Vec<String> {
    vec!["del".to_string(), set_name.to_string(), ip.to_string()]
}
