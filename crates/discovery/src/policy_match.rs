//! Per-policy evaluation of an access-policy filter against a proposal's
//! policy list.
//!
//! The evaluation threads a match flag through the policy list instead of
//! testing each policy independently: a filter `id` resets the flag, a
//! filter `source` ANDs into it, and a filter that sets neither lets the
//! flag carry over from the previous policy. Downstream deployments depend
//! on the exact outcomes this produces, so the carry is modeled here as an
//! explicit state machine rather than smoothed over into an "any policy
//! matches all fields" scan.

use market_types::{AccessPolicy, AccessPolicyFilter};

/// Outcome of the policy scan so far, carried from one policy to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyMatchState {
    /// Some policy satisfied the filter; the scan stops here.
    Matched,
    /// No policy has satisfied the filter yet.
    NotMatched,
}

impl PolicyMatchState {
    /// Initial state before any policy has been examined.
    pub fn start() -> Self {
        PolicyMatchState::NotMatched
    }

    /// Advance the state over one policy.
    ///
    /// One transition over one policy:
    /// - if the filter constrains `id`, the flag is reset to the outcome of
    ///   the id comparison, discarding the carried value;
    /// - if the filter constrains `source`, the flag becomes the carried
    ///   value AND the outcome of the source comparison;
    /// - a field the filter leaves unset does not touch the flag.
    pub fn step(self, filter: &AccessPolicyFilter, policy: &AccessPolicy) -> PolicyMatchState {
        let mut matched = self == PolicyMatchState::Matched;

        if let Some(id) = &filter.id {
            matched = *id == policy.id;
        }
        if let Some(source) = &filter.source {
            matched = matched && *source == policy.source;
        }

        if matched {
            PolicyMatchState::Matched
        } else {
            PolicyMatchState::NotMatched
        }
    }

    pub fn is_matched(self) -> bool {
        self == PolicyMatchState::Matched
    }
}

/// Run the policy scan over a full policy list, stopping early on the first
/// policy that brings the state to `Matched`.
pub fn evaluate(filter: &AccessPolicyFilter, policies: &[AccessPolicy]) -> PolicyMatchState {
    let mut state = PolicyMatchState::start();
    for policy in policies {
        state = state.step(filter, policy);
        if state.is_matched() {
            break;
        }
    }
    state
}
