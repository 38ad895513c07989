//! Namespace index
//!
//! Stateless bulk operations over a backend's key enumeration. Both sweeps
//! snapshot the key list before removing anything, so removal never
//! disturbs the enumeration being walked and every entry present at call
//! time is evaluated exactly once.
//!
//! | Operation | Removes |
//! |-----------|---------|
//! | `clear_expired(now)` | envelopes whose `_exp_` is at or before `now` |
//! | `clear_namespace(prefix)` | every key under the colon-terminated prefix |

use stash_core::{CanonicalKey, NamespacePrefix, Timestamp};
use stash_storage::Backend;
use stash_wire::Envelope;
use tracing::debug;

/// Keys whose envelopes have expired at `now`
///
/// Entries that do not decode as envelopes are not ours and are skipped.
pub fn expired_keys<B: Backend + ?Sized>(backend: &B, now: Timestamp) -> Vec<CanonicalKey> {
    backend
        .keys()
        .into_iter()
        .filter(|key| {
            let Some(raw) = backend.read(key) else {
                return false;
            };
            match Envelope::decode(&raw) {
                Ok(envelope) => envelope.is_expired(now),
                Err(e) => {
                    debug!(key = %key, error = %e, "skipping foreign entry");
                    false
                }
            }
        })
        .collect()
}

/// Keys sitting under `prefix`
pub fn namespace_keys<B: Backend + ?Sized>(
    backend: &B,
    prefix: &NamespacePrefix,
) -> Vec<CanonicalKey> {
    backend
        .keys()
        .into_iter()
        .filter(|key| key.is_in_namespace(prefix))
        .collect()
}

/// Remove every expired envelope, returning how many were removed
pub fn clear_expired<B: Backend + ?Sized>(backend: &mut B, now: Timestamp) -> usize {
    let expired = expired_keys(backend, now);
    for key in &expired {
        backend.remove(key);
    }
    debug!(removed = expired.len(), "cleared expired entries");
    expired.len()
}

/// Remove every key under `prefix`, returning how many were removed
///
/// The prefix is normalized and colon-terminated first, so `ns:sub1`
/// clears `ns:sub1:x` but not `ns:sub11:x`.
pub fn clear_namespace<B: Backend + ?Sized>(backend: &mut B, prefix: &str) -> usize {
    let prefix = NamespacePrefix::new(prefix);
    let matched = namespace_keys(backend, &prefix);
    for key in &matched {
        backend.remove(key);
    }
    debug!(%prefix, removed = matched.len(), "cleared namespace");
    matched.len()
}
