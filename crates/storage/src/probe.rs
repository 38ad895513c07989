//! Capability probe
//!
//! A host store counts as usable when a trial write, read-back and remove
//! under a reserved key all succeed. Failure is reported as `false`, never
//! as an error.

use crate::raw::RawStore;
use tracing::{debug, warn};

/// Reserved key for trial writes
pub const PROBE_KEY: &str = "__stash_probe__";

/// Probe `store` using [`PROBE_KEY`]
pub fn supports(store: &mut dyn RawStore) -> bool {
    supports_with_key(store, PROBE_KEY)
}

/// Probe `store` with a caller-chosen reserved key
pub fn supports_with_key(store: &mut dyn RawStore, probe_key: &str) -> bool {
    if let Err(e) = store.set_item(probe_key, probe_key) {
        warn!(error = %e, "storage probe write failed");
        return false;
    }

    let read_back = store.get_item(probe_key);
    store.remove_item(probe_key);

    match read_back {
        Some(ref v) if v == probe_key => {
            debug!("storage probe succeeded");
            true
        }
        _ => {
            warn!("storage probe read-back mismatch");
            false
        }
    }
}
