//! Process-wide service enablement map.
//!
//! Operators can fence off whole services without touching code: listing a
//! service name in `CLOUDNET_DISABLED_SERVICES` (comma-separated) makes every
//! attempt to construct its client fail with
//! [`ConfigError::ServiceDisabled`](crate::ConfigError::ServiceDisabled).
//! Programs can flip entries at runtime with [`set_service_enabled`].
use std::{
    collections::BTreeMap,
    sync::{OnceLock, RwLock},
};

const DISABLED_SERVICES_ENV: &str = "CLOUDNET_DISABLED_SERVICES";

fn registry() -> &'static RwLock<BTreeMap<String, bool>> {
    static REGISTRY: OnceLock<RwLock<BTreeMap<String, bool>>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut map = BTreeMap::new();
        if let Ok(disabled) = std::env::var(DISABLED_SERVICES_ENV) {
            for name in disabled.split(',') {
                let name = name.trim().to_ascii_lowercase();
                if !name.is_empty() {
                    map.insert(name, false);
                }
            }
        }
        RwLock::new(map)
    })
}

/// Whether `service` may be constructed in this process.
///
/// Services default to enabled; only an explicit entry from
/// `CLOUDNET_DISABLED_SERVICES` or [`set_service_enabled`] changes that.
pub fn is_service_enabled(service: &str) -> bool {
    registry()
        .read()
        .expect("enablement registry poisoned")
        .get(&service.to_ascii_lowercase())
        .copied()
        .unwrap_or(true)
}

/// Enable or disable a service by name for the rest of the process.
///
/// Takes effect for clients constructed after the call; existing clients keep
/// working.
pub fn set_service_enabled(service: &str, enabled: bool) {
    registry()
        .write()
        .expect("enablement registry poisoned")
        .insert(service.to_ascii_lowercase(), enabled);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_default_to_enabled() {
        assert!(is_service_enabled("some-service-nobody-disabled"));
    }

    #[test]
    fn toggling_a_service() {
        set_service_enabled("toggle-target", false);
        assert!(!is_service_enabled("toggle-target"));
        // Lookup is case-insensitive.
        assert!(!is_service_enabled("Toggle-Target"));
        set_service_enabled("toggle-target", true);
        assert!(is_service_enabled("toggle-target"));
    }
}
