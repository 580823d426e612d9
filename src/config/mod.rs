//! Configuration sources for the resolver
//!
//! - **profile**: centrally managed key/value profile (highest precedence)
//! - **json**: locally distributed JSON preferences file
//! - **flags**: capability overrides (demo mode, forced modes, fallback language)

pub mod flags;
pub mod json;
pub mod profile;

use tracing::info;

use crate::types::NudgePreferences;

// Re-export commonly used types
pub use flags::{CapabilityFlags, RuntimeFlags};
pub use profile::{decode_preferences, ManagedProfile, ProfileStore};

/// The two immutable snapshots resolution runs over
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceSources {
    /// Decoded managed profile (empty when none is installed)
    pub profile: NudgePreferences,
    /// Parsed JSON file, `None` when absent or unreadable
    pub json: Option<NudgePreferences>,
}

impl PreferenceSources {
    pub fn new(profile: NudgePreferences, json: Option<NudgePreferences>) -> Self {
        Self { profile, json }
    }

    /// Decode the managed profile and pair it with the JSON snapshot
    pub fn from_store(store: &dyn ProfileStore, json: Option<NudgePreferences>) -> Self {
        let profile = decode_preferences(store);
        info!(
            profile_rules = profile.os_version_requirements.as_ref().map_or(0, Vec::len),
            json_present = json.is_some(),
            "Preference sources ready"
        );
        Self { profile, json }
    }
}
