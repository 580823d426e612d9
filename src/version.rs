//! Operating system version triple
//!
//! Rules target versions by their canonical string, so matching is
//! set membership on `to_string()` output, never a numeric comparison.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Semantic version of the running OS (major.minor.patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

/// Canonical form: `major.minor` when patch is zero, otherwise `major.minor.patch`
impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}

impl FromStr for OsVersion {
    type Err = anyhow::Error;

    /// Accepts 1 to 3 dot-separated numeric components; missing ones are zero
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            bail!("Empty OS version string");
        }

        let mut parts = [0u32; 3];
        let components: Vec<&str> = trimmed.split('.').collect();
        if components.len() > parts.len() {
            bail!("OS version '{}' has more than 3 components", trimmed);
        }

        for (slot, component) in parts.iter_mut().zip(&components) {
            *slot = component.parse().with_context(|| {
                format!("Invalid component '{}' in OS version '{}'", component, trimmed)
            })?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}
