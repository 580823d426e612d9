//! Capability flags
//!
//! Command-line/environment overrides that short-circuit normal resolution.

use crate::constants::language;

/// Read-only boolean overrides consulted before any preference source
pub trait CapabilityFlags {
    fn demo_mode(&self) -> bool;
    fn force_screenshot_icon(&self) -> bool;
    fn force_simple_mode(&self) -> bool;
    fn force_fallback_language(&self) -> bool;
    /// Language used when `force_fallback_language` is on
    fn fallback_language(&self) -> &str;
}

/// Flags captured once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeFlags {
    pub demo_mode: bool,
    pub force_screenshot_icon: bool,
    pub force_simple_mode: bool,
    pub force_fallback_language: bool,
    pub fallback_language: String,
}

impl Default for RuntimeFlags {
    fn default() -> Self {
        Self {
            demo_mode: false,
            force_screenshot_icon: false,
            force_simple_mode: false,
            force_fallback_language: false,
            fallback_language: language::DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl RuntimeFlags {
    pub fn demo() -> Self {
        Self {
            demo_mode: true,
            ..Self::default()
        }
    }
}

impl CapabilityFlags for RuntimeFlags {
    fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    fn force_screenshot_icon(&self) -> bool {
        self.force_screenshot_icon
    }

    fn force_simple_mode(&self) -> bool {
        self.force_simple_mode
    }

    fn force_fallback_language(&self) -> bool {
        self.force_fallback_language
    }

    fn fallback_language(&self) -> &str {
        &self.fallback_language
    }
}
