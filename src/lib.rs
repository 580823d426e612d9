#![forbid(unsafe_code)]
//! Effective configuration for the update-nudging agent
//!
//! Resolves version requirements, the "learn more" link and user interface
//! text/flags from a managed profile and a JSON preferences file, in that
//! order of precedence, with hardcoded defaults last. Demo mode bypasses
//! both sources.

pub mod config;
pub mod constants;
pub mod localization;
pub mod resolve;
pub mod types;
pub mod version;

pub use config::{CapabilityFlags, ManagedProfile, PreferenceSources, RuntimeFlags};
pub use localization::{Localizer, StringTable};
pub use resolve::{ConfigResolver, Resolved, ResolvedConfig, Source};
pub use version::OsVersion;
