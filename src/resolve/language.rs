//! Effective language selection

use crate::config::CapabilityFlags;
use crate::constants::language;

/// Picks the language code used for every lookup
pub struct LanguageResolver<'a> {
    flags: &'a dyn CapabilityFlags,
    system_language: &'a str,
}

impl<'a> LanguageResolver<'a> {
    pub fn new(flags: &'a dyn CapabilityFlags, system_language: &'a str) -> Self {
        Self { flags, system_language }
    }

    /// Forced fallback language when enabled, otherwise the process locale
    pub fn effective_language(&self) -> &'a str {
        if self.flags.force_fallback_language() {
            self.flags.fallback_language()
        } else {
            self.system_language
        }
    }
}

/// Language subtag of a POSIX/BCP-47 locale string
///
/// `fr_FR.UTF-8` → `fr`, `pt-BR` → `pt`, `C`/`POSIX` → the default fallback.
pub fn locale_language_code(raw: &str) -> Option<String> {
    let code = raw
        .split(['_', '-', '.', '@'])
        .next()
        .map(str::trim)
        .filter(|code| !code.is_empty())?;

    if code == "C" || code == "POSIX" {
        return Some(language::DEFAULT_FALLBACK.to_string());
    }
    if !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(code.to_ascii_lowercase())
}

/// Language code of the process locale, from the usual environment variables
pub fn system_language() -> Option<String> {
    language::LOCALE_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .and_then(|value| locale_language_code(&value))
}
