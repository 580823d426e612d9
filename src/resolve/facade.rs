//! Public resolution queries
//!
//! `ConfigResolver` holds the immutable snapshots and collaborators and
//! answers each query from scratch. No query depends on another having run.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use crate::config::{CapabilityFlags, PreferenceSources};
use crate::localization::Localizer;
use crate::resolve::gate::ModeGate;
use crate::resolve::interface::UserInterfaceResolver;
use crate::resolve::language::LanguageResolver;
use crate::resolve::precedence::{Precedence, Resolved, Source};
use crate::resolve::requirements::VersionRequirementMatcher;
use crate::resolve::update_url::UpdateUrlResolver;
use crate::types::OsVersionRequirement;
use crate::version::OsVersion;

pub struct ConfigResolver<'a> {
    sources: &'a PreferenceSources,
    flags: &'a dyn CapabilityFlags,
    localizer: &'a dyn Localizer,
    os_version: OsVersion,
    system_language: String,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(
        sources: &'a PreferenceSources,
        flags: &'a dyn CapabilityFlags,
        localizer: &'a dyn Localizer,
        os_version: OsVersion,
        system_language: impl Into<String>,
    ) -> Self {
        Self {
            sources,
            flags,
            localizer,
            os_version,
            system_language: system_language.into(),
        }
    }

    fn gate(&self) -> ModeGate<'a> {
        ModeGate::new(self.flags)
    }

    pub fn os_version(&self) -> OsVersion {
        self.os_version
    }

    pub fn is_demo_mode(&self) -> bool {
        self.gate().is_demo_mode()
    }

    pub fn effective_language(&self) -> &str {
        LanguageResolver::new(self.flags, &self.system_language).effective_language()
    }

    pub fn active_rule(&self) -> Option<Resolved<&'a OsVersionRequirement>> {
        let profile_rules = self.sources.profile.os_version_requirements.as_deref();
        let json_rules = self
            .sources
            .json
            .as_ref()
            .and_then(|json| json.os_version_requirements.as_deref());

        VersionRequirementMatcher::new(self.gate()).active_rule(
            &self.os_version,
            profile_rules,
            json_rules,
        )
    }

    /// Link for the active rule; empty when none is available
    pub fn update_url(&self) -> String {
        self.resolved_update_url().value
    }

    fn resolved_update_url(&self) -> Resolved<String> {
        let rule = self.active_rule();
        let url = UpdateUrlResolver::new(self.gate())
            .update_url(rule.as_ref().map(|r| r.value), self.effective_language());

        let source = if self.is_demo_mode() {
            Source::Demo
        } else {
            match rule {
                Some(rule) if !url.is_empty() => rule.source,
                _ => Source::Default,
            }
        };
        Resolved::new(url, source)
    }

    fn interface(&self) -> UserInterfaceResolver<'a> {
        UserInterfaceResolver::new(self.gate(), self.sources, self.localizer)
    }

    pub fn main_header(&self) -> String {
        self.interface().main_header(self.effective_language()).value
    }

    pub fn simple_mode(&self) -> bool {
        self.interface().simple_mode().value
    }

    pub fn force_screenshot_icon(&self) -> bool {
        self.interface().force_screenshot_icon().value
    }

    /// `optionalFeatures` dictionary, profile first
    pub fn optional_features(&self) -> Option<Resolved<&'a Map<String, Value>>> {
        let sources = self.sources;
        let enabled = self.gate().sources_enabled();
        Precedence::new("optionalFeatures")
            .tier_if(enabled, Source::Profile, || sources.profile.optional_features.as_ref())
            .tier_if(enabled, Source::Json, || {
                sources.json.as_ref()?.optional_features.as_ref()
            })
            .resolve()
    }

    /// Every query at once, with the tier each answer came from
    pub fn resolve_all(&self) -> ResolvedConfig {
        let language = self.effective_language().to_string();
        let interface = self.interface();

        ResolvedConfig {
            os_version: self.os_version.to_string(),
            language: language.clone(),
            demo_mode: self.is_demo_mode(),
            active_rule: self.active_rule().map(|rule| rule.map(Clone::clone)),
            update_url: self.resolved_update_url(),
            main_header: interface.main_header(&language),
            simple_mode: interface.simple_mode(),
            force_screenshot_icon: interface.force_screenshot_icon(),
            optional_features: self.optional_features().map(|features| features.map(Clone::clone)),
        }
    }
}

/// Snapshot of every resolved value; rebuilt on each `resolve_all` call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub os_version: String,
    pub language: String,
    pub demo_mode: bool,
    pub active_rule: Option<Resolved<OsVersionRequirement>>,
    pub update_url: Resolved<String>,
    pub main_header: Resolved<String>,
    pub simple_mode: Resolved<bool>,
    pub force_screenshot_icon: Resolved<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_features: Option<Resolved<Map<String, Value>>>,
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OS version:            {}", self.os_version)?;
        writeln!(f, "Language:              {}", self.language)?;
        writeln!(f, "Demo mode:             {}", self.demo_mode)?;
        match &self.active_rule {
            Some(rule) => {
                let targets = rule
                    .value
                    .targeted_os_versions
                    .as_deref()
                    .unwrap_or_default()
                    .join(", ");
                writeln!(f, "Active rule:           [{}] ({})", targets, rule.source)?;
                if let Some(minimum) = &rule.value.required_minimum_os_version {
                    writeln!(f, "  Required minimum:    {}", minimum)?;
                }
                if let Some(date) = &rule.value.required_installation_date {
                    writeln!(f, "  Required by:         {}", date)?;
                }
            }
            None => writeln!(f, "Active rule:           none")?,
        }
        writeln!(
            f,
            "Update URL:            {} ({})",
            display_or_dash(&self.update_url.value),
            self.update_url.source
        )?;
        writeln!(
            f,
            "Main header:           {} ({})",
            self.main_header.value, self.main_header.source
        )?;
        writeln!(
            f,
            "Simple mode:           {} ({})",
            self.simple_mode.value, self.simple_mode.source
        )?;
        write!(
            f,
            "Screenshot icon:       {} ({})",
            self.force_screenshot_icon.value, self.force_screenshot_icon.source
        )?;
        if let Some(features) = &self.optional_features {
            write!(
                f,
                "\nOptional features:     {} key(s) ({})",
                features.value.len(),
                features.source
            )?;
        }
        Ok(())
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
