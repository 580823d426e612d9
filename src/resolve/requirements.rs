//! Version-requirement rule matching
//!
//! Sources are exhausted in order: every profile rule is tried before the
//! first JSON rule is looked at. Within a source the first rule whose target
//! set contains the current version wins.

use tracing::info;

use crate::resolve::gate::ModeGate;
use crate::resolve::precedence::{Precedence, Resolved, Source};
use crate::types::OsVersionRequirement;
use crate::version::OsVersion;

pub struct VersionRequirementMatcher<'a> {
    gate: ModeGate<'a>,
}

impl<'a> VersionRequirementMatcher<'a> {
    pub fn new(gate: ModeGate<'a>) -> Self {
        Self { gate }
    }

    /// Rule that applies to `current`, or `None` in demo mode / when nothing targets it
    pub fn active_rule<'r>(
        &self,
        current: &OsVersion,
        profile_rules: Option<&'r [OsVersionRequirement]>,
        json_rules: Option<&'r [OsVersionRequirement]>,
    ) -> Option<Resolved<&'r OsVersionRequirement>> {
        if self.gate.is_demo_mode() {
            return None;
        }

        let version = current.to_string();
        let version = version.as_str();
        let matched = Precedence::new("osVersionRequirements")
            .tier(Source::Profile, || first_match(profile_rules, version, Source::Profile))
            .tier(Source::Json, || first_match(json_rules, version, Source::Json))
            .resolve();

        if matched.is_none() {
            info!(os_version = version, "No osVersionRequirements rule is active");
        }
        matched
    }
}

/// First rule in list order targeting `version`
fn first_match<'r>(
    rules: Option<&'r [OsVersionRequirement]>,
    version: &str,
    source: Source,
) -> Option<&'r OsVersionRequirement> {
    let rules = match rules {
        Some(rules) if !rules.is_empty() => rules,
        _ => {
            info!(source = %source, "osVersionRequirements key is empty");
            return None;
        }
    };

    let found = rules.iter().find(|rule| rule.targets(version));
    if found.is_none() {
        info!(
            source = %source,
            rules = rules.len(),
            os_version = version,
            "No osVersionRequirements rule targets the current OS version"
        );
    }
    found
}
