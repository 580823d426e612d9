//! "Learn more" link selection for the active rule

use crate::constants::demo;
use crate::resolve::gate::ModeGate;
use crate::types::OsVersionRequirement;

pub struct UpdateUrlResolver<'a> {
    gate: ModeGate<'a>,
}

impl<'a> UpdateUrlResolver<'a> {
    pub fn new(gate: ModeGate<'a>) -> Self {
        Self { gate }
    }

    /// Blanket `aboutUpdateURL` first, then the first entry for `language`.
    /// An empty string means no link is available.
    pub fn update_url(&self, rule: Option<&OsVersionRequirement>, language: &str) -> String {
        if self.gate.is_demo_mode() {
            return demo::ABOUT_UPDATE_URL.to_string();
        }

        let Some(rule) = rule else {
            return String::new();
        };

        if let Some(url) = &rule.about_update_url {
            return url.clone();
        }

        // First language hit decides, even when it carries no URL
        rule.about_update_urls
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|entry| entry.language == language)
            .and_then(|entry| entry.about_update_url.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeFlags;
    use crate::types::AboutUpdateUrl;

    fn localized(entries: &[(&str, Option<&str>)]) -> OsVersionRequirement {
        OsVersionRequirement {
            targeted_os_versions: Some(vec!["15.0".to_string()]),
            about_update_urls: Some(
                entries
                    .iter()
                    .map(|(language, url)| AboutUpdateUrl {
                        language: language.to_string(),
                        about_update_url: url.map(str::to_string),
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_blanket_url_wins_over_language_list() {
        let flags = RuntimeFlags::default();
        let resolver = UpdateUrlResolver::new(ModeGate::new(&flags));
        let mut rule = localized(&[("en", Some("https://en"))]);
        rule.about_update_url = Some("https://blanket".to_string());

        assert_eq!(resolver.update_url(Some(&rule), "en"), "https://blanket");
    }

    #[test]
    fn test_language_list_exact_match() {
        let flags = RuntimeFlags::default();
        let resolver = UpdateUrlResolver::new(ModeGate::new(&flags));
        let rule = localized(&[("en", Some("https://en")), ("fr", Some("https://fr"))]);

        assert_eq!(resolver.update_url(Some(&rule), "fr"), "https://fr");
        assert_eq!(resolver.update_url(Some(&rule), "de"), "");
    }

    #[test]
    fn test_first_language_entry_decides() {
        let flags = RuntimeFlags::default();
        let resolver = UpdateUrlResolver::new(ModeGate::new(&flags));
        let rule = localized(&[("en", None), ("en", Some("https://second"))]);

        assert_eq!(resolver.update_url(Some(&rule), "en"), "");
    }

    #[test]
    fn test_no_rule_is_empty() {
        let flags = RuntimeFlags::default();
        let resolver = UpdateUrlResolver::new(ModeGate::new(&flags));
        assert_eq!(resolver.update_url(None, "en"), "");
        assert_eq!(resolver.update_url(Some(&OsVersionRequirement::default()), "en"), "");
    }

    #[test]
    fn test_demo_mode_literal() {
        let flags = RuntimeFlags::demo();
        let resolver = UpdateUrlResolver::new(ModeGate::new(&flags));
        let mut rule = localized(&[]);
        rule.about_update_url = Some("https://blanket".to_string());

        assert_eq!(resolver.update_url(Some(&rule), "en"), demo::ABOUT_UPDATE_URL);
        assert_eq!(resolver.update_url(None, "en"), demo::ABOUT_UPDATE_URL);
    }
}
