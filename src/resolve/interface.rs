//! User interface flags and text
//!
//! Each query is a precedence chain: forced flag (booleans only), managed
//! profile, JSON file, hardcoded default. In demo mode the profile and JSON
//! tiers are left out entirely.

use crate::config::PreferenceSources;
use crate::constants::{defaults, demo};
use crate::localization::Localizer;
use crate::resolve::gate::ModeGate;
use crate::resolve::precedence::{Precedence, Resolved, Source};
use crate::types::{NudgePreferences, UserInterface};

pub struct UserInterfaceResolver<'a> {
    gate: ModeGate<'a>,
    sources: &'a PreferenceSources,
    localizer: &'a dyn Localizer,
}

impl<'a> UserInterfaceResolver<'a> {
    pub fn new(
        gate: ModeGate<'a>,
        sources: &'a PreferenceSources,
        localizer: &'a dyn Localizer,
    ) -> Self {
        Self { gate, sources, localizer }
    }

    pub fn simple_mode(&self) -> Resolved<bool> {
        let forced = self.gate.force_simple_mode();
        self.flag("simpleMode", forced, |ui| ui.simple_mode, defaults::SIMPLE_MODE)
    }

    pub fn force_screenshot_icon(&self) -> Resolved<bool> {
        let forced = self.gate.force_screenshot_icon();
        self.flag(
            "forceScreenShotIcon",
            forced,
            |ui| ui.force_screen_shot_icon,
            defaults::FORCE_SCREENSHOT_ICON,
        )
    }

    /// Header text for `language`; hardcoded strings go through the localizer
    pub fn main_header(&self, language: &str) -> Resolved<String> {
        if self.gate.is_demo_mode() {
            let header = self.localizer.localize(demo::MAIN_HEADER, language);
            return Resolved::new(header, Source::Demo);
        }

        let header = |prefs: Option<&NudgePreferences>| {
            user_interface(prefs)?
                .element_for(language)?
                .main_header
                .clone()
        };

        Precedence::new("mainHeader")
            .tier(Source::Profile, || header(Some(&self.sources.profile)))
            .tier(Source::Json, || header(self.sources.json.as_ref()))
            .resolve_or_else(Source::Default, || {
                self.localizer.localize(defaults::MAIN_HEADER, language)
            })
    }

    fn flag(
        &self,
        field: &'static str,
        forced: bool,
        select: fn(&UserInterface) -> Option<bool>,
        default: bool,
    ) -> Resolved<bool> {
        let sources_enabled = self.gate.sources_enabled();
        let final_source = if sources_enabled { Source::Default } else { Source::Demo };

        Precedence::new(field)
            .tier(Source::Forced, || forced.then_some(true))
            .tier_if(sources_enabled, Source::Profile, || {
                user_interface(Some(&self.sources.profile)).and_then(select)
            })
            .tier_if(sources_enabled, Source::Json, || {
                user_interface(self.sources.json.as_ref()).and_then(select)
            })
            .resolve_or_else(final_source, || default)
    }
}

fn user_interface(prefs: Option<&NudgePreferences>) -> Option<&UserInterface> {
    prefs?.user_interface.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeFlags;
    use crate::localization::StringTable;
    use crate::types::UpdateElement;

    fn prefs(
        simple: Option<bool>,
        icon: Option<bool>,
        elements: Vec<UpdateElement>,
    ) -> NudgePreferences {
        NudgePreferences {
            user_interface: Some(UserInterface {
                simple_mode: simple,
                force_screen_shot_icon: icon,
                update_elements: Some(elements),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_profile_flag_wins_over_json() {
        let sources = PreferenceSources::new(
            prefs(Some(false), Some(true), vec![]),
            Some(prefs(Some(true), Some(false), vec![])),
        );
        let flags = RuntimeFlags::default();
        let strings = StringTable::builtin();
        let resolver = UserInterfaceResolver::new(ModeGate::new(&flags), &sources, &strings);

        assert_eq!(resolver.simple_mode(), Resolved::new(false, Source::Profile));
        assert_eq!(resolver.force_screenshot_icon(), Resolved::new(true, Source::Profile));
    }

    #[test]
    fn test_json_flag_when_profile_silent() {
        let sources = PreferenceSources::new(
            prefs(None, None, vec![]),
            Some(prefs(Some(true), None, vec![])),
        );
        let flags = RuntimeFlags::default();
        let strings = StringTable::builtin();
        let resolver = UserInterfaceResolver::new(ModeGate::new(&flags), &sources, &strings);

        assert_eq!(resolver.simple_mode(), Resolved::new(true, Source::Json));
        assert_eq!(resolver.force_screenshot_icon(), Resolved::new(false, Source::Default));
    }

    #[test]
    fn test_forced_flag_beats_sources() {
        let sources = PreferenceSources::new(prefs(Some(false), Some(false), vec![]), None);
        let flags = RuntimeFlags {
            force_simple_mode: true,
            force_screenshot_icon: true,
            ..RuntimeFlags::default()
        };
        let strings = StringTable::builtin();
        let resolver = UserInterfaceResolver::new(ModeGate::new(&flags), &sources, &strings);

        assert_eq!(resolver.simple_mode(), Resolved::new(true, Source::Forced));
        assert_eq!(resolver.force_screenshot_icon(), Resolved::new(true, Source::Forced));
    }

    #[test]
    fn test_demo_mode_ignores_sources_for_flags() {
        let sources = PreferenceSources::new(
            prefs(Some(true), Some(true), vec![]),
            Some(prefs(Some(true), Some(true), vec![])),
        );
        let flags = RuntimeFlags::demo();
        let strings = StringTable::builtin();
        let resolver = UserInterfaceResolver::new(ModeGate::new(&flags), &sources, &strings);

        assert_eq!(resolver.simple_mode(), Resolved::new(false, Source::Demo));
        assert_eq!(resolver.force_screenshot_icon(), Resolved::new(false, Source::Demo));
    }

    #[test]
    fn test_demo_mode_still_honors_forced_flags() {
        let sources = PreferenceSources::default();
        let flags = RuntimeFlags {
            force_simple_mode: true,
            ..RuntimeFlags::demo()
        };
        let strings = StringTable::builtin();
        let resolver = UserInterfaceResolver::new(ModeGate::new(&flags), &sources, &strings);

        assert_eq!(resolver.simple_mode(), Resolved::new(true, Source::Forced));
    }

    #[test]
    fn test_main_header_language_exact_match() {
        let elements = vec![
            UpdateElement::new("en").with_main_header("H1"),
            UpdateElement::new("fr").with_main_header("H2"),
        ];
        let sources = PreferenceSources::new(prefs(None, None, elements), None);
        let flags = RuntimeFlags::default();
        let strings = StringTable::builtin();
        let resolver = UserInterfaceResolver::new(ModeGate::new(&flags), &sources, &strings);

        assert_eq!(resolver.main_header("fr"), Resolved::new("H2".to_string(), Source::Profile));
        assert_eq!(
            resolver.main_header("de"),
            Resolved::new("Ihr Gerät benötigt ein Sicherheitsupdate".to_string(), Source::Default)
        );
    }

    #[test]
    fn test_main_header_falls_through_to_json() {
        let profile = prefs(None, None, vec![UpdateElement::new("en").with_main_header("Managed")]);
        let json = prefs(None, None, vec![
            UpdateElement::new("de").with_main_header("Verwaltet"),
            UpdateElement::new("en").with_main_header("Local"),
        ]);
        let sources = PreferenceSources::new(profile, Some(json));
        let flags = RuntimeFlags::default();
        let strings = StringTable::builtin();
        let resolver = UserInterfaceResolver::new(ModeGate::new(&flags), &sources, &strings);

        assert_eq!(resolver.main_header("en").value, "Managed");
        assert_eq!(
            resolver.main_header("de"),
            Resolved::new("Verwaltet".to_string(), Source::Json)
        );
    }

    #[test]
    fn test_element_without_header_falls_through() {
        let profile = prefs(None, None, vec![UpdateElement::new("en")]);
        let json = prefs(None, None, vec![UpdateElement::new("en").with_main_header("Local")]);
        let sources = PreferenceSources::new(profile, Some(json));
        let flags = RuntimeFlags::default();
        let strings = StringTable::builtin();
        let resolver = UserInterfaceResolver::new(ModeGate::new(&flags), &sources, &strings);

        assert_eq!(resolver.main_header("en"), Resolved::new("Local".to_string(), Source::Json));
    }

    #[test]
    fn test_demo_header_is_localized() {
        let sources = PreferenceSources::new(
            prefs(None, None, vec![UpdateElement::new("fr").with_main_header("Géré")]),
            None,
        );
        let flags = RuntimeFlags::demo();
        let strings = StringTable::builtin();
        let resolver = UserInterfaceResolver::new(ModeGate::new(&flags), &sources, &strings);

        assert_eq!(
            resolver.main_header("fr"),
            Resolved::new(
                "Votre appareil nécessite une mise à jour de sécurité (Mode démo)".to_string(),
                Source::Demo
            )
        );
    }
}
