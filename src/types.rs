//! Strongly-typed preference model
//!
//! One shape for both sources: the managed profile is decoded into it
//! (see `config::profile`) and the JSON file deserializes straight into it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Full preference snapshot from a single source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NudgePreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_features: Option<Map<String, Value>>,
    #[serde(rename = "osVersionRequirements", default, skip_serializing_if = "Option::is_none")]
    pub os_version_requirements: Option<Vec<OsVersionRequirement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_interface: Option<UserInterface>,
}

/// Version-requirement rule: targets a set of OS versions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsVersionRequirement {
    #[serde(rename = "targetedOSVersions", default, skip_serializing_if = "Option::is_none")]
    pub targeted_os_versions: Option<Vec<String>>,
    /// Blanket link; wins over `about_update_urls`
    #[serde(rename = "aboutUpdateURL", default, skip_serializing_if = "Option::is_none")]
    pub about_update_url: Option<String>,
    #[serde(rename = "aboutUpdateURLs", default, skip_serializing_if = "Option::is_none")]
    pub about_update_urls: Option<Vec<AboutUpdateUrl>>,
    #[serde(rename = "requiredMinimumOSVersion", default, skip_serializing_if = "Option::is_none")]
    pub required_minimum_os_version: Option<String>,
    #[serde(rename = "requiredInstallationDate", default, skip_serializing_if = "Option::is_none")]
    pub required_installation_date: Option<String>,
}

impl OsVersionRequirement {
    /// Exact membership test against the canonical version string
    pub fn targets(&self, version: &str) -> bool {
        self.targeted_os_versions
            .as_ref()
            .is_some_and(|targets| targets.iter().any(|t| t == version))
    }
}

/// Per-language "learn more" link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutUpdateUrl {
    #[serde(rename = "_language")]
    pub language: String,
    #[serde(rename = "aboutUpdateURL", default, skip_serializing_if = "Option::is_none")]
    pub about_update_url: Option<String>,
}

/// `userInterface` dictionary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInterface {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simple_mode: Option<bool>,
    #[serde(rename = "forceScreenShotIcon", default, skip_serializing_if = "Option::is_none")]
    pub force_screen_shot_icon: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_elements: Option<Vec<UpdateElement>>,
}

impl UserInterface {
    /// First element whose language matches exactly
    pub fn element_for(&self, language: &str) -> Option<&UpdateElement> {
        self.update_elements
            .as_ref()?
            .iter()
            .find(|element| element.language == language)
    }
}

/// Display strings for one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateElement {
    #[serde(rename = "_language")]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_content_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_content_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_button_text: Option<String>,
}

impl UpdateElement {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            main_header: None,
            sub_header: None,
            main_content_header: None,
            main_content_text: None,
            action_button_text: None,
        }
    }

    pub fn with_main_header(mut self, header: &str) -> Self {
        self.main_header = Some(header.to_string());
        self
    }
}
