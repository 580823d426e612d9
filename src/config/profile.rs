//! Managed-profile source
//!
//! The managed profile is an untyped key/value dictionary (the export of a
//! managed preference domain). It is read once into a `ManagedProfile`
//! snapshot and decoded into `NudgePreferences`. Decoding is lenient:
//! anything that does not fit the expected shape is treated as absent.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::constants::keys;
use crate::types::{
    AboutUpdateUrl, NudgePreferences, OsVersionRequirement, UpdateElement, UserInterface,
};

/// Read-only key/value lookup over a managed preference domain
pub trait ProfileStore {
    fn value(&self, key: &str) -> Option<&Value>;
}

/// Immutable snapshot of the managed profile
#[derive(Debug, Clone, Default)]
pub struct ManagedProfile {
    values: Map<String, Value>,
}

impl ManagedProfile {
    /// Profile with no keys (nothing installed)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Load a JSON export of the managed domain; the top level must be an object
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read managed profile from {:?}", path))?;

        let values: Map<String, Value> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse managed profile {:?}", path))?;

        info!(path = %path.display(), keys = values.len(), "Loaded managed profile");
        Ok(Self { values })
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ProfileStore for ManagedProfile {
    fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Decode the profile dictionary into the typed preference model
///
/// Fields are read one at a time: a wrong-typed field is `None` and never
/// takes its siblings down with it.
pub fn decode_preferences(store: &dyn ProfileStore) -> NudgePreferences {
    NudgePreferences {
        optional_features: store
            .value(keys::OPTIONAL_FEATURES)
            .and_then(Value::as_object)
            .cloned(),
        os_version_requirements: decode_list(
            store.value(keys::OS_VERSION_REQUIREMENTS),
            keys::OS_VERSION_REQUIREMENTS,
            decode_requirement,
        ),
        user_interface: store
            .value(keys::USER_INTERFACE)
            .and_then(Value::as_object)
            .map(decode_user_interface),
    }
}

fn decode_user_interface(dict: &Map<String, Value>) -> UserInterface {
    UserInterface {
        simple_mode: dict.get(keys::SIMPLE_MODE).and_then(Value::as_bool),
        force_screen_shot_icon: dict.get(keys::FORCE_SCREENSHOT_ICON).and_then(Value::as_bool),
        update_elements: decode_list(
            dict.get(keys::UPDATE_ELEMENTS),
            keys::UPDATE_ELEMENTS,
            decode_update_element,
        ),
    }
}

fn decode_requirement(dict: &Map<String, Value>) -> Option<OsVersionRequirement> {
    Some(OsVersionRequirement {
        targeted_os_versions: string_list(dict.get(keys::TARGETED_OS_VERSIONS)),
        about_update_url: string_field(dict, keys::ABOUT_UPDATE_URL),
        about_update_urls: dict
            .get(keys::ABOUT_UPDATE_URLS)
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_object)
                    .filter_map(|entry| {
                        Some(AboutUpdateUrl {
                            language: string_field(entry, keys::LANGUAGE)?,
                            about_update_url: string_field(entry, keys::ABOUT_UPDATE_URL),
                        })
                    })
                    .collect()
            }),
        required_minimum_os_version: string_field(dict, keys::REQUIRED_MINIMUM_OS_VERSION),
        required_installation_date: string_field(dict, keys::REQUIRED_INSTALLATION_DATE),
    })
}

/// Only `_language` is mandatory; without it the element can never match
fn decode_update_element(dict: &Map<String, Value>) -> Option<UpdateElement> {
    Some(UpdateElement {
        language: string_field(dict, keys::LANGUAGE)?,
        main_header: string_field(dict, keys::MAIN_HEADER),
        sub_header: string_field(dict, keys::SUB_HEADER),
        main_content_header: string_field(dict, keys::MAIN_CONTENT_HEADER),
        main_content_text: string_field(dict, keys::MAIN_CONTENT_TEXT),
        action_button_text: string_field(dict, keys::ACTION_BUTTON_TEXT),
    })
}

fn string_field(dict: &Map<String, Value>, key: &str) -> Option<String> {
    dict.get(key).and_then(Value::as_str).map(str::to_string)
}

/// String items of an array; non-string items are dropped
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(items.iter().filter_map(Value::as_str).map(str::to_string).collect())
}

/// Decode each array entry on its own, skipping the ones that aren't usable
fn decode_list<T>(
    value: Option<&Value>,
    key: &str,
    decode: fn(&Map<String, Value>) -> Option<T>,
) -> Option<Vec<T>> {
    let items = match value? {
        Value::Array(items) => items,
        other => {
            warn!(
                key = key,
                found = %type_name(other),
                "Profile key is not an array, ignoring"
            );
            return None;
        }
    };

    let decoded = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let entry = item.as_object().and_then(decode);
            if entry.is_none() {
                warn!(
                    key = key,
                    index = index,
                    found = %type_name(item),
                    "Skipping unusable profile entry"
                );
            }
            entry
        })
        .collect();

    Some(decoded)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
