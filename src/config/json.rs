//! JSON preferences source
//!
//! The locally distributed preferences file deserializes directly into the
//! typed model. It is read once at startup and never re-read.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::paths;
use crate::types::NudgePreferences;

/// Default location of the JSON preferences file
pub fn default_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(paths::APP_DIR);
    path.push(paths::JSON_FILENAME);
    path
}

/// Load and parse the JSON preferences file
pub fn load(path: &Path) -> Result<NudgePreferences> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON preferences from {:?}", path))?;

    let prefs: NudgePreferences = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON preferences {:?}", path))?;

    info!(
        path = %path.display(),
        rules = prefs.os_version_requirements.as_ref().map_or(0, Vec::len),
        has_user_interface = prefs.user_interface.is_some(),
        "Loaded JSON preferences"
    );
    Ok(prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"osVersionRequirements": [
                {{"targetedOSVersions": ["15.1"], "aboutUpdateURL": "https://x"}}
            ]}}"#
        )
        .unwrap();

        let prefs = load(file.path()).unwrap();
        let rules = prefs.os_version_requirements.unwrap();
        assert_eq!(rules[0].about_update_url.as_deref(), Some("https://x"));
        assert!(prefs.user_interface.is_none());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read JSON preferences"));
    }

    #[test]
    fn test_load_malformed_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"userInterface": {{"simpleMode": "nope"}}}}"#).unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON preferences"));
    }

    #[test]
    fn test_default_path_ends_with_filename() {
        let path = default_path();
        assert!(path.ends_with(format!("{}/{}", paths::APP_DIR, paths::JSON_FILENAME)));
    }
}
