//! Application-wide constants
//!
//! Preference keys, literal defaults and file locations used throughout
//! the resolver, kept in one place so the wire names are easy to audit.

/// Top-level keys of the managed profile / JSON preferences
pub mod keys {
    /// Optional feature dictionary
    pub const OPTIONAL_FEATURES: &str = "optionalFeatures";

    /// Ordered list of version-requirement rules
    pub const OS_VERSION_REQUIREMENTS: &str = "osVersionRequirements";

    /// User interface dictionary
    pub const USER_INTERFACE: &str = "userInterface";

    /// `userInterface` → per-language text elements
    pub const UPDATE_ELEMENTS: &str = "updateElements";

    /// `userInterface` → simple mode flag
    pub const SIMPLE_MODE: &str = "simpleMode";

    /// `userInterface` → screenshot icon flag
    pub const FORCE_SCREENSHOT_ICON: &str = "forceScreenShotIcon";

    /// Language tag of an update element or per-language link
    pub const LANGUAGE: &str = "_language";

    pub const TARGETED_OS_VERSIONS: &str = "targetedOSVersions";
    pub const ABOUT_UPDATE_URL: &str = "aboutUpdateURL";
    pub const ABOUT_UPDATE_URLS: &str = "aboutUpdateURLs";
    pub const REQUIRED_MINIMUM_OS_VERSION: &str = "requiredMinimumOSVersion";
    pub const REQUIRED_INSTALLATION_DATE: &str = "requiredInstallationDate";

    pub const MAIN_HEADER: &str = "mainHeader";
    pub const SUB_HEADER: &str = "subHeader";
    pub const MAIN_CONTENT_HEADER: &str = "mainContentHeader";
    pub const MAIN_CONTENT_TEXT: &str = "mainContentText";
    pub const ACTION_BUTTON_TEXT: &str = "actionButtonText";
}

/// Language handling
pub mod language {
    /// Language used when the fallback override is enabled and none was given
    pub const DEFAULT_FALLBACK: &str = "en";

    /// Environment variables consulted for the process locale, in order
    pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];
}

/// Values returned while demo mode is active
pub mod demo {
    /// Fixed "learn more" link
    pub const ABOUT_UPDATE_URL: &str = "https://support.apple.com/en-us/HT201541";

    /// Localization key (and English text) of the demo header
    pub const MAIN_HEADER: &str = "Your device requires a security update (Demo Mode)";
}

/// Hardcoded last-tier defaults
pub mod defaults {
    /// Localization key (and English text) of the default header
    pub const MAIN_HEADER: &str = "Your device requires a security update";

    /// Simple mode when no layer configures it
    pub const SIMPLE_MODE: bool = false;

    /// Screenshot icon when no layer configures it
    pub const FORCE_SCREENSHOT_ICON: bool = false;
}

/// File locations
pub mod paths {
    /// Directory under the user config dir
    pub const APP_DIR: &str = "nudge";

    /// JSON preferences file name
    pub const JSON_FILENAME: &str = "com.github.macadmins.Nudge.json";

    /// Optional user string table file name
    pub const STRINGS_FILENAME: &str = "strings.json";
}
