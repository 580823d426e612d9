#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use nudge_prefs::config::json;
use nudge_prefs::constants::language::DEFAULT_FALLBACK;
use nudge_prefs::resolve::language::system_language as locale_language;
use nudge_prefs::types::NudgePreferences;
use nudge_prefs::{
    ConfigResolver, ManagedProfile, OsVersion, PreferenceSources, RuntimeFlags, StringTable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Single value to print instead of the full report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Query {
    Language,
    ActiveRule,
    UpdateUrl,
    MainHeader,
    SimpleMode,
    ScreenshotIcon,
}

/// Resolve effective preferences from the managed profile and JSON file
#[derive(Debug, Parser)]
#[command(name = "nudge-prefs", version)]
struct Args {
    /// JSON export of the managed profile
    #[arg(long)]
    profile: Option<PathBuf>,

    /// JSON preferences file (defaults to the user config dir)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Extra string table layered over the built-in translations
    #[arg(long)]
    strings: Option<PathBuf>,

    /// Running OS version, e.g. 15.1 or 14.7.2
    #[arg(long)]
    os_version: OsVersion,

    /// Language code of the current locale (defaults to LC_ALL/LC_MESSAGES/LANG)
    #[arg(long)]
    language: Option<String>,

    #[arg(long)]
    demo_mode: bool,

    #[arg(long)]
    simple_mode: bool,

    #[arg(long)]
    force_screenshot_icon: bool,

    #[arg(long)]
    force_fallback_language: bool,

    #[arg(long, default_value = DEFAULT_FALLBACK)]
    fallback_language: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long, value_enum)]
    query: Option<Query>,
}

impl Args {
    fn flags(&self) -> RuntimeFlags {
        RuntimeFlags {
            demo_mode: self.demo_mode,
            force_screenshot_icon: self.force_screenshot_icon,
            force_simple_mode: self.simple_mode,
            force_fallback_language: self.force_fallback_language,
            fallback_language: self.fallback_language.clone(),
        }
    }
}

fn init_logging() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to install log subscriber")
}

/// Missing or unreadable profile means no profile is installed
fn load_profile(path: Option<&Path>) -> ManagedProfile {
    let Some(path) = path else {
        info!("No managed profile given");
        return ManagedProfile::empty();
    };

    ManagedProfile::load(path).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %format!("{e:#}"), "Ignoring managed profile");
        ManagedProfile::empty()
    })
}

/// Missing or unparsable JSON file means the JSON source is absent
fn load_json(path: &Path) -> Option<NudgePreferences> {
    if !path.exists() {
        warn!(path = %path.display(), "JSON preferences file not found");
        return None;
    }

    json::load(path)
        .inspect_err(|e| {
            error!(path = %path.display(), error = %format!("{e:#}"), "Ignoring JSON preferences")
        })
        .ok()
}

fn load_strings(path: Option<&Path>) -> StringTable {
    let mut table = StringTable::builtin();
    let path = path.map(Path::to_path_buf).unwrap_or_else(StringTable::default_path);
    if path.exists() {
        if let Err(e) = table.merge_file(&path) {
            warn!(path = %path.display(), error = %format!("{e:#}"), "Using built-in strings only");
        }
    }
    table
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();

    let system_language = args
        .language
        .clone()
        .or_else(locale_language)
        .context("Unable to determine the system language code; set LANG or pass --language")?;

    let profile = load_profile(args.profile.as_deref());
    let json_path = args.json.clone().unwrap_or_else(json::default_path);
    let sources = PreferenceSources::from_store(&profile, load_json(&json_path));
    let strings = load_strings(args.strings.as_deref());
    let flags = args.flags();

    let resolver =
        ConfigResolver::new(&sources, &flags, &strings, args.os_version, system_language);
    info!(
        os_version = %resolver.os_version(),
        language = resolver.effective_language(),
        demo_mode = resolver.is_demo_mode(),
        "Resolving configuration"
    );

    let output = match args.query {
        Some(query) => render_query(&resolver, query, args.format)?,
        None => {
            let report = resolver.resolve_all();
            match args.format {
                OutputFormat::Text => report.to_string(),
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&report).context("Failed to serialize report")?
                }
            }
        }
    };

    println!("{output}");
    Ok(())
}

fn render_query(
    resolver: &ConfigResolver<'_>,
    query: Query,
    format: OutputFormat,
) -> Result<String> {
    let value = match query {
        Query::Language => serde_json::Value::from(resolver.effective_language()),
        Query::ActiveRule => match resolver.active_rule() {
            Some(rule) => serde_json::to_value(rule.value).context("Failed to serialize rule")?,
            None => serde_json::Value::Null,
        },
        Query::UpdateUrl => serde_json::Value::from(resolver.update_url()),
        Query::MainHeader => serde_json::Value::from(resolver.main_header()),
        Query::SimpleMode => serde_json::Value::from(resolver.simple_mode()),
        Query::ScreenshotIcon => serde_json::Value::from(resolver.force_screenshot_icon()),
    };

    Ok(match (format, value) {
        (OutputFormat::Text, serde_json::Value::String(text)) => text,
        (OutputFormat::Text, serde_json::Value::Null) => String::new(),
        (_, other) => serde_json::to_string_pretty(&other).context("Failed to serialize value")?,
    })
}
