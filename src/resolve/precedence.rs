//! Ordered precedence chains
//!
//! Each resolved field is an explicit list of tiers evaluated left to right.
//! A tier is only evaluated when every tier before it came back empty.

use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Which tier produced a resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Demo-mode literal
    Demo,
    /// Capability flag override
    Forced,
    /// Managed profile
    Profile,
    /// JSON preferences file
    Json,
    /// Hardcoded default
    Default,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::Demo => "demo",
            Source::Forced => "forced",
            Source::Profile => "profile",
            Source::Json => "json",
            Source::Default => "default",
        };
        f.write_str(name)
    }
}

/// A value together with the tier it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Resolved<T> {
    pub fn new(value: T, source: Source) -> Self {
        Self { value, source }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            source: self.source,
        }
    }
}

type Tier<'a, T> = (Source, Box<dyn Fn() -> Option<T> + 'a>);

/// Ordered list of optional resolvers for one field
pub struct Precedence<'a, T> {
    field: &'static str,
    tiers: Vec<Tier<'a, T>>,
}

impl<'a, T> Precedence<'a, T> {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            tiers: Vec::new(),
        }
    }

    /// Append a tier after all existing ones
    pub fn tier(mut self, source: Source, resolver: impl Fn() -> Option<T> + 'a) -> Self {
        self.tiers.push((source, Box::new(resolver)));
        self
    }

    /// Append a tier only when `enabled`
    pub fn tier_if(
        self,
        enabled: bool,
        source: Source,
        resolver: impl Fn() -> Option<T> + 'a,
    ) -> Self {
        if enabled { self.tier(source, resolver) } else { self }
    }

    /// Tier order, for auditing
    pub fn sources(&self) -> Vec<Source> {
        self.tiers.iter().map(|(source, _)| *source).collect()
    }

    /// First tier that yields a value
    pub fn resolve(self) -> Option<Resolved<T>> {
        for (source, resolver) in &self.tiers {
            if let Some(value) = resolver() {
                debug!(field = self.field, source = %source, "Resolved field");
                return Some(Resolved::new(value, *source));
            }
        }
        debug!(field = self.field, "No tier produced a value");
        None
    }

    /// Resolve, falling back to an always-present final tier
    pub fn resolve_or_else(self, source: Source, default: impl FnOnce() -> T) -> Resolved<T> {
        let field = self.field;
        self.resolve().unwrap_or_else(|| {
            debug!(field = field, source = %source, "Using final tier");
            Resolved::new(default(), source)
        })
    }
}
