use crate::{
    errors::NamingError,
    image::{part, NamePart},
};
use regex::Regex;
use serde::Serialize;
use std::{convert::TryFrom, fmt, str::FromStr};

lazy_static! {
    static ref PATTERN: Regex = Regex::new("^[a-z0-9_-]+$").unwrap();
    static ref INVALID_CHARS: Regex = Regex::new("[^a-z0-9_-]").unwrap();
    static ref HYPHEN_RUNS: Regex = Regex::new("-{2,}").unwrap();
}

/// The user or organization an image repository belongs to
///
/// Namespaces are 2 to 255 characters long, made of lowercase alphanumeric
/// characters, underscores, and hyphens. Hyphens may not begin or end the
/// namespace, and may not appear twice in a row.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Namespace {
    serialized: String,
}

impl Namespace {
    /// Shortest valid namespace, in characters
    pub const MIN_LEN: usize = 2;

    /// Longest valid namespace, in characters
    pub const MAX_LEN: usize = 255;

    /// Parse a [prim@str] as a [Namespace]
    ///
    /// Only an empty string is rejected here. Use [NamePart::validate] to
    /// check the naming rules.
    pub fn parse(s: &str) -> Result<Self, NamingError> {
        Ok(Namespace {
            serialized: part::non_empty(s)?,
        })
    }
}

impl NamePart for Namespace {
    fn as_str(&self) -> &str {
        &self.serialized
    }

    fn validate(&self) -> Result<(), NamingError> {
        let s = self.as_str();
        let len = part::char_len(s);
        if len < Self::MIN_LEN || len > Self::MAX_LEN {
            return Err(NamingError::NamespaceLength);
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(NamingError::NamespaceEdgeHyphen);
        }
        if s.contains("--") {
            return Err(NamingError::NamespaceConsecutiveHyphens);
        }
        if !PATTERN.is_match(s) {
            return Err(NamingError::NamespacePattern);
        }
        Ok(())
    }

    /// Truncates to 255 characters, then turns whitespace runs into hyphens,
    /// lowercases, drops other characters outside `[a-z0-9_-]`, collapses
    /// repeated hyphens, trims hyphens from both ends, and finally pads with
    /// `0` up to the minimum length.
    ///
    /// The result is always a valid namespace.
    fn make_valid(&mut self) -> &mut Self {
        let mut repaired = self.serialized.clone();
        part::truncate_chars(&mut repaired, Self::MAX_LEN);
        if !PATTERN.is_match(&repaired) {
            let lowercase = part::spaces_to_hyphens(&repaired).to_lowercase();
            repaired = INVALID_CHARS.replace_all(&lowercase, "").into_owned();
        }
        let mut repaired = HYPHEN_RUNS
            .replace_all(&repaired, "-")
            .trim_matches('-')
            .to_owned();
        while repaired.len() < Self::MIN_LEN {
            repaired.push('0');
        }
        part::replace_logged("namespace", &mut self.serialized, repaired);
        self
    }
}

impl TryFrom<&str> for Namespace {
    type Error = NamingError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Namespace::parse(s)
    }
}

impl TryFrom<String> for Namespace {
    type Error = NamingError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Namespace::parse(&s)
    }
}

impl FromStr for Namespace {
    type Err = NamingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::parse(s)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
