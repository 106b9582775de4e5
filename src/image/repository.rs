use crate::{
    errors::NamingError,
    image::{part, NamePart},
};
use regex::Regex;
use serde::Serialize;
use std::{convert::TryFrom, fmt, str::FromStr};

lazy_static! {
    static ref PATTERN: Regex = Regex::new("^[a-z0-9_.-]+$").unwrap();
    static ref INVALID_CHARS: Regex = Regex::new("[^a-z0-9_.-]").unwrap();
}

/// Name of a Docker-style image repository
///
/// This is the one mandatory part of an [crate::image::ImageName]. It is a
/// single path segment of lowercase alphanumeric characters, underscores,
/// periods, and hyphens. Any namespace or registry in front of it is stored
/// separately.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Repository {
    serialized: String,
}

impl Repository {
    /// Parse a [prim@str] as a [Repository]
    ///
    /// Only an empty string is rejected here. Use [NamePart::validate] to
    /// check the naming rules.
    pub fn parse(s: &str) -> Result<Self, NamingError> {
        Ok(Repository {
            serialized: part::non_empty(s)?,
        })
    }
}

impl NamePart for Repository {
    fn as_str(&self) -> &str {
        &self.serialized
    }

    fn validate(&self) -> Result<(), NamingError> {
        if !PATTERN.is_match(self.as_str()) {
            return Err(NamingError::RepositoryPattern);
        }
        Ok(())
    }

    /// Turns whitespace runs into hyphens, lowercases, and drops every other
    /// character outside `[a-z0-9_.-]`
    ///
    /// A repository made only of unusable characters repairs to an empty,
    /// still invalid, string.
    fn make_valid(&mut self) -> &mut Self {
        if !self.is_valid() {
            let lowercase = part::spaces_to_hyphens(&self.serialized).to_lowercase();
            let repaired = INVALID_CHARS.replace_all(&lowercase, "").into_owned();
            part::replace_logged("repository", &mut self.serialized, repaired);
        }
        self
    }
}

impl TryFrom<&str> for Repository {
    type Error = NamingError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Repository::parse(s)
    }
}

impl TryFrom<String> for Repository {
    type Error = NamingError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Repository::parse(&s)
    }
}

impl FromStr for Repository {
    type Err = NamingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Repository::parse(s)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
