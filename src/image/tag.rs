use crate::{
    errors::NamingError,
    image::{part, NamePart},
};
use regex::Regex;
use serde::Serialize;
use std::{convert::TryFrom, fmt, str::FromStr};

lazy_static! {
    static ref PATTERN: Regex = Regex::new("^[a-zA-Z0-9][a-zA-Z0-9_.-]*$").unwrap();
    static ref INVALID_CHARS: Regex = Regex::new("[^a-zA-Z0-9_.-]").unwrap();
    static ref LEADING_SEPARATORS: Regex = Regex::new("^[-_.]+").unwrap();
}

/// A tag identifying a specific image version by name
///
/// Tags are up to 128 characters long. They begin with an alphanumeric
/// character, followed by any mix of alphanumeric characters, underscores,
/// periods, and hyphens. Unlike the other parts, tags may use uppercase.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag {
    serialized: String,
}

static LATEST_STR: &str = "latest";

impl Tag {
    /// Longest valid tag, in characters
    pub const MAX_LEN: usize = 128;

    /// Parse a [prim@str] as a [Tag]
    ///
    /// Only an empty string is rejected here. Use [NamePart::validate] to
    /// check the naming rules.
    pub fn parse(s: &str) -> Result<Self, NamingError> {
        Ok(Tag {
            serialized: part::non_empty(s)?,
        })
    }

    /// Returns the special tag `latest`
    pub fn latest() -> Self {
        Tag {
            serialized: LATEST_STR.to_owned(),
        }
    }

    /// Is this the special tag `latest`?
    pub fn is_latest(&self) -> bool {
        self.serialized == LATEST_STR
    }

    /// Parse and validate a comma-separated list of tags, like `latest,1.0`
    ///
    /// Runs of commas count as one separator and an empty list is allowed.
    /// Fails with the first naming rule broken by any tag in the list.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, NamingError> {
        s.split(',')
            .filter(|t| !t.is_empty())
            .map(|t| {
                let tag = Tag::parse(t)?;
                tag.validate()?;
                Ok(tag)
            })
            .collect()
    }
}

impl NamePart for Tag {
    fn as_str(&self) -> &str {
        &self.serialized
    }

    fn validate(&self) -> Result<(), NamingError> {
        if !PATTERN.is_match(self.as_str()) {
            return Err(NamingError::TagPattern);
        }
        if part::char_len(self.as_str()) > Self::MAX_LEN {
            return Err(NamingError::TagLength);
        }
        Ok(())
    }

    /// Truncates to 128 characters and strips leading `-`, `_`, and `.`. If
    /// that is not enough, whitespace runs become hyphens, other characters
    /// outside `[a-zA-Z0-9_.-]` are dropped, and leading separators exposed
    /// by the removal are stripped too.
    ///
    /// A tag with no usable characters repairs to an empty, still invalid,
    /// string.
    fn make_valid(&mut self) -> &mut Self {
        let mut repaired = self.serialized.clone();
        part::truncate_chars(&mut repaired, Self::MAX_LEN);
        repaired = LEADING_SEPARATORS.replace(&repaired, "").into_owned();
        if !PATTERN.is_match(&repaired) {
            let stripped = INVALID_CHARS
                .replace_all(&part::spaces_to_hyphens(&repaired), "")
                .into_owned();
            repaired = LEADING_SEPARATORS.replace(&stripped, "").into_owned();
        }
        part::replace_logged("tag", &mut self.serialized, repaired);
        self
    }
}

impl TryFrom<&str> for Tag {
    type Error = NamingError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Tag::parse(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = NamingError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Tag::parse(&s)
    }
}

impl FromStr for Tag {
    type Err = NamingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::parse(s)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
