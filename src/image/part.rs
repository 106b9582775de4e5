use crate::errors::NamingError;
use regex::Regex;
use std::{borrow::Cow, fmt};

/// Capabilities shared by every part of an image name
///
/// Building a part only requires a non-empty string. Whether the part follows
/// its naming rules is a separate question: [NamePart::is_valid] answers it
/// quietly, [NamePart::validate] explains the first rule that failed, and
/// [NamePart::make_valid] rewrites the part in place toward the closest name
/// that conforms.
pub trait NamePart: fmt::Display {
    /// Returns a reference to the current string value of this part
    fn as_str(&self) -> &str;

    /// Does this part follow its naming rules?
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the naming rules, returning the first one that fails
    fn validate(&self) -> Result<(), NamingError>;

    /// Best-effort repair of this part, in place
    ///
    /// Never fails, and leaves an already valid part unchanged. Repairing
    /// twice gives the same result as repairing once.
    fn make_valid(&mut self) -> &mut Self;
}

pub(crate) fn non_empty(s: &str) -> Result<String, NamingError> {
    if s.is_empty() {
        Err(NamingError::EmptyPart)
    } else {
        Ok(s.to_owned())
    }
}

/// Replace each run of whitespace with a single hyphen
pub(crate) fn spaces_to_hyphens(s: &str) -> Cow<'_, str> {
    lazy_static! {
        static ref SPACES: Regex = Regex::new("[[:space:]]+").unwrap();
    }
    SPACES.replace_all(s, "-")
}

/// Shorten a string to at most `max` characters
pub(crate) fn truncate_chars(s: &mut String, max: usize) {
    if let Some((byte_pos, _)) = s.char_indices().nth(max) {
        s.truncate(byte_pos);
    }
}

/// Length in characters, which is what the length rules count
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Store a repaired value, noting it in the log when something changed
pub(crate) fn replace_logged(kind: &str, serialized: &mut String, repaired: String) {
    if *serialized != repaired {
        log::trace!("repaired {}, {:?} -> {:?}", kind, serialized, repaired);
        *serialized = repaired;
    }
}
