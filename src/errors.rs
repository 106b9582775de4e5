//! Error types you might see while parsing or validating an image name

use std::convert::Infallible;
use thiserror::Error;

/// Errors while turning a string into an [crate::image::ImageName]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageNameError {
    /// image name has no usable segments, for example only slashes
    #[error("malformed image name, no segments found in {0:?}")]
    MalformedReference(String),

    /// one of the segments could not be used as a name part
    #[error("{0}")]
    Naming(#[from] NamingError),
}

/// A naming rule broken by one part of an image name
///
/// The messages are meant to be shown to a person as-is, for example as a
/// warning next to a form field, so each variant names exactly one rule.
///
/// Older form checks reported a bad repository as "Invalid registry" and
/// spelled "hyphon". Both are corrected here, so code matching on the
/// message text needs the new wording.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingError {
    /// name parts are never empty, absent parts are represented with [None]
    #[error("Illegal use of empty name part")]
    EmptyPart,

    /// a complete image name needs a repository
    #[error("Invalid image name: Repository cannot be null")]
    MissingRepository,

    /// registry includes a scheme like `https://`
    #[error("Invalid registry: Registry must not contain a schema")]
    RegistrySchema,

    /// namespace is shorter than 2 or longer than 255 characters
    #[error("Invalid namespace: Namespace must be between 2 and 255 characters")]
    NamespaceLength,

    /// namespace starts or ends with `-`
    #[error("Invalid namespace: Namespace must not begin or end with a hyphen")]
    NamespaceEdgeHyphen,

    /// namespace contains `--`
    #[error("Invalid namespace: Namespace must not contain consecutive hyphens")]
    NamespaceConsecutiveHyphens,

    /// namespace has characters outside `[a-z0-9_-]`
    #[error("Invalid namespace: Namespace must match [a-z0-9_-]")]
    NamespacePattern,

    /// repository is empty or has characters outside `[a-z0-9_.-]`
    #[error("Invalid repository: Repository must match [a-z0-9_.-]")]
    RepositoryPattern,

    /// tag does not start with an alphanumeric character, or has characters
    /// outside `[a-zA-Z0-9_.-]`
    #[error("Invalid tag: Tag must match [a-zA-Z0-9][a-zA-Z0-9_.-]*")]
    TagPattern,

    /// tag is longer than 128 characters
    #[error("Invalid tag: Tag must be between 1 and 128 characters")]
    TagLength,
}

impl From<Infallible> for NamingError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
