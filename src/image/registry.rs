use crate::{
    errors::NamingError,
    image::{part, NamePart},
};
use serde::Serialize;
use std::{convert::TryFrom, fmt, str::FromStr};

/// Name of the registry server an image is stored on
///
/// Registries are loosely checked. A domain, a port, additional path
/// components, and any other characters are kept exactly as given. The one
/// rule is that a valid registry has no scheme: `https://docker.io` can be
/// parsed, but it does not validate, and repairing it leaves `docker.io`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct Registry {
    serialized: String,
}

static SCHEME_SEPARATOR: &str = "://";

impl Registry {
    /// Parse a [prim@str] as a [Registry]
    ///
    /// Only an empty string is rejected here. Use [NamePart::validate] to
    /// check the naming rules.
    pub fn parse(s: &str) -> Result<Self, NamingError> {
        Ok(Registry {
            serialized: part::non_empty(s)?,
        })
    }

    /// Does the registry begin with a scheme such as `https://`?
    pub fn has_scheme(&self) -> bool {
        self.serialized.contains(SCHEME_SEPARATOR)
    }
}

impl NamePart for Registry {
    fn as_str(&self) -> &str {
        &self.serialized
    }

    fn validate(&self) -> Result<(), NamingError> {
        if self.has_scheme() {
            return Err(NamingError::RegistrySchema);
        }
        Ok(())
    }

    /// Strips everything up to and including the last `://`
    fn make_valid(&mut self) -> &mut Self {
        if let Some(pos) = self.serialized.rfind(SCHEME_SEPARATOR) {
            let repaired = self.serialized[pos + SCHEME_SEPARATOR.len()..].to_owned();
            part::replace_logged("registry", &mut self.serialized, repaired);
        }
        self
    }
}

impl TryFrom<&str> for Registry {
    type Error = NamingError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Registry::parse(s)
    }
}

impl TryFrom<String> for Registry {
    type Error = NamingError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Registry::parse(&s)
    }
}

impl FromStr for Registry {
    type Err = NamingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Registry::parse(s)
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
