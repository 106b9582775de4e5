use crate::{
    errors::{ImageNameError, NamingError},
    image::{split, NamePart, Namespace, Registry, Repository, Tag},
};
use serde::Serialize;
use std::{
    convert::{TryFrom, TryInto},
    fmt,
    str::FromStr,
};

/// Docker-style image name, `[REGISTRY/][NAMESPACE/]REPOSITORY[:TAG]`
///
/// Each of the four parts is optional and stored independently. An absent
/// part is [None], which is different from a part that is present but breaks
/// its naming rules; a name is only valid if it has a repository and every
/// part that is present is valid. See [split] for how a string is divided
/// into parts.
///
/// The `with_*` setters replace one part and return the same name they were
/// called on, not a copy, so calls can be chained:
///
/// ```
/// # use imagename::ImageName;
/// let mut image = ImageName::new();
/// image
///     .with_registry("docker.io").unwrap()
///     .with_namespace("library").unwrap()
///     .with_repository("ubuntu").unwrap()
///     .with_tag("trusty").unwrap();
/// assert_eq!(image.to_string(), "docker.io/library/ubuntu:trusty");
/// ```
///
/// Repairs work the same way, in place: [ImageName::make_valid] repairs every
/// present part, and the `*_mut` accessors reach a single part.
#[derive(Clone, Default, Eq, PartialEq, Hash, Serialize)]
pub struct ImageName {
    registry: Option<Registry>,
    namespace: Option<Namespace>,
    repository: Option<Repository>,
    tag: Option<Tag>,
}

impl ImageName {
    /// An image name with no parts at all
    pub fn new() -> Self {
        ImageName::default()
    }

    /// Parse a [prim@str] as an [ImageName]
    ///
    /// The empty string gives an empty name. Otherwise this fails only if the
    /// string can't be split at all, or if a part that is present would be
    /// empty, as in `/ubuntu` or `ubuntu:`. Naming rules are not checked.
    pub fn parse(s: &str) -> Result<Self, ImageNameError> {
        if s.is_empty() {
            return Ok(ImageName::new());
        }
        let parts = split(s)?;
        let image = ImageName {
            registry: parts.registry.map(Registry::try_from).transpose()?,
            namespace: parts.namespace.map(Namespace::try_from).transpose()?,
            repository: Some(Repository::parse(&parts.repository)?),
            tag: parts.tag.map(Tag::try_from).transpose()?,
        };
        log::debug!("parsed image name {:?} as {:?}", s, image.as_parts());
        Ok(image)
    }

    /// Parse an optional string, treating [None] like the empty string
    pub fn parse_optional(s: Option<&str>) -> Result<Self, ImageNameError> {
        ImageName::parse(s.unwrap_or_default())
    }

    /// Build an [ImageName] from its component pieces
    ///
    /// Every piece that is present must be non-empty. Naming rules are not
    /// checked.
    pub fn from_parts(
        registry: Option<&str>,
        namespace: Option<&str>,
        repository: Option<&str>,
        tag: Option<&str>,
    ) -> Result<Self, NamingError> {
        Ok(ImageName {
            registry: registry.map(Registry::parse).transpose()?,
            namespace: namespace.map(Namespace::parse).transpose()?,
            repository: repository.map(Repository::parse).transpose()?,
            tag: tag.map(Tag::parse).transpose()?,
        })
    }

    /// Return references to the string value of each part
    pub fn as_parts(&self) -> (Option<&str>, Option<&str>, Option<&str>, Option<&str>) {
        (
            self.registry.as_ref().map(NamePart::as_str),
            self.namespace.as_ref().map(NamePart::as_str),
            self.repository.as_ref().map(NamePart::as_str),
            self.tag.as_ref().map(NamePart::as_str),
        )
    }

    /// Returns the registry, if one is set
    pub fn registry(&self) -> Option<&Registry> {
        self.registry.as_ref()
    }

    /// Returns the namespace, if one is set
    pub fn namespace(&self) -> Option<&Namespace> {
        self.namespace.as_ref()
    }

    /// Returns the repository, if one is set
    pub fn repository(&self) -> Option<&Repository> {
        self.repository.as_ref()
    }

    /// Returns the tag, if one is set
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    /// Mutable access to the registry, for repairing it in place
    pub fn registry_mut(&mut self) -> Option<&mut Registry> {
        self.registry.as_mut()
    }

    /// Mutable access to the namespace, for repairing it in place
    pub fn namespace_mut(&mut self) -> Option<&mut Namespace> {
        self.namespace.as_mut()
    }

    /// Mutable access to the repository, for repairing it in place
    pub fn repository_mut(&mut self) -> Option<&mut Repository> {
        self.repository.as_mut()
    }

    /// Mutable access to the tag, for repairing it in place
    pub fn tag_mut(&mut self) -> Option<&mut Tag> {
        self.tag.as_mut()
    }

    /// Replace the registry with a [Registry] or a string
    ///
    /// Returns this same image name. Fails only for an empty string, leaving
    /// the name unchanged.
    pub fn with_registry<T>(&mut self, registry: T) -> Result<&mut Self, NamingError>
    where
        T: TryInto<Registry>,
        NamingError: From<T::Error>,
    {
        self.registry = Some(registry.try_into()?);
        Ok(self)
    }

    /// Replace the namespace with a [Namespace] or a string
    ///
    /// Returns this same image name. Fails only for an empty string, leaving
    /// the name unchanged.
    pub fn with_namespace<T>(&mut self, namespace: T) -> Result<&mut Self, NamingError>
    where
        T: TryInto<Namespace>,
        NamingError: From<T::Error>,
    {
        self.namespace = Some(namespace.try_into()?);
        Ok(self)
    }

    /// Replace the repository with a [Repository] or a string
    ///
    /// Returns this same image name. Fails only for an empty string, leaving
    /// the name unchanged.
    pub fn with_repository<T>(&mut self, repository: T) -> Result<&mut Self, NamingError>
    where
        T: TryInto<Repository>,
        NamingError: From<T::Error>,
    {
        self.repository = Some(repository.try_into()?);
        Ok(self)
    }

    /// Replace the tag with a [Tag] or a string
    ///
    /// Returns this same image name. Fails only for an empty string, leaving
    /// the name unchanged.
    pub fn with_tag<T>(&mut self, tag: T) -> Result<&mut Self, NamingError>
    where
        T: TryInto<Tag>,
        NamingError: From<T::Error>,
    {
        self.tag = Some(tag.try_into()?);
        Ok(self)
    }

    /// Is there a valid repository, and is every other present part valid?
    pub fn is_valid(&self) -> bool {
        self.repository.as_ref().map_or(false, NamePart::is_valid)
            && self.tag.as_ref().map_or(true, NamePart::is_valid)
            && self.namespace.as_ref().map_or(true, NamePart::is_valid)
            && self.registry.as_ref().map_or(true, NamePart::is_valid)
    }

    /// Repair every present part in place, returning this same image name
    ///
    /// A missing repository stays missing.
    pub fn make_valid(&mut self) -> &mut Self {
        if let Some(registry) = &mut self.registry {
            registry.make_valid();
        }
        if let Some(namespace) = &mut self.namespace {
            namespace.make_valid();
        }
        if let Some(repository) = &mut self.repository {
            repository.make_valid();
        }
        if let Some(tag) = &mut self.tag {
            tag.make_valid();
        }
        self
    }

    /// Check the whole name, returning the first rule that fails
    ///
    /// The repository is required and checked first, followed by the tag,
    /// namespace, and registry.
    pub fn validate(&self) -> Result<(), NamingError> {
        self.repository
            .as_ref()
            .ok_or(NamingError::MissingRepository)?
            .validate()?;
        if let Some(tag) = &self.tag {
            tag.validate()?;
        }
        if let Some(namespace) = &self.namespace {
            namespace.validate()?;
        }
        if let Some(registry) = &self.registry {
            registry.validate()?;
        }
        Ok(())
    }
}

impl FromStr for ImageName {
    type Err = ImageNameError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageName::parse(s)
    }
}

/// Present path parts are joined with `/`, and the tag follows a `:`
impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_parts = [
            self.registry.as_ref().map(NamePart::as_str),
            self.namespace.as_ref().map(NamePart::as_str),
            self.repository.as_ref().map(NamePart::as_str),
        ];
        let mut first = true;
        for part in path_parts.iter().flatten() {
            if !first {
                write!(f, "/")?;
            }
            write!(f, "{}", part)?;
            first = false;
        }
        if let Some(tag) = &self.tag {
            write!(f, ":{}", tag)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
