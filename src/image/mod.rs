//! Image names and the parts they are made of


mod name;
mod namespace;
mod part;
mod registry;
mod repository;
mod split;
mod tag;

pub use name::ImageName;
pub use namespace::Namespace;
pub use part::NamePart;
pub use registry::Registry;
pub use repository::Repository;
pub use split::{split, SplitName};
pub use tag::Tag;
