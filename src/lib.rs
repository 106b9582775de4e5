//! Docker-style image names: `[REGISTRY/][NAMESPACE/]REPOSITORY[:TAG]`
//!
//! An [ImageName] is split into four independent parts. Parsing only cares
//! about where one part ends and the next begins; whether each part follows
//! its naming rules is asked separately, and any part can be repaired in place
//! toward the closest name that does.
//!
//! ```
//! # use imagename::ImageName;
//! let mut image: ImageName = "Docker.io/My Team/Web App:_v1".parse().unwrap();
//! assert!(!image.is_valid());
//! assert_eq!(image.make_valid().to_string(), "Docker.io/my-team/web-app:v1");
//! assert!(image.is_valid());
//! ```

#[macro_use] extern crate lazy_static;

pub mod errors;
pub mod image;

pub use crate::image::ImageName;
