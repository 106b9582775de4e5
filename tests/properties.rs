use imagename::{
    image::{NamePart, Namespace, Registry, Repository, Tag},
    ImageName,
};
use proptest::{option, prelude::*, test_runner::Config};

fn registry_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9]{1,12}\\.[a-z]{2,6}(:[0-9]{2,5})?",
        "localhost(:[0-9]{2,5})?",
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn canonical_names_round_trip(
        registry in option::of(registry_strategy()),
        namespace in option::of("[a-z0-9]([a-z0-9_]|-[a-z0-9_]){1,20}"),
        repository in "[a-z0-9_.-]{1,30}",
        tag in option::of("[a-zA-Z0-9][a-zA-Z0-9_.-]{0,40}"),
    ) {
        let image = ImageName::from_parts(
            registry.as_deref(),
            namespace.as_deref(),
            Some(repository.as_str()),
            tag.as_deref(),
        ).unwrap();
        prop_assert!(image.is_valid());
        let reparsed = ImageName::parse(&image.to_string()).unwrap();
        prop_assert_eq!(reparsed.as_parts(), image.as_parts());
    }

    #[test]
    fn registries_with_paths_round_trip(
        host in "[a-z0-9]{1,12}\\.[a-z]{2,6}",
        path in prop::collection::vec("[a-z0-9]{1,8}", 1..4),
        namespace in "[a-z0-9]([a-z0-9_]|-[a-z0-9_]){1,20}",
        repository in "[a-z0-9_.-]{1,30}",
    ) {
        let registry = format!("{}/{}", host, path.join("/"));
        let raw = format!("{}/{}/{}", registry, namespace, repository);
        let image = ImageName::parse(&raw).unwrap();
        prop_assert_eq!(
            image.as_parts(),
            (Some(registry.as_str()), Some(namespace.as_str()), Some(repository.as_str()), None)
        );
        prop_assert_eq!(image.to_string(), raw);
    }

    #[test]
    fn namespace_repair_is_idempotent_and_valid(s in "\\PC{1,300}") {
        let mut once = Namespace::parse(&s).unwrap();
        once.make_valid();
        prop_assert!(once.is_valid(), "{:?} repaired to {:?}", s, once);
        let mut twice = once.clone();
        twice.make_valid();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn degenerate_namespaces_repair_to_valid(s in "[- _.A-Z$]{1,6}") {
        let mut namespace = Namespace::parse(&s).unwrap();
        namespace.make_valid();
        prop_assert!(namespace.is_valid(), "{:?} repaired to {:?}", s, namespace);
        prop_assert!(namespace.as_str().len() >= Namespace::MIN_LEN);
    }

    #[test]
    fn repository_repair_is_idempotent(s in "\\PC{1,60}") {
        let mut once = Repository::parse(&s).unwrap();
        once.make_valid();
        prop_assert!(once.is_valid() || once.as_str().is_empty());
        let mut twice = once.clone();
        twice.make_valid();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn tag_repair_is_idempotent(s in "\\PC{1,200}") {
        let mut once = Tag::parse(&s).unwrap();
        once.make_valid();
        prop_assert!(once.is_valid() || once.as_str().is_empty());
        let mut twice = once.clone();
        twice.make_valid();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn registry_repair_is_idempotent(s in "(https?://)?[a-z.:/]{1,30}") {
        let mut once = Registry::parse(&s).unwrap();
        once.make_valid();
        prop_assert!(!once.has_scheme());
        let mut twice = once.clone();
        twice.make_valid();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn repairing_valid_names_changes_nothing(
        namespace in "[a-z0-9]([a-z0-9_]|-[a-z0-9_]){1,20}",
        repository in "[a-z0-9_.-]{1,30}",
        tag in "[a-zA-Z0-9][a-zA-Z0-9_.-]{0,40}",
    ) {
        let mut image = ImageName::from_parts(
            Some("docker.io"),
            Some(namespace.as_str()),
            Some(repository.as_str()),
            Some(tag.as_str()),
        ).unwrap();
        prop_assert!(image.is_valid());
        let before = image.to_string();
        prop_assert_eq!(image.make_valid().to_string(), before);
    }

    #[test]
    fn parse_never_panics(s in "\\PC{0,80}") {
        if let Ok(mut image) = ImageName::parse(&s) {
            image.make_valid();
            let _ = image.validate();
        }
    }
}
