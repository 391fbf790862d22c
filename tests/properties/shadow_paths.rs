//! Property tests for shadow path placement.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use recheck::domain::value_objects::path::{normalize, relative_to, shadow_path};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z]{1,6}".prop_map(String::from),
        1 => Just("..".to_string()),
        1 => Just(".".to_string()),
    ]
}

fn absolute_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..6)
        .prop_map(|segments| PathBuf::from(format!("/{}", segments.join("/"))))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every output lands inside the shadow directory.
    #[test]
    fn property_shadow_path_stays_inside(output in absolute_path()) {
        let shadow = Path::new("/tmp/recheck-shadow-0");
        let placed = shadow_path(shadow, Path::new("/root/project"), &output);
        prop_assert!(placed.starts_with(shadow), "{} escaped", placed.display());
        prop_assert_eq!(normalize(&placed), placed.clone());
    }

    /// PROPERTY: outputs under the root keep their relative layout.
    #[test]
    fn property_shadow_path_mirrors_root(
        segments in proptest::collection::vec("[a-z]{1,6}", 1..5),
    ) {
        let root = Path::new("/root/project");
        let output = root.join(segments.join("/"));
        let placed = shadow_path(Path::new("/shadow"), root, &output);
        prop_assert_eq!(
            relative_to(Path::new("/shadow"), &placed),
            relative_to(root, &output)
        );
    }
}
