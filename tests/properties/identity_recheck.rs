//! Property tests for identity rechecks.
//!
//! Projects are generated with irregular spacing and line breaks, so
//! reported positions only match when the shadow copies keep the layout.

use std::path::Path;

use proptest::prelude::*;

use recheck::application::{ConfigResolver, RecheckStage};
use recheck::{FakeFs, MiniTs, RecheckUseCase};

fn gap(min: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t')], min..min + 3)
        .prop_map(|chars| chars.into_iter().collect())
}

fn declaration() -> impl Strategy<Value = String> {
    let kind = prop_oneof![Just("const"), Just("let"), Just("var")];
    let name = "[a-d]";
    let annotation = (
        prop_oneof![
            Just(""),
            Just("string"),
            Just("number"),
            Just("boolean"),
            Just("any"),
            Just("Thing"),
        ],
        gap(0),
        gap(0),
    )
        .prop_map(|(ty, before, after)| {
            if ty.is_empty() {
                String::new()
            } else {
                format!("{before}:{after}{ty}")
            }
        });
    let initializer = prop_oneof![
        Just("\"text\"".to_string()),
        Just("'text'".to_string()),
        Just("42".to_string()),
        Just("true".to_string()),
        "[a-e]".prop_map(String::from),
    ];
    let before_value = prop_oneof![gap(0), gap(1).prop_map(|g| format!("\n{g}"))];
    (kind, gap(1), name, annotation, gap(0), before_value, initializer)
        .prop_map(|(kind, g1, name, annotation, g2, g3, init)| {
            format!("{kind}{g1}{name}{annotation}{g2}={g3}{init}")
        })
}

fn source_file() -> impl Strategy<Value = String> {
    let separator = prop_oneof![Just(";"), Just("\n"), Just("\n\n  ")];
    proptest::collection::vec((declaration(), separator), 0..5).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(declaration, separator)| format!("{declaration}{separator}"))
            .collect::<String>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: without transformers the recheck equals a direct check.
    #[test]
    fn property_no_op_transform_is_inert(
        sources in proptest::collection::vec(source_file(), 1..4),
    ) {
        let mut files = vec![("/root/tsconfig.json".to_string(), "{}".to_string())];
        for (i, source) in sources.iter().enumerate() {
            files.push((format!("/root/f{i}.ts"), source.clone()));
        }
        let borrowed: Vec<(&str, &str)> =
            files.iter().map(|(p, d)| (p.as_str(), d.as_str())).collect();

        let fs = FakeFs::with_files("/root", &borrowed);
        let resolved = ConfigResolver::new(&MiniTs)
            .resolve(Path::new("/root/tsconfig.json"), &fs)
            .unwrap();
        let direct = RecheckStage::new(&MiniTs).run(&resolved, &fs);

        let report = RecheckUseCase::new(MiniTs, FakeFs::with_files("/root", &borrowed))
            .execute("/root/tsconfig.json", &[])
            .unwrap();

        prop_assert!(report.transform_diagnostics.is_empty());
        prop_assert_eq!(report.diagnostics, direct);
    }
}
