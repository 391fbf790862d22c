//! Scenario: Real Disk
//!
//! Journey: the reference project lives in a real directory and is
//! rechecked through `LocalFs`, with the shadow directory in the OS temp
//! location.

use recheck::application::RecheckOptions;
use recheck::infrastructure::minits::rename_with_suffix;
use recheck::{BoxedTransformer, LocalFs, MiniTs, RecheckUseCase};

use crate::common::*;

/// SCENARIO: a type error on disk is reported against the original file
#[test]
fn scenario_type_mismatch_on_disk() {
    let project = TestProject::new()
        .with_file("tsconfig.json", ES5_TS_CONFIG)
        .with_file("test.ts", TYPE_MISMATCH);

    let output = RecheckUseCase::new(MiniTs, LocalFs::new()).recheck(project.config_path(), &[]);

    assert_eq!(output.len(), 1, "{output:?}");
    assert!(output[0].contains("test.ts(1,7): error TS2322"), "{}", output[0]);
}

/// SCENARIO: the project tree is untouched and the shadow directory is gone
#[test]
fn scenario_project_is_left_untouched() {
    let project = TestProject::new()
        .with_file("tsconfig.json", ES5_TS_CONFIG)
        .with_file("test.ts", "let  spaced = 'x'\n")
        .with_file("node_modules/dep/index.ts", "let dep: string = 1\n");
    let before = project.snapshot();

    let transformers: Vec<BoxedTransformer<MiniTs>> =
        vec![Box::new(rename_with_suffix("renamed"))];
    let report = RecheckUseCase::new(MiniTs, LocalFs::new())
        .execute(project.config_path(), &transformers)
        .unwrap();

    assert!(report.is_clean(), "{:?}", report.diagnostics);
    assert_eq!(project.snapshot(), before);
    assert!(!report.shadow_directory.exists());
    assert!(!report.shadow_directory.starts_with(project.root.path()));
}

/// SCENARIO: a kept shadow directory holds the printed files
#[test]
fn scenario_kept_shadow_directory() {
    let project = TestProject::new()
        .with_file("tsconfig.json", ES5_TS_CONFIG)
        .with_file("src/deep/test.ts", CLEAN_SOURCE);

    let use_case = RecheckUseCase::new(MiniTs, LocalFs::new())
        .with_options(RecheckOptions::new().with_keep_shadow_directory(true));
    let report = use_case.execute(project.config_path(), &[]).unwrap();

    let shadow_copy = report.shadow_directory.join("src/deep/test.ts");
    let printed = std::fs::read_to_string(&shadow_copy).unwrap();
    insta::assert_snapshot!(printed.trim_end(), @r#"
    const henk: string = "4";
    let count: number = 4;
    "#);
}
