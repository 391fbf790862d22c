//! Scenario: Reference Project
//!
//! Journey: a project at `/root` with `tsconfig.json` targeting es5 and a
//! single `test.ts`, rechecked with and without transformers.

use std::path::{Path, PathBuf};

use recheck::application::RecheckOptions;
use recheck::infrastructure::minits::rename_with_suffix;
use recheck::{BoxedTransformer, FakeFs, FileSystem, MiniTs, RecheckUseCase};

use crate::common::*;

fn project(source: &str) -> RecheckUseCase<MiniTs, FakeFs> {
    RecheckUseCase::new(
        MiniTs,
        FakeFs::with_files(
            "/root",
            &[("/root/tsconfig.json", ES5_TS_CONFIG), ("/root/test.ts", source)],
        ),
    )
}

/// SCENARIO: a type-incompatible assignment is reported once
#[test]
fn scenario_type_mismatch_is_reported_once() {
    let output = project(TYPE_MISMATCH).recheck("/root/tsconfig.json", &[]);

    assert_eq!(output.len(), 1, "expected one diagnostic, got {output:?}");
    assert!(output[0].contains("TS2322"), "{}", output[0]);
    assert!(output[0].contains("test.ts"), "{}", output[0]);
    assert_eq!(
        output[0].trim_end(),
        "test.ts(1,7): error TS2322: Type 'number' is not assignable to type 'string'."
    );
}

/// SCENARIO: a clean project yields nothing
#[test]
fn scenario_clean_project_is_silent() {
    let output = project(CLEAN_SOURCE).recheck("/root/tsconfig.json", &[]);
    assert!(output.is_empty(), "unexpected diagnostics: {output:?}");
}

/// SCENARIO: renaming every file keeps a clean project clean
#[test]
fn scenario_rename_transformer() {
    let use_case = project(CLEAN_SOURCE)
        .with_options(RecheckOptions::new().with_keep_shadow_directory(true));
    let transformers: Vec<BoxedTransformer<MiniTs>> =
        vec![Box::new(rename_with_suffix("renamed"))];

    let report = use_case
        .execute("/root/tsconfig.json", &transformers)
        .expect("pipeline should run");

    assert_eq!(report.substitutions.len(), 1);
    let entry = report.substitutions.iter().next().unwrap();
    assert_eq!(entry.from_path(), Path::new("/root/test.renamed.ts"));
    assert!(entry.to_path().starts_with(&report.shadow_directory));
    assert_eq!(
        entry.to_path(),
        report.shadow_directory.join("test.renamed.ts")
    );
    assert!(use_case.file_system().file_exists(entry.to_path()));
    assert!(report.diagnostics.is_empty());
    assert!(report.transform_diagnostics.is_empty());
}

/// SCENARIO: the configuration file does not exist
#[test]
fn scenario_missing_configuration() {
    let use_case = RecheckUseCase::new(MiniTs, FakeFs::with_files("/root", &[]));
    let output = use_case.recheck("tsconfig.json", &[]);
    assert_eq!(
        output,
        vec!["Configuration file tsconfig.json does not exist.".to_string()]
    );
}

/// SCENARIO: type errors spread over several files are all reported
#[test]
fn scenario_errors_across_files() {
    let use_case = RecheckUseCase::new(
        MiniTs,
        FakeFs::with_files(
            "/root",
            &[
                ("/root/tsconfig.json", r#"{"include": ["src/**/*"]}"#),
                ("/root/src/a.ts", "let shared = 1"),
                ("/root/src/b.ts", "let shared = 2\nlet text: string = shared"),
                ("/root/scratch.ts", "let ignored: string = 1"),
            ],
        ),
    );
    let report = use_case.execute("tsconfig.json", &[]).unwrap();
    let files: Vec<PathBuf> = report
        .diagnostics
        .iter()
        .filter_map(|d| d.file().map(Path::to_path_buf))
        .collect();
    assert!(files.iter().all(|f| f.starts_with("/root/src")));
    let codes: Vec<u32> = report.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![2451, 2451, 2322]);
}
