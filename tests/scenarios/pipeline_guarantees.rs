//! Scenario: Pipeline Guarantees
//!
//! The behaviours every run must keep regardless of the transformers used:
//! identity runs change nothing, the overlay serves exactly what was
//! printed, failures to find or read files are reported rather than fatal,
//! and writes stay inside the shadow directory.

use std::path::{Path, PathBuf};

use recheck::application::{ConfigResolver, RecheckStage, TransformStage};
use recheck::infrastructure::fs::SubstitutingFs;
use recheck::infrastructure::minits::rename_with_suffix;
use recheck::{
    BoxedTransformer, Diagnostic, FakeFs, FileSystem, Frontend, MiniTs, Position, RecheckReport,
    RecheckUseCase,
};

const PROJECT: &[(&str, &str)] = &[
    ("/root/tsconfig.json", r#"{"include": ["**/*.ts"]}"#),
    ("/root/a.ts", "let  greeting='hi' // comment\nconst n: number = greeting"),
    ("/root/lib/b.ts", "var flag: boolean = true\nlet other: Missing = flag"),
];

fn direct_check(files: &[(&str, &str)]) -> Vec<Diagnostic> {
    let fs = FakeFs::with_files("/root", files);
    let resolved = ConfigResolver::new(&MiniTs)
        .resolve(Path::new("tsconfig.json"), &fs)
        .unwrap();
    RecheckStage::new(&MiniTs).run(&resolved, &fs)
}

fn recheck_without_transformers(files: &[(&str, &str)]) -> RecheckReport {
    RecheckUseCase::new(MiniTs, FakeFs::with_files("/root", files))
        .execute("tsconfig.json", &[])
        .unwrap()
}

fn by_location(diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
    let mut diagnostics = diagnostics;
    diagnostics.sort_by_key(|d| (d.file.clone(), d.start, d.code));
    diagnostics
}

/// PROPERTY: with no transformers the recheck sees what a direct compile sees
#[test]
fn no_op_transform_is_inert() {
    let direct = direct_check(PROJECT);
    let report = recheck_without_transformers(PROJECT);

    assert!(!direct.is_empty());
    assert!(report.transform_diagnostics.is_empty());
    assert_eq!(report.diagnostics, direct);
}

/// PROPERTY: irregular spacing does not move reported positions
#[test]
fn no_op_transform_keeps_positions() {
    let files = &[
        ("/root/tsconfig.json", "{}"),
        ("/root/a.ts", "let  a: string = 1"),
        ("/root/b.ts", "\n\n\t const   b :number=\n   'two' ;let c:Nope=b"),
    ];
    let direct = direct_check(files);
    let report = recheck_without_transformers(files);

    assert_eq!(direct[0].start, Some(Position::new(1, 6)));
    assert_eq!(direct.len(), 3);
    assert_eq!(report.diagnostics, direct);
}

/// PROPERTY: syntax errors of the inputs are not lost in the shadow copy
#[test]
fn syntax_errors_survive_the_transform() {
    for source in ["let a = 1 2", "let a = 'x", "let a = ;\nlet b = a"] {
        let files = &[("/root/tsconfig.json", "{}"), ("/root/a.ts", source)];
        let direct = direct_check(files);
        let report = recheck_without_transformers(files);

        assert!(direct.iter().any(|d| d.code < 2000), "{source}");
        assert_eq!(
            by_location(report.all_diagnostics().cloned().collect()),
            by_location(direct),
            "{source}"
        );
    }
}

/// PROPERTY: every substituted path reads as the printed transformed file
#[test]
fn substitution_is_exact() {
    let fs = FakeFs::with_files("/root", PROJECT);
    let resolved = ConfigResolver::new(&MiniTs)
        .resolve(Path::new("tsconfig.json"), &fs)
        .unwrap();
    let transformers: Vec<BoxedTransformer<MiniTs>> = vec![Box::new(rename_with_suffix("x"))];
    let outcome = TransformStage::new(&MiniTs, &fs).run(
        &resolved,
        Path::new("/tmp/shadow"),
        &transformers,
    );
    let overlay = SubstitutingFs::new(&fs, &outcome.substitutions);

    assert_eq!(outcome.substitutions.len(), 2);
    for (original, text) in PROJECT.iter().skip(1) {
        let original = Path::new(original);
        let renamed = rename_with_suffix("x").renamed_path(original);
        let expected = MiniTs.print(
            &MiniTs
                .parse_source(original, text, recheck::domain::value_objects::LanguageLevel::LATEST)
                .renamed(&renamed),
        );
        assert_eq!(overlay.read_file(&renamed), Some(expected));
        assert!(overlay.file_exists(&renamed));
    }
}

/// PROPERTY: a missing configuration is a message, and nothing is written
#[test]
fn missing_config_is_reported_not_thrown() {
    let use_case = RecheckUseCase::new(MiniTs, FakeFs::with_files("/root", PROJECT));
    let output = use_case.recheck("/root/missing.json", &[]);
    assert_eq!(output.len(), 1);
    assert!(output[0].contains("does not exist"));
    assert!(use_case.file_system().writes().is_empty());
    assert!(use_case.file_system().temporary_directories().is_empty());
}

/// PROPERTY: a listed file that cannot be read is skipped
#[test]
fn unreadable_source_is_skipped() {
    let use_case = RecheckUseCase::new(
        MiniTs,
        FakeFs::with_files(
            "/root",
            &[
                ("/root/tsconfig.json", r#"{"files": ["a.ts", "gone.ts"]}"#),
                ("/root/a.ts", "let a: string = 1"),
            ],
        ),
    );
    let report = use_case.execute("tsconfig.json", &[]).unwrap();
    assert!(!report.substitutions.contains(Path::new("/root/gone.ts")));
    assert_eq!(report.substitutions.len(), 1);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].code, 2322);
}

/// PROPERTY: no write lands on a path of the original project
#[test]
fn writes_stay_in_shadow_directory() {
    let use_case = RecheckUseCase::new(
        MiniTs,
        FakeFs::with_files(
            "/root",
            &[
                ("/root/tsconfig.json", r#"{"files": ["a.ts", "../outside/o.ts"]}"#),
                ("/root/a.ts", "let a = 1"),
                ("/outside/o.ts", "let o = 2"),
            ],
        ),
    );
    let originals: Vec<PathBuf> = use_case
        .file_system()
        .entries()
        .into_iter()
        .map(|e| e.path)
        .collect();
    let transformers: Vec<BoxedTransformer<MiniTs>> = vec![Box::new(rename_with_suffix("r"))];

    let report = use_case.execute("tsconfig.json", &transformers).unwrap();

    let writes = use_case.file_system().writes();
    assert_eq!(writes.len(), 2);
    for write in &writes {
        assert!(write.starts_with(&report.shadow_directory), "{}", write.display());
        assert!(!originals.contains(write));
    }
    assert!(writes.contains(&report.shadow_directory.join("__external__/outside/o.r.ts")));
}
