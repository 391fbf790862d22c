//! Test fixtures - reusable configuration and source text.

/// The configuration used by the reference scenarios
pub const ES5_TS_CONFIG: &str = r#"{"compilerOptions": {"target": "es5"}, "include": "**/*.ts"}"#;

/// Assigns a number to a string-typed constant
pub const TYPE_MISMATCH: &str = "const henk: string = 4\n";

pub const CLEAN_SOURCE: &str = "const henk: string = \"4\"\nlet count: number = 4\n";
