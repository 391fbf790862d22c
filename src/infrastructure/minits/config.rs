//! MiniTs project configuration
//!
//! A `tsconfig.json`-shaped JSON document: `compilerOptions`, `files`,
//! `include` and `exclude`. Comments are allowed.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::domain::entities::{Diagnostic, DiagnosticCategory, ParsedConfig, Position, RawConfig};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::path::absolutize;
use crate::domain::value_objects::LanguageLevel;

/// Patterns used when neither `files` nor `include` is given
const DEFAULT_INCLUDE: &str = "**/*";

/// Excluded when the configuration has no `exclude`
const DEFAULT_EXCLUDE: &str = "node_modules";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompilerOptions {
    pub target: LanguageLevel,
    pub allow_js: bool,
}

impl CompilerOptions {
    /// File extensions that belong to a project with these options
    pub fn supported_extensions(&self) -> Vec<String> {
        let mut extensions = vec![".ts".to_string()];
        if self.allow_js {
            extensions.push(".js".to_string());
        }
        extensions
    }
}

/// Parse configuration text; `//` and `/* */` comments are ignored
pub fn parse_config_text(path: &std::path::Path, text: &str) -> Result<Value, Diagnostic> {
    serde_json::from_str(&strip_comments(text)).map_err(|e| {
        Diagnostic::at(
            path,
            Position::new(e.line().max(1), e.column().max(1)),
            DiagnosticCategory::Error,
            5014,
            e.to_string(),
        )
    })
}

/// Interpret a parsed configuration, listing project files through `fs`
pub fn interpret(raw: &RawConfig, fs: &dyn FileSystem) -> ParsedConfig<CompilerOptions> {
    let mut errors = Vec::new();
    let config_name = raw.path().display().to_string();

    let Some(root) = raw.value().as_object() else {
        errors.push(error(
            5092,
            format!("The root value of a '{config_name}' file must be an object."),
        ));
        return ParsedConfig {
            file_names: Vec::new(),
            options: CompilerOptions::default(),
            errors,
        };
    };

    let options = match root.get("compilerOptions") {
        None => CompilerOptions::default(),
        Some(Value::Object(map)) => compiler_options(map, &mut errors),
        Some(_) => {
            errors.push(requires_type("compilerOptions", "object"));
            CompilerOptions::default()
        }
    };

    let files = root
        .get("files")
        .and_then(|value| string_list(value, "files", false, &mut errors));
    let include = root
        .get("include")
        .and_then(|value| string_list(value, "include", true, &mut errors));
    let exclude = root
        .get("exclude")
        .and_then(|value| string_list(value, "exclude", false, &mut errors))
        .unwrap_or_else(|| vec![DEFAULT_EXCLUDE.to_string()]);

    let mut file_names: Vec<PathBuf> = files
        .iter()
        .flatten()
        .map(|file| absolutize(raw.root_dir(), std::path::Path::new(file)))
        .collect();

    let include = match (&files, include) {
        (_, Some(include)) => Some(include),
        (None, None) => Some(vec![DEFAULT_INCLUDE.to_string()]),
        (Some(_), None) => None,
    };

    if let Some(include) = &include {
        let listed = fs.read_directory(
            raw.root_dir(),
            &options.supported_extensions(),
            &exclude,
            include,
            None,
        );
        for path in listed {
            if !file_names.contains(&path) {
                file_names.push(path);
            }
        }
    }

    if file_names.is_empty() && errors.is_empty() {
        errors.push(error(
            18003,
            format!(
                "No inputs were found in config file '{}'. Specified 'include' paths were '{}' and 'exclude' paths were '{}'.",
                config_name,
                json_list(include.as_deref().unwrap_or_default()),
                json_list(&exclude),
            ),
        ));
    }

    ParsedConfig {
        file_names,
        options,
        errors,
    }
}

fn compiler_options(map: &Map<String, Value>, errors: &mut Vec<Diagnostic>) -> CompilerOptions {
    let mut options = CompilerOptions::default();
    for (key, value) in map {
        match key.as_str() {
            "target" => match value.as_str() {
                Some(text) => match text.parse::<LanguageLevel>() {
                    Ok(level) => options.target = level,
                    Err(_) => errors.push(error(
                        6046,
                        format!(
                            "Argument for '--target' option must be: {}.",
                            LanguageLevel::ALL
                                .iter()
                                .map(|level| format!("'{level}'"))
                                .collect::<Vec<_>>()
                                .join(", ")
                        ),
                    )),
                },
                None => errors.push(requires_type("target", "string")),
            },
            "allowJs" => match value.as_bool() {
                Some(flag) => options.allow_js = flag,
                None => errors.push(requires_type("allowJs", "boolean")),
            },
            other => errors.push(error(5023, format!("Unknown compiler option '{other}'."))),
        }
    }
    options
}

/// Array of strings; a lone string is accepted when `allow_single` is set
fn string_list(
    value: &Value,
    option: &str,
    allow_single: bool,
    errors: &mut Vec<Diagnostic>,
) -> Option<Vec<String>> {
    match value {
        Value::String(single) if allow_single => Some(vec![single.clone()]),
        Value::Array(items) => {
            let strings: Option<Vec<String>> = items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect();
            if strings.is_none() {
                errors.push(requires_type(option, "Array"));
            }
            strings
        }
        _ => {
            errors.push(requires_type(option, "Array"));
            None
        }
    }
}

fn requires_type(option: &str, ty: &str) -> Diagnostic {
    error(
        5024,
        format!("Compiler option '{option}' requires a value of type {ty}."),
    )
}

fn error(code: u32, message: String) -> Diagnostic {
    Diagnostic::global(DiagnosticCategory::Error, code, message)
}

fn json_list(items: &[String]) -> String {
    Value::from(items.to_vec()).to_string()
}

/// Replace comments with spaces so error positions still line up
fn strip_comments(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    let mut in_string = false;
    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' && i + 1 < chars.len() {
                out.push(chars[i + 1]);
                i += 1;
            } else if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        match (c, chars.get(i + 1)) {
            ('"', _) => {
                in_string = true;
                out.push(c);
                i += 1;
            }
            ('/', Some('/')) => {
                while i < chars.len() && chars[i] != '\n' {
                    out.push(' ');
                    i += 1;
                }
            }
            ('/', Some('*')) => {
                out.push_str("  ");
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    out.push(if chars[i] == '\n' { '\n' } else { ' ' });
                    i += 1;
                }
                if i < chars.len() {
                    out.push_str("  ");
                    i += 2;
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}
