//! Language level value object
//!
//! The ECMAScript edition a program targets. The transform stage parses at
//! [`LanguageLevel::LATEST`]; programs use the configured level.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LanguageLevel {
    Es3,
    #[default]
    Es5,
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    EsNext,
}

impl LanguageLevel {
    pub const LATEST: LanguageLevel = LanguageLevel::EsNext;

    pub const ALL: [LanguageLevel; 11] = [
        LanguageLevel::Es3,
        LanguageLevel::Es5,
        LanguageLevel::Es2015,
        LanguageLevel::Es2016,
        LanguageLevel::Es2017,
        LanguageLevel::Es2018,
        LanguageLevel::Es2019,
        LanguageLevel::Es2020,
        LanguageLevel::Es2021,
        LanguageLevel::Es2022,
        LanguageLevel::EsNext,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageLevel::Es3 => "es3",
            LanguageLevel::Es5 => "es5",
            LanguageLevel::Es2015 => "es2015",
            LanguageLevel::Es2016 => "es2016",
            LanguageLevel::Es2017 => "es2017",
            LanguageLevel::Es2018 => "es2018",
            LanguageLevel::Es2019 => "es2019",
            LanguageLevel::Es2020 => "es2020",
            LanguageLevel::Es2021 => "es2021",
            LanguageLevel::Es2022 => "es2022",
            LanguageLevel::EsNext => "esnext",
        }
    }
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageLevel {
    type Err = String;

    /// Case-insensitive; `es6` is accepted as an alias of `es2015`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower == "es6" {
            return Ok(LanguageLevel::Es2015);
        }
        LanguageLevel::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == lower)
            .ok_or_else(|| format!("unknown language level '{s}'"))
    }
}
