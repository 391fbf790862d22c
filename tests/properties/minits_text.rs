//! Property tests for the MiniTs text pipeline.

use std::path::Path;

use proptest::prelude::*;

use recheck::domain::value_objects::LanguageLevel;
use recheck::{Frontend, MiniTs};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(source in "(?s).{0,200}") {
        let _ = MiniTs.parse_source(Path::new("/root/a.ts"), &source, LanguageLevel::LATEST);
    }

    /// PROPERTY: printed output is a fixed point of parse-then-print.
    #[test]
    fn property_printing_is_idempotent(source in "[a-z :=;'\"0-9\n]{0,120}") {
        let file = Path::new("/root/a.ts");
        let once = MiniTs.print(&MiniTs.parse_source(file, &source, LanguageLevel::LATEST));
        let twice = MiniTs.print(&MiniTs.parse_source(file, &once, LanguageLevel::LATEST));
        prop_assert_eq!(once, twice);
    }
}
