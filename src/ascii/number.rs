use crate::pattern::{Pattern, PatternParser};
use once_cell::sync::Lazy;

static NATNUM: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("[0-9]+").expect("natnum pattern init failed"));
static INTEGER: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("-?[0-9]+").expect("integer pattern init failed"));

/// One or more decimal digits: `[0-9]+`
pub fn natnum() -> PatternParser {
    PatternParser::new(NATNUM.clone())
}

/// Decimal digits with an optional leading minus: `-?[0-9]+`
pub fn integer() -> PatternParser {
    PatternParser::new(INTEGER.clone())
}
