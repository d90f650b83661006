/// Pattern definitions for the mock data check
///
/// This module holds the literal marker and size threshold that decide the
/// verdict, plus the stricter declaration pattern that is only reported in
/// debug logs.

use lazy_static::lazy_static;
use regex::Regex;

/// Literal that marks an inline array passed to `useState`
pub const MOCK_MARKER: &str = "useState([";

/// A file must be strictly longer than this many characters to be flagged
pub const SIZE_THRESHOLD: usize = 1000;

/// Source of the stricter mock declaration pattern
///
/// Matches `const [worksheets, ...] = useState([ ... { ... } ... ])`. It never
/// affects the verdict.
pub const MOCK_DECLARATION_PATTERN: &str =
    r"const \[worksheets[^\]]*\] = useState\(\[[^\]]*\{[^}]*\}[^\]]*\]\)";

lazy_static! {
    /// Precompiled mock declaration pattern
    static ref MOCK_DECLARATION: Regex =
        Regex::new(MOCK_DECLARATION_PATTERN).expect("mock declaration pattern is valid");
}

/// Check whether the text contains the mock marker literal
pub fn contains_mock_marker(text: &str) -> bool {
    text.contains(MOCK_MARKER)
}

/// Check whether a character count is over the size threshold
pub fn exceeds_threshold(length: usize) -> bool {
    length > SIZE_THRESHOLD
}

/// Find the first stricter mock declaration, if any
///
/// Returns `None` when nothing matches.
pub fn find_mock_declaration(text: &str) -> Option<&str> {
    MOCK_DECLARATION.find(text).map(|m| m.as_str())
}
