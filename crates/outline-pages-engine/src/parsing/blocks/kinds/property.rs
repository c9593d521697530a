use regex::Regex;
use std::sync::OnceLock;

/// `key:: value` property syntax.
///
/// Keys are one or more ASCII letters, dots, underscores or hyphens. The
/// value is the rest of the line after the first `:: ` following the key.
/// Matching is unanchored, so `see also:: x` is a property line with key
/// `also`.
pub struct Property;

impl Property {
    /// Separator between key and value.
    pub const SEPARATOR: &'static str = ":: ";

    /// Pattern with the key in group 1 and the value in group 2.
    pub const PATTERN: &'static str = r"([a-zA-Z._-]+):: (.*)";

    pub fn regex() -> &'static Regex {
        static PROPERTY_REGEX: OnceLock<Regex> = OnceLock::new();
        PROPERTY_REGEX.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid property regex"))
    }

    /// Returns true if `line` contains a property anywhere.
    pub fn is_property_line(line: &str) -> bool {
        Self::regex().is_match(line)
    }
}
