use regex::Regex;
use std::sync::OnceLock;

/// Block identifier syntax: `id:: <uuid>` properties and the two
/// reference forms `((uuid))` and `[label](((uuid)))`.
///
/// A uuid is 32 hex digits in 8-4-4-4-12 groups, each dash optional,
/// matched case-insensitively. Identifiers are compared as written.
pub struct BlockRef;

const UUID: &str = r"[0-9A-Fa-f]{8}-?[0-9A-Fa-f]{4}-?[0-9A-Fa-f]{4}-?[0-9A-Fa-f]{4}-?[0-9A-Fa-f]{12}";

impl BlockRef {
    /// Placeholder rendered for a reference whose target does not exist.
    pub const DANGLING: &'static str = "<b><i>???</i></b>";

    /// Finds the first `id:: <uuid>` occurrence in `text`.
    pub fn find_id(text: &str) -> Option<&str> {
        static ID_REGEX: OnceLock<Regex> = OnceLock::new();
        let id_regex =
            ID_REGEX.get_or_init(|| Regex::new(&format!("id:: ({UUID})")).expect("Invalid id regex"));
        id_regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// `[label](((uuid)))`: label in group 1, uuid in group 2.
    pub fn titled() -> &'static Regex {
        static TITLED_REGEX: OnceLock<Regex> = OnceLock::new();
        TITLED_REGEX.get_or_init(|| {
            Regex::new(&format!(r"\[([^\]]+)\]\(\(\(({UUID})\)\)\)"))
                .expect("Invalid titled reference regex")
        })
    }

    /// `((uuid))`: uuid in group 1.
    pub fn bare() -> &'static Regex {
        static BARE_REGEX: OnceLock<Regex> = OnceLock::new();
        BARE_REGEX.get_or_init(|| {
            Regex::new(&format!(r"\(\(({UUID})\)\)")).expect("Invalid bare reference regex")
        })
    }
}
