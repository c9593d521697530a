use super::blocks::kinds::Property;

/// Key/value pairs taken from `key:: value` lines.
///
/// Keeps first-seen key order so rendered property headers are stable;
/// re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties(Vec<(String, String)>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, overwriting any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extracts every `key:: value` occurrence from `text`.
///
/// The value is the literal remainder of the line; no validation happens.
/// Later occurrences of a key win.
pub fn extract_properties(text: &str) -> Properties {
    let mut props = Properties::new();
    for caps in Property::regex().captures_iter(text) {
        props.insert(&caps[1], &caps[2]);
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(props: &Properties) -> Vec<(&str, &str)> {
        props.iter().collect()
    }

    #[test]
    fn extracts_header_properties() {
        let props = extract_properties("title:: My Notes\nname:: notes\ntags:: a, b");
        assert_eq!(
            pairs(&props),
            vec![("title", "My Notes"), ("name", "notes"), ("tags", "a, b")]
        );
    }

    #[test]
    fn last_duplicate_wins_in_first_position() {
        let props = extract_properties("a:: 1\nb:: 2\na:: 3");
        assert_eq!(pairs(&props), vec![("a", "3"), ("b", "2")]);
        assert_eq!(props.get("a"), Some("3"));
    }

    #[test]
    fn value_is_rest_of_line() {
        let props = extract_properties("url:: https://example.com/a:: b");
        assert_eq!(props.get("url"), Some("https://example.com/a:: b"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn empty_value_is_kept() {
        let props = extract_properties("empty:: \nnext:: x");
        assert_eq!(props.get("empty"), Some(""));
        assert_eq!(props.get("next"), Some("x"));
    }

    #[test]
    fn plain_text_has_no_properties() {
        assert!(extract_properties("nothing here\n- a bullet").is_empty());
        assert!(extract_properties("").is_empty());
    }
}
