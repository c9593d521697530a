use std::collections::BTreeMap;

use relative_path::{RelativePath, RelativePathBuf};

use super::RenderError;

/// Destination for rendered pages.
///
/// Implementations must refuse to replace a page that already exists.
pub trait PageSink {
    fn write_page(&mut self, name: &RelativePath, html: &str) -> Result<(), RenderError>;
}

/// Keeps rendered pages in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    pages: BTreeMap<RelativePathBuf, String>,
    order: Vec<RelativePathBuf>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pages.get(RelativePath::new(name)).map(String::as_str)
    }

    /// Page names in the order they were written.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageSink for MemorySink {
    fn write_page(&mut self, name: &RelativePath, html: &str) -> Result<(), RenderError> {
        if self.pages.contains_key(name) {
            return Err(RenderError::PageExists(name.to_path("")));
        }
        self.pages.insert(name.to_relative_path_buf(), html.to_string());
        self.order.push(name.to_relative_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_write_order() {
        let mut sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.write_page(RelativePath::new("index.html"), "i").unwrap();
        sink.write_page(RelativePath::new("0.html"), "0").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.names().collect::<Vec<_>>(), vec!["index.html", "0.html"]);
        assert_eq!(sink.get("0.html"), Some("0"));
    }

    #[test]
    fn refuses_second_write() {
        let mut sink = MemorySink::new();
        sink.write_page(RelativePath::new("0.html"), "first").unwrap();
        let err = sink
            .write_page(RelativePath::new("0.html"), "second")
            .unwrap_err();

        assert!(matches!(err, RenderError::PageExists(_)));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.get("0.html"), Some("first"));
    }
}
