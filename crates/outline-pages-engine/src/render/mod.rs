//! # Page Rendering
//!
//! Turns a parsed [`crate::Document`] into HTML pages.
//!
//! ## Modules
//!
//! - **`format`**: inline formatting of block content (`format_content`, `block_title`)
//! - **`links`**: block reference resolution against the document's id index
//! - **`template`**: placeholder substitution into the page template
//! - **`page`**: `PageRenderer`, the index page and one page per block
//! - **`sink`**: `PageSink` destinations for rendered pages

pub mod format;
pub mod links;
pub mod page;
pub mod sink;
pub mod template;

use std::path::PathBuf;

use crate::io::IoError;

pub use format::{block_title, format_content};
pub use links::resolve_links;
pub use page::{IndexOptions, PageRenderer};
pub use sink::{MemorySink, PageSink};
pub use template::{Slots, Template};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Page already exists: {0}")]
    PageExists(PathBuf),
    #[error(transparent)]
    Io(#[from] IoError),
}
