pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::*;
pub use models::document::*;
pub use parsing::{ParseError, Properties, extract_properties, parse_document};
pub use render::{
    IndexOptions, MemorySink, PageRenderer, PageSink, RenderError, Template, block_title,
    format_content, resolve_links,
};
