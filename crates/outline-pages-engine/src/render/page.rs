use relative_path::RelativePathBuf;

use super::{
    RenderError,
    format::{block_title, format_content},
    links::{anchor_to_block, resolve_links},
    sink::PageSink,
    template::{Slots, Template},
};
use crate::{
    models::Document,
    parsing::{Properties, blocks::Block, extract_properties},
};

/// Footer appended to every page.
pub const WATERMARK: &str = "<h6>created with <code>outline-pages</code></h6>";

pub const INDEX_PAGE: &str = "index.html";

/// Label of the inline self-link in front of inlined blocks.
const SELF_LINK: &str = "(#)";

/// Settings for `index.html` supplied from outside the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexOptions<'a> {
    /// Target of the `< HOME` link; without it the back slot stays empty.
    pub home_url: Option<&'a str>,
    /// Overrides the header's `name` property as the index title.
    pub title: Option<&'a str>,
}

/// Renders pages for one document into one template.
///
/// Holds the document by shared reference; rendering never mutates it.
pub struct PageRenderer<'a> {
    doc: &'a Document,
    template: &'a Template,
}

impl<'a> PageRenderer<'a> {
    pub fn new(doc: &'a Document, template: &'a Template) -> Self {
        Self { doc, template }
    }

    /// Writes `index.html`, then every block page depth-first from each
    /// root. Returns the number of pages written.
    pub fn write_all(
        &self,
        sink: &mut impl PageSink,
        options: &IndexOptions<'_>,
    ) -> Result<usize, RenderError> {
        sink.write_page(
            &RelativePathBuf::from(INDEX_PAGE),
            &self.render_index(options),
        )?;
        let mut written = 1;

        for root in self.doc.roots() {
            written += self.write_subtree(root, &mut *sink)?;
        }
        Ok(written)
    }

    fn write_subtree(&self, block: &Block, sink: &mut impl PageSink) -> Result<usize, RenderError> {
        let name = RelativePathBuf::from(block.page_name());
        sink.write_page(&name, &self.render_block_page(block))?;
        log::debug!("wrote {name}");

        let mut written = 1;
        for child in self.doc.children_of(block) {
            written += self.write_subtree(child, &mut *sink)?;
        }
        Ok(written)
    }

    /// The index page: header properties and the list of root blocks.
    pub fn render_index(&self, options: &IndexOptions<'_>) -> String {
        let mut content = format_properties(self.doc.properties());
        content.push_str(&self.render_list(self.doc.roots()));
        content.push_str(WATERMARK);

        let home = options.home_url.map(|url| {
            format!(
                "<a href=\"{}\">< HOME</a>",
                html_escape::encode_double_quoted_attribute(url)
            )
        });
        let title = options
            .title
            .or_else(|| self.doc.properties().get("name"))
            .unwrap_or("index");

        self.template.render(&Slots {
            back: home.as_deref(),
            title,
            content: &content,
        })
    }

    /// A block's own page: its content, properties and nested children.
    pub fn render_block_page(&self, block: &Block) -> String {
        let mut content = self.render_content(block);
        content.push_str(&format_properties(&extract_properties(
            &block.property_content,
        )));
        content.push_str(&self.render_children(block));
        content.push_str(WATERMARK);

        let back = match self.doc.parent_of(block) {
            Some(parent) => {
                let label = format!("< BACK ({})", block_title(parent));
                anchor_to_block(Some(parent), Some(&label))
            }
            None => format!("<a href=\"{INDEX_PAGE}\">< INDEX</a>"),
        };

        self.template.render(&Slots {
            back: Some(&back),
            title: &block_title(block),
            content: &content,
        })
    }

    /// Nested list of `block`'s children as shown on its page.
    pub fn render_children(&self, block: &Block) -> String {
        self.render_list(self.doc.children_of(block))
    }

    fn render_content(&self, block: &Block) -> String {
        resolve_links(&format_content(&block.content), self.doc)
    }

    /// Identified blocks with children only get a link to their own page;
    /// every other block is inlined after a `(#)` self-link, its subtree
    /// nested below it.
    fn render_list<'b>(&self, blocks: impl Iterator<Item = &'b Block>) -> String {
        let mut s = String::from("<ul>");
        for block in blocks {
            s.push_str("<li>");
            if block.has_children() && block.id.is_some() {
                s.push_str(&anchor_to_block(Some(block), None));
            } else {
                s.push_str(&anchor_to_block(Some(block), Some(SELF_LINK)));
                s.push_str("&nbsp;");
                s.push_str(&self.render_content(block));
                if block.has_children() {
                    s.push_str(&self.render_children(block));
                }
            }
            s.push_str("</li>");
        }
        s.push_str("</ul>");
        s
    }
}

/// Compact property header: `key: value` lines, formatted, in an `<h6>`.
pub fn format_properties(props: &Properties) -> String {
    let text = props
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<h6 style=\"margin: 0px\">{}</h6>", format_content(&text))
}
