/// Quote line syntax with owned delimiter constant.
///
/// Inside a block, a content line starting with `> ` is a quote line.
/// Consecutive quote lines render as one blockquote.
pub struct BlockQuote;

impl BlockQuote {
    /// The quote line prefix.
    pub const PREFIX: &'static str = "> ";

    /// Returns the line body if `line` is a quote line with a non-empty body.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
            .filter(|body| !body.is_empty())
    }
}
