/// Bullet line syntax with owned delimiter constants.
///
/// A block starts on a line made of zero or more tabs followed by `- `.
/// Anything after the marker belongs to the block's first content line.
pub struct Bullet;

impl Bullet {
    /// The bullet marker that opens a block.
    pub const MARKER: &'static str = "- ";

    /// The only character that counts towards indentation.
    pub const INDENT: char = '\t';

    /// Returns the indent (leading tab count) if `line` starts a block.
    ///
    /// Spaces never count as indentation: `"  - x"` is a continuation line.
    pub fn indent_of(line: &str) -> Option<usize> {
        let rest = line.trim_start_matches(Self::INDENT);
        if rest.starts_with(Self::MARKER) {
            Some(line.len() - rest.len())
        } else {
            None
        }
    }

    /// Strips one leading bullet marker, if present.
    pub fn strip_marker(s: &str) -> &str {
        s.strip_prefix(Self::MARKER).unwrap_or(s)
    }
}
