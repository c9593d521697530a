use xi_rope::Rope;

use super::span::Span;

/// A reference to a single source line with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the line terminator).
    pub span: Span,
    /// The line text with its terminator (`\n`, `\r\n` or `\r`) removed.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` so spans cover the terminators and stay contiguous; the
/// terminator itself is stripped from `text`. A lone `\r` also ends a line.
/// A trailing newline does not produce an extra empty line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).flat_map(move |raw| {
        split_lone_cr(&raw)
            .map(|piece| {
                let start = offset;
                offset += piece.len();
                LineRef {
                    span: Span { start, end: offset },
                    text: piece.trim_end_matches(['\r', '\n']).to_string(),
                }
            })
            .collect::<Vec<_>>()
    })
}

/// Splits after every `\r` that is not part of a `\r\n` pair.
fn split_lone_cr(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let bytes = rest.as_bytes();
        let cut = bytes
            .iter()
            .enumerate()
            .position(|(i, &b)| b == b'\r' && bytes.get(i + 1) != Some(&b'\n'))
            .map_or(rest.len(), |i| i + 1);
        let (piece, tail) = rest.split_at(cut);
        rest = tail;
        Some(piece)
    })
}
