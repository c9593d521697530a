//! Inline formatting of block content into HTML fragments.
//!
//! The pipeline order matters: later steps see the output of earlier ones.
//!
//! 1. strip one leading bullet marker
//! 2. token substitutions (`\mu`, arrows)
//! 3. line grouping: quote runs become `<blockquote>`, other lines join with `<br/>`
//! 4. emphasis: strikethrough, then bold, then italic
//!
//! Source text is trusted and never escaped.

use regex::Regex;
use std::sync::OnceLock;

use crate::parsing::blocks::{
    Block,
    kinds::{BlockQuote, Bullet},
};

/// Token substitutions, applied globally in this order.
///
/// `\mu` renders as eta; outlines written against this tool rely on it.
const SUBSTITUTIONS: [(&str, &str); 5] = [
    ("\\mu", "η"),
    ("\\rarr", "→"),
    ("->", "→"),
    ("\\larr", "←"),
    ("<-", "←"),
];

pub const LINE_BREAK: &str = "<br/>";

/// Longest title, in characters, before truncation.
pub const TITLE_MAX_CHARS: usize = 100;

struct Emphasis {
    pattern: &'static str,
    replacement: &'static str,
}

const EMPHASIS: [Emphasis; 3] = [
    Emphasis {
        pattern: r"~{2}([^~]+)~{2}",
        replacement: "<s>${1}</s>",
    },
    Emphasis {
        pattern: r"\*{2}([^*]+)\*{2}",
        replacement: "<b>${1}</b>",
    },
    Emphasis {
        pattern: r"\*([^*]+)\*",
        replacement: "<i>${1}</i>",
    },
];

fn emphasis_regexes() -> &'static [Regex] {
    static EMPHASIS_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    EMPHASIS_REGEXES.get_or_init(|| {
        EMPHASIS
            .iter()
            .map(|e| Regex::new(e.pattern).expect("Invalid emphasis regex"))
            .collect()
    })
}

/// Converts block content into an HTML fragment.
pub fn format_content(text: &str) -> String {
    let mut s = Bullet::strip_marker(text).to_string();
    for (from, to) in SUBSTITUTIONS {
        s = s.replace(from, to);
    }
    let s = group_lines(&s);
    apply_emphasis(&s)
}

/// Derived title of a block: its first content line, cut to
/// [`TITLE_MAX_CHARS`] characters plus `...`, then formatted.
pub fn block_title(block: &Block) -> String {
    let first = block.first_line();
    if first.chars().count() > TITLE_MAX_CHARS {
        let cut: String = first.chars().take(TITLE_MAX_CHARS).collect();
        format_content(&format!("{cut}..."))
    } else {
        format_content(first)
    }
}

enum Segment<'a> {
    Line(&'a str),
    Quote(Vec<&'a str>),
}

/// Joins source lines with `<br/>`, collapsing runs of `> ` lines into one
/// blockquote. Quote detection works on the source lines, before any
/// break markup exists; no break is emitted next to a blockquote.
fn group_lines(s: &str) -> String {
    let mut segments: Vec<Segment<'_>> = vec![];
    for line in s.split('\n') {
        let Some(body) = BlockQuote::strip_prefix(line) else {
            segments.push(Segment::Line(line));
            continue;
        };
        if let Some(Segment::Quote(lines)) = segments.last_mut() {
            lines.push(body);
        } else {
            segments.push(Segment::Quote(vec![body]));
        }
    }

    let mut out = String::with_capacity(s.len());
    let mut prev_was_line = false;
    for segment in segments {
        match segment {
            Segment::Line(line) => {
                if prev_was_line {
                    out.push_str(LINE_BREAK);
                }
                out.push_str(line);
                prev_was_line = true;
            }
            Segment::Quote(lines) => {
                out.push_str("<blockquote>");
                out.push_str(&lines.join(LINE_BREAK));
                out.push_str("</blockquote>");
                prev_was_line = false;
            }
        }
    }
    out
}

fn apply_emphasis(s: &str) -> String {
    let mut out = s.to_string();
    for (regex, e) in emphasis_regexes().iter().zip(EMPHASIS.iter()) {
        out = regex.replace_all(&out, e.replacement).into_owned();
    }
    out
}
