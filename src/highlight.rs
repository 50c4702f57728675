//! Terminal rendering of match results.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, ContentStyle, PrintStyledContent};

use crate::fragment::{Fragment, RangeFragment};
use crate::text_range::TextRange;

/// How a span of a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Plain,
    Match,
    SubMatch,
}

/// Split `line` into painted spans from a stream of match fragments.
///
/// `Text` fragments are not needed: anything outside a match is plain.
/// Sub-matches are painted only where they nest inside their match without
/// overlapping an earlier sub-match.
pub fn paint<'t>(line: &'t str, fragments: &[RangeFragment]) -> Vec<(Paint, &'t str)> {
    let mut spans = Vec::new();
    let mut push = |paint: Paint, start: usize, end: usize| {
        if start < end {
            spans.push((paint, TextRange::new(start, end).slice(line)));
        }
    };

    let mut cursor = 0;
    let mut fragments = fragments.iter().peekable();
    while let Some(fragment) = fragments.next() {
        let &Fragment::Match(range) = fragment else {
            continue;
        };
        if range.start < cursor {
            continue;
        }
        push(Paint::Plain, cursor, range.start);
        let mut inner = range.start;
        while let Some(&&Fragment::SubMatch(group, _)) = fragments.peek() {
            fragments.next();
            if group.start < inner || group.end > range.end {
                continue;
            }
            push(Paint::Match, inner, group.start);
            push(Paint::SubMatch, group.start, group.end);
            inner = group.end;
        }
        push(Paint::Match, inner, range.end);
        cursor = range.end;
    }
    push(Paint::Plain, cursor, TextRange::whole(line).end);
    spans
}

/// Styles used when writing highlighted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlighter {
    pub match_style: ContentStyle,
    pub sub_match_style: ContentStyle,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self {
            match_style: ContentStyle {
                foreground_color: Some(Color::Red),
                attributes: Attribute::Bold.into(),
                ..ContentStyle::default()
            },
            sub_match_style: ContentStyle {
                foreground_color: Some(Color::Yellow),
                attributes: Attribute::Underlined.into(),
                ..ContentStyle::default()
            },
        }
    }
}

impl Highlighter {
    /// No styling at all; output is the line unchanged.
    pub fn plain() -> Self {
        Self {
            match_style: ContentStyle::default(),
            sub_match_style: ContentStyle::default(),
        }
    }

    /// Queue `line` to `out` with its matches styled. No newline is written.
    pub fn write_line(
        &self,
        out: &mut impl Write,
        line: &str,
        fragments: &[RangeFragment],
    ) -> io::Result<()> {
        for (kind, text) in paint(line, fragments) {
            let style = match kind {
                Paint::Plain => ContentStyle::default(),
                Paint::Match => self.match_style,
                Paint::SubMatch => self.sub_match_style,
            };
            queue!(out, PrintStyledContent(style.apply(text)))?;
        }
        Ok(())
    }
}
