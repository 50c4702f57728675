//! Replacement templates.
//!
//! Templates use `$N` to insert capture group `N` (`$0` is the whole match)
//! and `\` to take the next character literally. The engine's expander only
//! knows `${N}` and `$$`, so templates are translated before use.

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Group(usize),
}

/// A parsed replacement template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template(Vec<Piece>);

impl Template {
    /// Parse `template` for an expression with `groups` capture groups,
    /// counting the whole match.
    ///
    /// The first digit after `$` is always part of the reference; each
    /// further digit is taken only while the number stays below `groups`.
    pub fn parse(template: &str, groups: usize) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(next) = chars.next() {
                        literal.push(next);
                    }
                }
                '$' => {
                    let Some(first) = chars.peek().and_then(|c| c.to_digit(10)) else {
                        literal.push(c);
                        continue;
                    };
                    chars.next();
                    let mut group = first as usize;
                    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10))
                        && group * 10 + (digit as usize) < groups
                    {
                        group = group * 10 + digit as usize;
                        chars.next();
                    }
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Group(group));
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Template(pieces)
    }

    /// The template in the engine's expansion syntax.
    pub fn to_expansion(&self) -> String {
        let mut expansion = String::new();
        for piece in &self.0 {
            match piece {
                Piece::Literal(text) => expansion.push_str(&text.replace('$', "$$")),
                Piece::Group(group) => {
                    expansion.push_str("${");
                    expansion.push_str(&group.to_string());
                    expansion.push('}');
                }
            }
        }
        expansion
    }
}

/// Escape `template` so it inserts literally.
pub(crate) fn escape(template: &str) -> String {
    let mut escaped = String::with_capacity(template.len());
    for c in template.chars() {
        if matches!(c, '\\' | '$') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
