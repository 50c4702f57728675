//! Human-readable, numbered explanation of an expression tree.
//!
//! ```text
//! Match sequence:
//!     1) Left angle bracket
//!     2) Match one or more times:
//!         2.1) Any character except right angle bracket
//!     3) Right angle bracket
//! ```
//!
//! Indentation is one tab per nesting level. Capturing groups are numbered in
//! the order they open, counting across the whole tree.

use itertools::Itertools;
use phf::{Map, phf_map};

use super::{Collect, Element, MatchOptions, Repeat, SpecialCharacter};

/// Readable names for punctuation and whitespace.
const CHAR_NAMES: Map<char, &'static str> = phf_map! {
    ' ' => "Space",
    '\t' => "Tab",
    '\r' => "Carriage return",
    '\n' => "New-line",
    '\\' => "Slash",
    '/' => "Forward slash",
    '`' => "Backtick",
    '"' => "Double quotation mark",
    '\'' => "Single quotation mark",
    '.' => "Period",
    ',' => "Comma",
    ';' => "Semicolon",
    ':' => "Colon",
    '?' => "Question mark",
    '*' => "Star",
    '+' => "Plus",
    '(' => "Left parenthesis",
    ')' => "Right parenthesis",
    '[' => "Left square bracket",
    ']' => "Right square bracket",
    '<' => "Left angle bracket",
    '>' => "Right angle bracket",
};

impl Element {
    /// Describe the pattern as numbered steps of readable sentences.
    pub fn steps(&self) -> String {
        let mut groups = GroupCounter::default();
        self.describe(&StepContext::root(), &mut groups)
    }

    fn describe(&self, ctx: &StepContext, groups: &mut GroupCounter) -> String {
        match self {
            Element::FirstInInput => "First character of the input".into(),
            Element::LastInInput => "Last character of the input".into(),
            Element::NewLine => "New line".into(),
            Element::EndOfPreviousMatch => "End of previous match".into(),
            Element::Start => "First character of line".into(),
            Element::End => "Last character of line".into(),
            Element::Any => "Any one character".into(),
            Element::Skip => "Any character sequence".into(),
            Element::Space => "Space".into(),
            Element::Spaces => "Multiple spaces".into(),
            Element::NotSpace => "Non-space character".into(),
            Element::Digit => "Digit".into(),
            Element::NotDigit => "Non-digit".into(),
            Element::Word => "Letter".into(),
            Element::Words => "Sequence of letters".into(),
            Element::NotWord => "Non-letter".into(),
            Element::Boundary => "Word boundary".into(),
            Element::NotBoundary => "Non-word boundary".into(),
            Element::Quote => "Double quotation mark".into(),
            Element::Apostrophe => "Single quotation mark".into(),
            Element::BackReference(id) => format!("Previous match #{}", id + 1),
            Element::Special(special) => special.describe(),
            Element::CharIn(chars) => match chars.chars().count() {
                0 => String::new(),
                1 => readable_text(chars),
                _ => char_list(chars),
            },
            Element::CharNotIn(chars) => match chars.chars().count() {
                0 => String::new(),
                1 => format!("Any character except {}", readable_text(chars).to_lowercase()),
                _ => format!("Any character except {}", char_list(chars)),
            },
            Element::Text(text) => text.clone(),
            Element::SetOptions(options) => set_options_phrase(options),
            Element::ResetOptions(options) => reset_options_phrase(options),
            Element::Repeating(element, times) => {
                let children = describe_children([element.as_ref()], ctx, groups);
                format!("{}{children}", times.describe())
            }
            Element::Capture(element) => {
                let group = groups.next();
                let children = describe_children([element.as_ref()], ctx, groups);
                format!("Match and capture #{group}{children}")
            }
            Element::Either(alternatives) => {
                let children = describe_children(alternatives, ctx, groups);
                format!("Match any one of{children}")
            }
            Element::Sequence(items) => {
                let children = describe_children(items, ctx, groups);
                format!("Match sequence{children}")
            }
            Element::Section(element) => {
                let children = describe_children([element.as_ref()], ctx, groups);
                format!("Match sequence{children}")
            }
            Element::Atomic(element) => {
                let children = describe_children([element.as_ref()], ctx, groups);
                format!("Match whole or none of pattern{children}")
            }
            Element::LookAhead(element) => {
                let children = describe_children([element.as_ref()], ctx, groups);
                format!("Look ahead pattern{children}")
            }
            Element::LookAheadInversed(element) => {
                let children = describe_children([element.as_ref()], ctx, groups);
                format!("Look ahead pattern not to match{children}")
            }
            Element::LookBehind(element) => {
                let children = describe_children([element.as_ref()], ctx, groups);
                format!("Look behind for pattern{children}")
            }
            Element::LookBehindInversed(element) => {
                let children = describe_children([element.as_ref()], ctx, groups);
                format!("Look behind for pattern not to match{children}")
            }
        }
    }
}

/// Position of a node in the rendered outline.
struct StepContext {
    depth: usize,
    prefix: String,
}

impl StepContext {
    fn root() -> Self {
        Self {
            depth: 1,
            prefix: String::new(),
        }
    }

    fn child(&self, index: usize) -> Self {
        let prefix = if self.prefix.is_empty() {
            index.to_string()
        } else {
            format!("{}.{index}", self.prefix)
        };
        Self {
            depth: self.depth + 1,
            prefix,
        }
    }
}

/// Numbers capturing groups in the order they are rendered.
struct GroupCounter(usize);

impl Default for GroupCounter {
    fn default() -> Self {
        Self(1)
    }
}

impl GroupCounter {
    fn next(&mut self) -> usize {
        let group = self.0;
        self.0 += 1;
        group
    }
}

fn describe_children<'a>(
    children: impl IntoIterator<Item = &'a Element>,
    ctx: &StepContext,
    groups: &mut GroupCounter,
) -> String {
    let tabs = "\t".repeat(ctx.depth);
    let mut result = String::from(":");
    for (i, child) in children.into_iter().enumerate() {
        let child_ctx = ctx.child(i + 1);
        result.push('\n');
        result.push_str(&tabs);
        result.push_str(&child_ctx.prefix);
        result.push_str(") ");
        result.push_str(&child.describe(&child_ctx, groups));
    }
    result
}

fn readable_text(text: &str) -> String {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => readable_char(ch),
        _ => text.to_string(),
    }
}

fn readable_char(ch: char) -> String {
    CHAR_NAMES
        .get(&ch)
        .map(|name| name.to_string())
        .unwrap_or_else(|| ch.to_string())
}

/// `"a, b or c"`
fn char_list(chars: &str) -> String {
    let names = chars.chars().map(|ch| readable_char(ch).to_lowercase()).collect_vec();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.iter().join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

fn set_options_phrase(options: &MatchOptions) -> String {
    let mut opts = Vec::new();
    if options.match_case {
        opts.push("match case");
    }
    if options.anchors_match_lines {
        opts.push("match anchors to line boundaries");
    }
    if options.any_includes_line_chars {
        opts.push("include line characters when matching any");
    }
    if options.unicode_word_boundaries {
        opts.push("use unicode word boundaries");
    }
    format!("Set options: {}", opts.join(", "))
}

fn reset_options_phrase(options: &MatchOptions) -> String {
    let mut opts = Vec::new();
    if options.match_case {
        opts.push("do not match case");
    }
    if options.anchors_match_lines {
        opts.push("match anchors to input boundaries");
    }
    if options.any_includes_line_chars {
        opts.push("exclude line characters when matching any");
    }
    if options.unicode_word_boundaries {
        opts.push("use ascii word boundaries");
    }
    format!("Set options: {}", opts.join(", "))
}

impl SpecialCharacter {
    fn describe(&self) -> String {
        match self {
            SpecialCharacter::Slash => "Slash".into(),
            SpecialCharacter::Bell => "Bell".into(),
            SpecialCharacter::Backspace => "Backspace".into(),
            SpecialCharacter::Escape => "Escape".into(),
            SpecialCharacter::Formfeed => "Formfeed".into(),
            SpecialCharacter::Tab => "Tab".into(),
            SpecialCharacter::Grapheme => "Grapheme".into(),
            SpecialCharacter::Control(name) => format!("Control character {name}"),
            SpecialCharacter::Hex(code) => format!("Character {code:x}"),
            SpecialCharacter::Named(name) => format!("Unicode character named {name}"),
            SpecialCharacter::WithUnicodeProperty(name) => {
                format!("Unicode character with property {name}")
            }
            SpecialCharacter::WithoutUnicodeProperty(name) => {
                format!("Unicode character without property {name}")
            }
        }
    }
}

impl Collect {
    fn describe(self) -> &'static str {
        match self {
            Collect::Possessive => "preferring as many as possible",
            Collect::Reluctant => "preferring as few as possible",
        }
    }

    fn describe_optional(self) -> &'static str {
        match self {
            Collect::Possessive => "preferring once",
            Collect::Reluctant => "preferring none",
        }
    }
}

impl Repeat {
    fn describe(&self) -> String {
        let (base, strategy) = match *self {
            Repeat::Optional(strategy) => ("Match at most once".to_string(), strategy),
            Repeat::OneOrMore(strategy) => ("Match one or more times".to_string(), strategy),
            Repeat::ZeroOrMore(strategy) => ("Match any number of times".to_string(), strategy),
            Repeat::Exactly(n) => (format!("Match exactly {n} times"), None),
            Repeat::AtLeast(n, strategy) => (format!("Match at least {n} times"), strategy),
            Repeat::AtMost(m, strategy) => (format!("Match at most {m} times"), strategy),
            Repeat::Between(n, m, strategy) => {
                (format!("Match between {n} and {m} times"), strategy)
            }
        };
        match (self, strategy) {
            (Repeat::Optional(_), Some(s)) => format!("{base}, {}", s.describe_optional()),
            (_, Some(s)) => format!("{base}, {}", s.describe()),
            (_, None) => base,
        }
    }
}
