//! Expression trees for building regex grammars.
//!
//! An [`Element`] is an immutable recursive value describing a pattern. It
//! compiles to the regex engine's grammar with [`Element::grammar`] (also its
//! `Display` form) and renders as readable numbered steps with
//! [`Element::steps`].
//!
//! ```rust
//! use patterns::{Element, Repeat};
//!
//! let tag = Element::sequence([
//!     Element::char_in("<"),
//!     Element::repeat(Element::char_not_in(">"), Repeat::OneOrMore(None)),
//!     Element::char_in(">"),
//! ]);
//! assert_eq!(tag.to_string(), "<[^>]+>");
//! ```
//!
//! # Grammar mapping
//!
//! | Element                  | Grammar            |
//! |--------------------------|--------------------|
//! | `Any`                    | `.`                |
//! | `Space` / `NotSpace`     | `\s` / `\S`        |
//! | `Digit` / `NotDigit`     | `\d` / `\D`        |
//! | `Word` / `NotWord`       | `\w` / `\W`        |
//! | `NewLine`                | `(?:[\r]?+[\n])`   |
//! | `Start` / `End`          | `^` / `$`          |
//! | `FirstInInput`           | `\A`               |
//! | `LastInInput`            | `\z`               |
//! | `EndOfPreviousMatch`     | `\G`               |
//! | `Boundary` / `NotBoundary` | `\b` / `\B`      |
//! | `BackReference(i)`       | `\{i+1}`           |
//! | `Skip`                   | `.*`               |
//! | `Spaces`                 | `\s*`              |
//! | `Words`                  | `\w+`              |

mod grammar;
mod options;
mod steps;

pub use options::{EngineFlags, MatchOptions};

use crate::fragment::SubMatchId;

/// One node of a pattern expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    // character classes
    /// Any one character.
    Any,
    Space,
    NotSpace,
    Digit,
    NotDigit,
    Word,
    NotWord,
    /// `\n`, `\r\n`.
    NewLine,
    /// `"`
    Quote,
    /// `'`
    Apostrophe,

    // character sets
    /// One character from the list.
    CharIn(String),
    /// One character not in the list.
    CharNotIn(String),

    /// Escaped or otherwise special characters.
    Special(SpecialCharacter),

    // anchors
    /// Start of the current line.
    Start,
    /// End of the current line.
    End,
    FirstInInput,
    LastInInput,
    Boundary,
    NotBoundary,

    // references
    EndOfPreviousMatch,
    /// Same text as the capture group with this 0-based index.
    BackReference(SubMatchId),

    /// Literal text.
    Text(String),

    // operations
    Repeating(Box<Element>, Repeat),
    /// Any one of the alternatives.
    Either(Vec<Element>),

    // grouping
    Sequence(Vec<Element>),
    /// Non-capturing group.
    Section(Box<Element>),
    Capture(Box<Element>),
    Atomic(Box<Element>),

    // zero-width assertions
    LookAhead(Box<Element>),
    LookAheadInversed(Box<Element>),
    LookBehind(Box<Element>),
    LookBehindInversed(Box<Element>),

    // common fragments
    /// Any run of characters.
    Skip,
    /// Any run of spaces.
    Spaces,
    /// One or more word characters.
    Words,

    // configuration
    SetOptions(MatchOptions),
    ResetOptions(MatchOptions),
}

/// Characters that need an escape sequence in the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpecialCharacter {
    /// `\`
    Slash,
    Bell,
    Backspace,
    Escape,
    Formfeed,
    Tab,
    /// An extended grapheme cluster.
    Grapheme,
    /// Control character by name, e.g. `"M"` for `\cM`.
    Control(String),
    /// Character by code point.
    Hex(u32),
    /// Unicode character by name.
    Named(String),
    WithUnicodeProperty(String),
    WithoutUnicodeProperty(String),
}

/// How many times a repeated element may match.
///
/// Forms carrying an `Option<Collect>` take a possessive or reluctant suffix
/// when one is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// `?`
    Optional(Option<Collect>),
    /// `+`
    OneOrMore(Option<Collect>),
    /// `*`
    ZeroOrMore(Option<Collect>),
    /// `{n}`
    Exactly(usize),
    /// `{n,}`
    AtLeast(usize, Option<Collect>),
    /// `{,m}`
    AtMost(usize, Option<Collect>),
    /// `{n,m}`
    Between(usize, usize, Option<Collect>),
}

/// Collection strategy of a repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collect {
    /// Take as many as possible and never give any back.
    Possessive,
    /// Take as few as possible.
    Reluctant,
}

impl Element {
    pub fn char_in(chars: impl Into<String>) -> Self {
        Element::CharIn(chars.into())
    }

    pub fn char_not_in(chars: impl Into<String>) -> Self {
        Element::CharNotIn(chars.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Element::Text(text.into())
    }

    pub fn repeat(element: Element, times: Repeat) -> Self {
        Element::Repeating(Box::new(element), times)
    }

    pub fn either(alternatives: impl IntoIterator<Item = Element>) -> Self {
        Element::Either(alternatives.into_iter().collect())
    }

    pub fn sequence(items: impl IntoIterator<Item = Element>) -> Self {
        Element::Sequence(items.into_iter().collect())
    }

    pub fn section(element: Element) -> Self {
        Element::Section(Box::new(element))
    }

    pub fn capture(element: Element) -> Self {
        Element::Capture(Box::new(element))
    }

    pub fn atomic(element: Element) -> Self {
        Element::Atomic(Box::new(element))
    }

    pub fn look_ahead(element: Element) -> Self {
        Element::LookAhead(Box::new(element))
    }

    pub fn look_ahead_inversed(element: Element) -> Self {
        Element::LookAheadInversed(Box::new(element))
    }

    pub fn look_behind(element: Element) -> Self {
        Element::LookBehind(Box::new(element))
    }

    pub fn look_behind_inversed(element: Element) -> Self {
        Element::LookBehindInversed(Box::new(element))
    }
}

impl From<Vec<Element>> for Element {
    fn from(items: Vec<Element>) -> Self {
        Element::Sequence(items)
    }
}

impl<const N: usize> From<[Element; N]> for Element {
    fn from(items: [Element; N]) -> Self {
        Element::Sequence(items.into())
    }
}

impl From<SpecialCharacter> for Element {
    fn from(special: SpecialCharacter) -> Self {
        Element::Special(special)
    }
}
