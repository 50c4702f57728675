//! Compile expression trees to the regex engine's grammar.

use std::fmt;

use crate::pattern::escape_pattern;

use super::{Collect, Element, MatchOptions, Repeat, SpecialCharacter};

impl Element {
    /// The grammar string for this element.
    pub fn grammar(&self) -> String {
        let mut out = String::new();
        self.write_grammar(&mut out);
        out
    }

    /// Static cost used to decide whether a repeated or alternated element
    /// needs its own group before the operator is applied.
    pub fn weight(&self) -> usize {
        match self {
            Element::SetOptions(_) | Element::ResetOptions(_) => 0,

            Element::Start
            | Element::End
            | Element::FirstInInput
            | Element::LastInInput
            | Element::BackReference(_)
            | Element::EndOfPreviousMatch
            | Element::Any
            | Element::Boundary
            | Element::NotBoundary
            | Element::NewLine
            | Element::Special(_)
            | Element::Quote
            | Element::Apostrophe
            | Element::Space
            | Element::NotSpace
            | Element::Digit
            | Element::NotDigit
            | Element::Word
            | Element::NotWord
            | Element::CharIn(_)
            | Element::CharNotIn(_) => 1,

            Element::Capture(_)
            | Element::Section(_)
            | Element::Atomic(_)
            | Element::Either(_)
            | Element::LookAhead(_)
            | Element::LookAheadInversed(_)
            | Element::LookBehind(_)
            | Element::LookBehindInversed(_) => 1,

            Element::Skip | Element::Spaces | Element::Repeating(..) | Element::Words => 2,

            Element::Text(text) => text.chars().count(),

            Element::Sequence(items) => items.iter().map(Element::weight).sum(),
        }
    }

    fn write_grammar(&self, out: &mut String) {
        match self {
            Element::FirstInInput => out.push_str(r"\A"),
            Element::LastInInput => out.push_str(r"\z"),
            Element::NewLine => out.push_str(r"(?:[\r]?+[\n])"),
            Element::EndOfPreviousMatch => out.push_str(r"\G"),
            Element::Start => out.push('^'),
            Element::End => out.push('$'),
            Element::Any => out.push('.'),
            Element::Skip => out.push_str(".*"),
            Element::Space => out.push_str(r"\s"),
            Element::Spaces => out.push_str(r"\s*"),
            Element::NotSpace => out.push_str(r"\S"),
            Element::Digit => out.push_str(r"\d"),
            Element::NotDigit => out.push_str(r"\D"),
            Element::Word => out.push_str(r"\w"),
            Element::Words => out.push_str(r"\w+"),
            Element::NotWord => out.push_str(r"\W"),
            Element::Boundary => out.push_str(r"\b"),
            Element::NotBoundary => out.push_str(r"\B"),
            Element::Quote => out.push('"'),
            Element::Apostrophe => out.push('\''),
            Element::BackReference(id) => {
                out.push('\\');
                out.push_str(&(id + 1).to_string());
            }
            Element::Special(special) => special.write_grammar(out),
            Element::CharIn(chars) => {
                let escaped = escape_pattern(chars);
                if chars.chars().count() == 1 {
                    out.push_str(&escaped);
                } else {
                    out.push('[');
                    out.push_str(&escaped);
                    out.push(']');
                }
            }
            Element::CharNotIn(chars) => {
                out.push_str("[^");
                out.push_str(&escape_pattern(chars));
                out.push(']');
            }
            Element::Text(text) => out.push_str(&escape_pattern(text)),
            Element::Repeating(element, times) => {
                element.write_unit(out);
                times.write_grammar(out);
            }
            Element::SetOptions(options) => write_set_options(options, out),
            Element::ResetOptions(options) => write_reset_options(options, out),
            Element::Capture(element) => wrap(out, "(", element),
            Element::Either(alternatives) => {
                let grouped = alternatives.len() >= 2;
                if grouped {
                    out.push_str("(?:");
                }
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        out.push('|');
                    }
                    alternative.write_unit(out);
                }
                if grouped {
                    out.push(')');
                }
            }
            Element::Sequence(items) => {
                for item in items {
                    item.write_grammar(out);
                }
            }
            Element::Section(element) => wrap(out, "(?:", element),
            Element::Atomic(element) => wrap(out, "(?>", element),
            Element::LookAhead(element) => wrap(out, "(?=", element),
            Element::LookAheadInversed(element) => wrap(out, "(?!", element),
            Element::LookBehind(element) => wrap(out, "(?<=", element),
            Element::LookBehindInversed(element) => wrap(out, "(?<!", element),
        }
    }

    /// Write the element so a following operator binds to all of it.
    fn write_unit(&self, out: &mut String) {
        if self.weight() > 1 {
            wrap(out, "(?:", self);
        } else {
            self.write_grammar(out);
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grammar())
    }
}

fn wrap(out: &mut String, open: &str, element: &Element) {
    out.push_str(open);
    element.write_grammar(out);
    out.push(')');
}

// Setting match-case turns the default case folding off, hence `(?-i)`.
fn write_set_options(options: &MatchOptions, out: &mut String) {
    if options.match_case {
        out.push_str("(?-i)");
    }
    if options.anchors_match_lines {
        out.push_str("(?m)");
    }
    if options.any_includes_line_chars {
        out.push_str("(?s)");
    }
    if options.unicode_word_boundaries {
        out.push_str("(?w)");
    }
}

fn write_reset_options(options: &MatchOptions, out: &mut String) {
    if options.match_case {
        out.push_str("(?i)");
    }
    if options.anchors_match_lines {
        out.push_str("(?-m)");
    }
    if options.any_includes_line_chars {
        out.push_str("(?-s)");
    }
    if options.unicode_word_boundaries {
        out.push_str("(?-w)");
    }
}

impl SpecialCharacter {
    fn write_grammar(&self, out: &mut String) {
        match self {
            SpecialCharacter::Slash => out.push_str(r"\\"),
            SpecialCharacter::Bell => out.push_str(r"\a"),
            SpecialCharacter::Backspace => out.push_str(r"\u0008"),
            SpecialCharacter::Escape => out.push_str(r"\e"),
            SpecialCharacter::Formfeed => out.push_str(r"\f"),
            SpecialCharacter::Tab => out.push_str(r"\t"),
            SpecialCharacter::Grapheme => out.push_str(r"\X"),
            SpecialCharacter::Control(name) => {
                out.push_str(r"\c");
                out.push_str(name);
            }
            SpecialCharacter::Hex(code) => out.push_str(&format!(r"\x{{{code:x}}}")),
            SpecialCharacter::Named(name) => out.push_str(&format!(r"\N{{{name}}}")),
            SpecialCharacter::WithUnicodeProperty(name) => out.push_str(&format!(r"\p{{{name}}}")),
            SpecialCharacter::WithoutUnicodeProperty(name) => {
                out.push_str(&format!(r"\P{{{name}}}"))
            }
        }
    }
}

impl Repeat {
    fn write_grammar(&self, out: &mut String) {
        let strategy = match *self {
            Repeat::Optional(strategy) => {
                out.push('?');
                strategy
            }
            Repeat::OneOrMore(strategy) => {
                out.push('+');
                strategy
            }
            Repeat::ZeroOrMore(strategy) => {
                out.push('*');
                strategy
            }
            Repeat::Exactly(n) => {
                out.push_str(&format!("{{{n}}}"));
                None
            }
            Repeat::AtLeast(n, strategy) => {
                out.push_str(&format!("{{{n},}}"));
                strategy
            }
            Repeat::AtMost(m, strategy) => {
                out.push_str(&format!("{{,{m}}}"));
                strategy
            }
            Repeat::Between(n, m, strategy) => {
                out.push_str(&format!("{{{n},{m}}}"));
                strategy
            }
        };
        match strategy {
            Some(Collect::Possessive) => out.push('+'),
            Some(Collect::Reluctant) => out.push('?'),
            None => {}
        }
    }
}
