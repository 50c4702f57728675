//! Ready-made matchers for common searches.
//!
//! Every factory is fail-soft: input the engine cannot compile yields
//! [`Matcher::empty`], which never matches.

use itertools::Itertools;
use log::debug;

use crate::element::{EngineFlags, Element, MatchOptions, Repeat, SpecialCharacter};
use crate::fragment::Fragment;
use crate::pattern::{Matcher, Pattern, Regex, escape_pattern};
use crate::search_config::SearchConfig;

pub fn empty() -> Matcher {
    Matcher::empty()
}

pub fn all() -> Matcher {
    Matcher::all()
}

/// Matcher for a raw regex `grammar`.
pub fn regex(grammar: &str, match_case: bool) -> Matcher {
    compile(grammar, EngineFlags::with_case(match_case))
}

/// Matcher for an expression tree under `options`.
///
/// The engine's word boundaries are always Unicode-aware, so
/// `unicode_word_boundaries` doesn't change how `\b` behaves.
pub fn build(element: &Element, options: MatchOptions) -> Matcher {
    if options.unicode_word_boundaries {
        debug!("word boundaries are always Unicode-aware; ignoring the option");
    }
    compile(&element.grammar(), EngineFlags::from(options))
}

fn compile(grammar: &str, flags: EngineFlags) -> Matcher {
    match Regex::new(grammar, flags) {
        Some(regex) => Matcher::new(regex),
        None => {
            debug!("falling back to the empty matcher for {grammar:?}");
            Matcher::empty()
        }
    }
}

/// `text` as a whole word.
pub fn word(text: &str, match_case: bool) -> Matcher {
    regex(&format!(r"\b{}\b", escape_pattern(text)), match_case)
}

/// `text` at the start of the input, after optional whitespace.
pub fn prefix(text: &str, match_case: bool) -> Matcher {
    regex(&format!(r"^\s*{}", escape_pattern(text)), match_case)
}

/// `text` at the end of the input, before optional whitespace.
pub fn suffix(text: &str, match_case: bool) -> Matcher {
    regex(&format!(r"{}\s*$", escape_pattern(text)), match_case)
}

/// `text` literally, anywhere.
pub fn text(text: &str, match_case: bool) -> Matcher {
    regex(&escape_pattern(text), match_case)
}

/// Tokenizer for UNIX globs. Captures `?`, `*` and bracket expressions in
/// groups 0, 1 and 2.
pub fn glob_element() -> Element {
    let bracket_body = Element::either([
        Element::sequence([SpecialCharacter::Slash.into(), Element::Any]),
        Element::repeat(Element::char_not_in("]"), Repeat::OneOrMore(None)),
    ]);
    Element::either([
        Element::capture(Element::char_in("?")),
        Element::capture(Element::char_in("*")),
        Element::capture(Element::sequence([
            Element::char_in("["),
            Element::repeat(bracket_body, Repeat::OneOrMore(None)),
            Element::char_in("]"),
        ])),
    ])
}

/// Translate `glob` to a regex grammar, or `None` if the tokenizer is
/// unavailable.
pub fn glob_grammar(glob: &str) -> Option<String> {
    let tokenizer = Regex::new(&glob_element().grammar(), EngineFlags::with_case(true))?;
    let mut grammar = String::new();
    let tokens = tokenizer.iterate(glob, &SearchConfig::ALL, &mut |fragment| {
        match fragment {
            Fragment::SubMatch(_, 0) => grammar.push('.'),
            Fragment::SubMatch(_, 1) => grammar.push_str(".*"),
            Fragment::SubMatch(range, 2) => grammar.push_str(range.slice(glob)),
            Fragment::Text(range) => grammar.push_str(&escape_pattern(range.slice(glob))),
            Fragment::Match(_) | Fragment::SubMatch(..) => {}
        }
        true
    });
    if tokens == 0 {
        return Some(escape_pattern(glob));
    }
    Some(grammar)
}

/// Matcher for a UNIX glob: `?` is any character, `*` any run and `[...]`
/// a character set. Everything else is literal.
pub fn wildcard(glob: &str, match_case: bool) -> Matcher {
    match glob_grammar(glob) {
        Some(grammar) => regex(&grammar, match_case),
        None => Matcher::empty(),
    }
}

/// Finder-style filter: every character of `input` in order, anything in
/// between, each character captured. Always case-insensitive.
pub fn filter(input: &str) -> Matcher {
    if input.is_empty() {
        return Matcher::empty();
    }
    let captures = input
        .chars()
        .map(|c| escape_pattern(c.encode_utf8(&mut [0; 4])))
        .join(").*(");
    regex(&format!("({captures})"), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Collect;
    use crate::fragment::FragmentKinds;
    use crate::pattern::Shape;

    fn strings<'t>(fragments: &[crate::fragment::SubstringFragment<'t>]) -> Vec<&'t str> {
        fragments.iter().map(|f| f.as_str()).collect()
    }

    #[test]
    fn glob_tokenizer_grammar() {
        assert_eq!(
            glob_element().grammar(),
            r"(?:(\?)|(\*)|(\[(?:(?:\\.)|(?:[^\]]+))+\]))"
        );
    }

    #[test]
    fn glob_translation() {
        assert_eq!(glob_grammar("ab*c").as_deref(), Some("ab.*c"));
        assert_eq!(glob_grammar("*.rs").as_deref(), Some(r".*\.rs"));
        assert_eq!(glob_grammar("file?.[ch]").as_deref(), Some(r"file.\.[ch]"));
        assert_eq!(glob_grammar("a.b").as_deref(), Some(r"a\.b"));
    }

    #[test]
    fn wildcard_matching() {
        let pattern = wildcard("ab*c", false);
        assert!(pattern.has_matches("abbc"));
        assert!(!pattern.has_matches("ac"));
        assert_eq!(pattern.first("abbc"), Some("abbc"));
        assert_eq!(pattern.first("acb"), None);
        assert!(pattern.fragments("ac").is_empty());
        assert_eq!(strings(&pattern.fragments("-abbc00abc")), ["-", "abbc00abc"]);
    }

    #[test]
    fn wildcard_replace_and_split() {
        let pattern = wildcard("ab*c", false);
        assert_eq!(pattern.replace_matches("--abc--", "--"), "------");
        assert_eq!(pattern.replace_matches("--abbbc--", "-$0_$1-"), "---abbbc_---");
        let literal = pattern.escape_template("$0_$1");
        assert_eq!(pattern.replace_matches("--abbbc--", &literal), "--$0_$1--");
        assert_eq!(pattern.split("***abc---abbbc%%%"), ["***", "%%%"]);
        let config = SearchConfig::new(FragmentKinds::TEXT, Some(1));
        assert_eq!(pattern.split_with("***abc-X-abbbc%%%", &config), ["***"]);
    }

    #[test]
    fn wildcard_without_tokens_is_literal() {
        let pattern = wildcard("a.c", true);
        assert!(pattern.has_matches("xa.cx"));
        assert!(!pattern.has_matches("abc"));
    }

    #[test]
    fn prefix_matching() {
        let pattern = prefix("abc", true);
        assert!(pattern.has_matches("abc"));
        assert!(pattern.has_matches("  abc"));
        assert!(!pattern.has_matches("abbc"));
        assert!(!pattern.has_matches("aabcc"));
        assert_eq!(pattern.first("abc111abc"), Some("abc"));
        assert_eq!(pattern.first(" .abc"), None);
        assert!(pattern.fragments("ac").is_empty());
        assert_eq!(strings(&pattern.fragments("abc-00ABC")), ["abc", "-00ABC"]);
        assert_eq!(pattern.split("abc---abc%%%"), ["---abc%%%"]);
    }

    #[test]
    fn prefix_replace() {
        let pattern = prefix("abc", true);
        assert_eq!(pattern.replace_matches("abc--", "--"), "----");
        assert_eq!(pattern.replace_matches("abc--", "-$0_$1-"), "-abc_---");
        let literal = pattern.escape_template("$0_$1");
        assert_eq!(pattern.replace_matches("abc--", &literal), "$0_$1--");
    }

    #[test]
    fn suffix_matching() {
        let pattern = suffix("abc", true);
        assert!(pattern.has_matches("xxabc  "));
        assert!(!pattern.has_matches("abcx"));
        assert_eq!(pattern.first("abc111abc"), Some("abc"));
    }

    #[test]
    fn word_matching() {
        let pattern = word("abc", false);
        assert!(pattern.has_matches("x ABC y"));
        assert!(!pattern.has_matches("xabc"));
        assert_eq!(strings(&pattern.matches("abc abcd abc")), ["abc", "abc"]);
    }

    #[test]
    fn text_matching_is_literal() {
        let pattern = text("a+b", true);
        assert!(pattern.has_matches("1 a+b 2"));
        assert!(!pattern.has_matches("aab"));
        assert!(!pattern.has_matches("A+B"));
        assert!(text("a+b", false).has_matches("A+B"));
    }

    #[test]
    fn filter_matching() {
        let pattern = filter("crs");
        assert!(pattern.has_matches("XCFilterTests"));
        assert!(!pattern.has_matches("cxscr"));
        assert_eq!(pattern.first("abcbrcrcsabc"), Some("cbrcrcs"));
        assert_eq!(pattern.first("cxscr"), None);
        assert!(!filter("").has_matches("anything"));
    }

    #[test]
    fn filter_captures_each_character() {
        let fragments = filter("ab").matches_with("xaxbx", &SearchConfig::DEEP_MATCHES);
        assert_eq!(strings(&fragments), ["axb", "a", "b"]);
    }

    #[test]
    fn regex_falls_back_to_empty() {
        assert!(!regex("(ab", true).has_matches("(ab"));
        assert!(!regex("", true).has_matches(""));
    }

    #[test]
    fn build_compiles_with_options() {
        let tag = Element::sequence([
            Element::char_in("<"),
            Element::repeat(Element::char_not_in(">"), Repeat::OneOrMore(None)),
            Element::char_in(">"),
        ]);
        let pattern = build(&tag, MatchOptions::NONE);
        assert_eq!(strings(&pattern.matches("a <b> c <i>")), ["<b>", "<i>"]);

        let upper = build(&Element::text("B"), MatchOptions::MATCH_CASE);
        assert!(!upper.has_matches("b"));
        assert!(build(&Element::text("B"), MatchOptions::NONE).has_matches("b"));
    }

    #[test]
    fn build_ignores_unicode_word_boundary_option() {
        let pattern = build(&Element::text("b"), MatchOptions::UNICODE_WORD_BOUNDARIES);
        assert!(!matches!(pattern.shape(), Shape::Empty));
        assert!(pattern.has_matches("éb"));
    }

    #[test]
    fn build_supports_backtracking_constructs() {
        let doubled = Element::sequence([Element::capture(Element::Word), Element::BackReference(0)]);
        assert_eq!(build(&doubled, MatchOptions::NONE).first("abccd"), Some("cc"));

        let possessive = Element::sequence([
            Element::repeat(Element::char_in("a"), Repeat::OneOrMore(Some(Collect::Possessive))),
            Element::char_in("a"),
        ]);
        assert!(!build(&possessive, MatchOptions::NONE).has_matches("aaa"));

        let before_digit = Element::sequence([Element::Word, Element::look_ahead(Element::Digit)]);
        assert_eq!(build(&before_digit, MatchOptions::NONE).first("ab1"), Some("b"));
    }

    #[test]
    fn build_falls_back_on_unsupported_directives() {
        let unicode = Element::sequence([
            Element::SetOptions(MatchOptions::UNICODE_WORD_BOUNDARIES),
            Element::text("a"),
        ]);
        assert_eq!(unicode.grammar(), "(?w)a");
        assert!(matches!(build(&unicode, MatchOptions::NONE).shape(), Shape::Empty));
    }
}
