use super::*;
use crate::element::EngineFlags;
use crate::fragment::SubstringFragment;
use crate::pattern::{Pattern, Regex};

fn regex(grammar: &str) -> Matcher {
    Matcher::from(Regex::new(grammar, EngineFlags::with_case(true)).unwrap())
}

fn joined(fragments: &[SubstringFragment<'_>]) -> String {
    fragments.iter().map(|f| f.as_str()).collect()
}

fn children(matcher: &Matcher) -> usize {
    match matcher.shape() {
        Shape::And(children) | Shape::Or(children) => children.len(),
        _ => 0,
    }
}

#[test]
fn test_and_replace_threads_children() {
    let both = regex("ab+c").and(&regex("xyz?"));
    assert_eq!(both.replace_matches("cabccxyzc", "-"), "c-c-c");
}

#[test]
fn test_and_replace_requires_every_child() {
    let both = regex("ab+c").and(&regex("xyz?"));
    assert_eq!(both.replace_matches("cabcc", "-"), "cabcc");
}

#[test]
fn test_and_has_matches() {
    let both = regex("ab+c").and(&regex("xyz?"));
    assert!(both.has_matches("abbc xy"));
    assert!(!both.has_matches("abbc"));
    assert!(!both.has_matches("xyz"));
    assert!(!regex("a").and(&Matcher::empty()).has_matches("a"));
}

#[test]
fn test_and_locate_picks_earliest() {
    let both = regex("ab+c").and(&regex("xyz?"));
    assert_eq!(both.first("xy abc"), Some("xy"));
    assert_eq!(both.locate("xy abc"), Some(TextRange::new(0, 2)));
    assert_eq!(both.first("abc"), None);
}

#[test]
fn test_and_fragments_interleave_children() {
    let both = regex("a(b+)c").and(&regex("xyz?"));
    let fragments = both.fragments("cabccxyzc");
    assert_eq!(
        fragments,
        [
            Fragment::Text("c"),
            Fragment::Match("abc"),
            Fragment::Text("c"),
            Fragment::Match("xyz"),
            Fragment::Text("c"),
        ]
    );
}

#[test]
fn test_and_without_all_children_is_plain_text() {
    let both = regex("ab+c").and(&regex("xyz?"));
    assert_eq!(both.fragments("abc only"), [Fragment::Text("abc only")]);
    assert!(both.matches("abc only").is_empty());
}

#[test]
fn test_sub_match_only_config_yields_nothing() {
    let both = regex("a(b)").and(&regex("(c)"));
    let config = SearchConfig::new(FragmentKinds::SUB_MATCH, None);
    let mut seen = 0;
    let count = both.iterate("abc", &config, &mut |_| {
        seen += 1;
        true
    });
    assert_eq!(count, 0);
    assert_eq!(seen, 0);
}

#[test]
fn test_or_has_matches_and_replace() {
    let either = regex("ab+c").or(&regex("xyz?"));
    assert!(either.has_matches("--abbbbbc..xy"));
    assert!(either.has_matches("..xy"));
    assert!(!either.has_matches("--"));
    assert_eq!(either.replace_matches("cabccxyzc", "-"), "c-c-c");
}

#[test]
fn test_or_locate_prefers_leftmost_then_first_child() {
    assert_eq!(regex("c").or(&regex("a")).first("abc"), Some("a"));
    assert_eq!(regex("ab").or(&regex("abc")).first("abc"), Some("ab"));
    assert_eq!(regex("x").or(&regex("y")).first("abc"), None);
}

#[test]
fn test_or_without_matches_is_plain_text() {
    let either = regex("ab+c").or(&regex("xyz?"));
    assert_eq!(either.fragments("zzz"), [Fragment::Text("zzz")]);
}

#[test]
fn test_union_drops_overlapping_matches() {
    let either = regex("abc").or(&regex("bcd"));
    assert_eq!(either.matches("abcd"), [Fragment::Match("abc")]);
    let either = regex("bcd").or(&regex("abc"));
    assert_eq!(either.matches("abcd"), [Fragment::Match("bcd")]);
}

#[test]
fn test_union_sorts_by_start() {
    let either = regex("b").or(&regex("a"));
    let matches = either.matches("abab");
    assert_eq!(
        matches,
        [
            Fragment::Match("a"),
            Fragment::Match("b"),
            Fragment::Match("a"),
            Fragment::Match("b"),
        ]
    );
}

#[test]
fn test_union_applies_cap() {
    let both = regex("a").and(&regex("b"));
    let config = SearchConfig::new(FragmentKinds::MATCH, Some(2));
    let mut seen = Vec::new();
    let count = both.iterate("ababab", &config, &mut |fragment| {
        seen.push(fragment.substring("ababab"));
        true
    });
    assert_eq!(count, 2);
    assert_eq!(seen, [Fragment::Match("a"), Fragment::Match("b")]);
}

#[test]
fn test_inverse_has_matches() {
    let inverse = regex("ab+c").inverse();
    assert!(!inverse.has_matches("abbbbbc"));
    assert!(inverse.has_matches("abxcc"));
    assert!(inverse.has_matches("cabccc"));
}

#[test]
fn test_inverse_replace() {
    let inverse = regex("ab+c").inverse();
    assert_eq!(inverse.replace_matches("cabccc", "-"), "-abc-");
    assert_eq!(inverse.replace_matches("xyz", "-"), "-");
}

#[test]
fn test_inverse_locate() {
    let inverse = regex("ab+c").inverse();
    assert_eq!(inverse.first("xyz"), Some("xyz"));
    assert_eq!(inverse.first("xxabc"), Some("xx"));
    assert_eq!(inverse.first("abcxxabbc"), Some("xx"));
    assert_eq!(inverse.first("abcxx"), Some("xx"));
    assert_eq!(inverse.first("abc"), None);
}

#[test]
fn test_inverse_swaps_fragments() {
    let inverse = regex("ab+c").inverse();
    assert_eq!(
        inverse.fragments("cabccc"),
        [
            Fragment::Match("c"),
            Fragment::Text("abc"),
            Fragment::Match("cc"),
        ]
    );
    assert_eq!(inverse.fragments("xyz"), [Fragment::Match("xyz")]);
}

#[test]
fn test_inverse_applies_cap() {
    let inverse = regex("b").inverse();
    let config = SearchConfig::new(FragmentKinds::MATCH, Some(1));
    assert_eq!(inverse.matches_with("ababab", &config), [Fragment::Match("a")]);
}

#[test]
fn test_cap_is_never_exceeded() {
    let matchers = [
        regex("a").and(&regex("b")),
        regex("a").or(&regex("b")),
        regex("b").inverse(),
    ];
    for matcher in &matchers {
        for cap in 0..4 {
            let config = SearchConfig::new(FragmentKinds::SHALLOW, Some(cap));
            let mut emitted = 0;
            let count = matcher.iterate("ababab", &config, &mut |fragment| {
                if let Fragment::Match(_) = fragment {
                    emitted += 1;
                }
                true
            });
            assert!(count <= cap, "{matcher:?} reported {count} with cap {cap}");
            assert!(emitted <= cap, "{matcher:?} emitted {emitted} with cap {cap}");
        }
    }
}

#[test]
fn test_fragments_reconstruct_input() {
    let matchers = [
        regex("ab+c").and(&regex("xyz?")),
        regex("ab+c").or(&regex("xyz?")),
        regex("ab+c").inverse(),
        regex("abc").or(&regex("x*")),
        regex("x*").or(&regex("abc")),
        regex("abc").and(&regex(r"\b")),
    ];
    for matcher in &matchers {
        for input in ["cabccxyzc", "", "none", "abcxyz", "xy abbbc"] {
            let fragments = matcher.fragments_with(input, &SearchConfig::SHALLOW);
            assert_eq!(joined(&fragments), input, "{matcher:?} on {input:?}");
        }
    }
}

#[test]
fn test_zero_width_matches_inside_kept_ranges_are_dropped() {
    let either = regex("abc").or(&regex("x*"));
    let fragments = either.fragments_with("abc", &SearchConfig::SHALLOW);
    assert_eq!(
        fragments,
        [
            Fragment::Match(""),
            Fragment::Match("abc"),
            Fragment::Match(""),
        ]
    );
    assert_eq!(either.match_ranges("abc").len(), 3);
}

#[test]
fn test_zero_width_matches_at_range_edges_stay_ordered() {
    let ranges = regex(r"\b").or(&regex("ab")).match_ranges("ab cd");
    let starts: Vec<_> = ranges.iter().map(|f| f.content().start).collect();
    assert!(starts.is_sorted(), "{ranges:?}");
}

#[test]
fn test_and_flattens_nested_conjunctions() {
    let (a, b, c, d) = (regex("a"), regex("b"), regex("c"), regex("d"));
    assert_eq!(children(&a.and(&b).and(&c)), 3);
    assert_eq!(children(&a.and(&b).and(&c.and(&d))), 4);
    assert_eq!(children(&Matcher::all_of([a.and(&b), c.and(&d)])), 4);
}

#[test]
fn test_or_flattens_nested_disjunctions() {
    let (a, b, c, d) = (regex("a"), regex("b"), regex("c"), regex("d"));
    assert_eq!(children(&a.or(&b).or(&c)), 3);
    assert_eq!(children(&Matcher::any_of([a.or(&b), c.or(&d)])), 4);
}

#[test]
fn test_mixed_composites_stay_nested() {
    let (a, b, c) = (regex("a"), regex("b"), regex("c"));
    let mixed = a.and(&b).or(&c);
    let Shape::Or(children) = mixed.shape() else {
        panic!("expected a disjunction");
    };
    assert_eq!(children.len(), 2);
    assert!(matches!(children[0].shape(), Shape::And(_)));
}
