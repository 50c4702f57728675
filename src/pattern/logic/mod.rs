//! Boolean composition of matchers.
//!
//! Conjunctions and disjunctions report the union of their children's
//! matches. Overlapping matches are resolved in favour of the child listed
//! first, and sub-matches are never reported.

mod and;
mod inverse;
mod or;

#[cfg(test)]
mod tests;

pub use and::AndPattern;
pub use inverse::InversePattern;
pub use or::OrPattern;

use super::{Matcher, Shape, Visitor};
use crate::fragment::{Fragment, FragmentKind, FragmentKinds, MatchCount};
use crate::search_config::SearchConfig;
use crate::text_range::TextRange;

/// Collect `matchers`, splicing in the children of nested composites that
/// `nested` recognizes.
fn flatten(
    matchers: impl IntoIterator<Item = Matcher>,
    nested: fn(Shape<'_>) -> Option<&[Matcher]>,
) -> Vec<Matcher> {
    let mut flat = Vec::new();
    for matcher in matchers {
        match nested(matcher.shape()) {
            Some(children) => flat.extend_from_slice(children),
            None => flat.push(matcher),
        }
    }
    flat
}

/// Whole-text fallback used when a composite has nothing to report.
fn unmatched(target: &str, config: &SearchConfig, visitor: &mut Visitor<'_>) -> MatchCount {
    if config.allows_kind(FragmentKind::Text) {
        visitor(Fragment::Text(TextRange::whole(target)));
    }
    0
}

/// Whether `range` can't be reported alongside `kept`: they overlap, or
/// one starts strictly inside the other. Zero-width matches at either edge
/// of a kept range don't conflict with it.
fn conflicts(kept: &TextRange, range: &TextRange) -> bool {
    kept == range
        || kept.overlaps(range)
        || (kept.start < range.start && range.start < kept.end)
        || (range.start < kept.start && kept.start < range.end)
}

/// Merge the matches of `children` into one ordered, non-overlapping stream.
fn union(
    children: &[Matcher],
    target: &str,
    config: &SearchConfig,
    visitor: &mut Visitor<'_>,
) -> MatchCount {
    let text = config.allows_kind(FragmentKind::Text);
    let whole = config.allows_kind(FragmentKind::Match);
    if !(text || whole) || !config.allows(1) {
        return 0;
    }

    let collect = config
        .clone()
        .with_fragment_kinds(FragmentKinds::MATCH)
        .with_max_matches(None);
    let mut ranges: Vec<TextRange> = Vec::new();
    for child in children {
        child.iterate(target, &collect, &mut |fragment| {
            if let Fragment::Match(range) = fragment
                && !ranges.iter().any(|kept| conflicts(kept, &range))
            {
                ranges.push(range);
            }
            true
        });
    }
    ranges.sort();

    let mut matches = 0;
    let mut previous = 0;
    for range in ranges {
        if text
            && previous < range.start
            && !visitor(Fragment::Text(TextRange::new(previous, range.start)))
        {
            return matches;
        }
        matches += 1;
        if whole && !visitor(Fragment::Match(range)) {
            return matches;
        }
        previous = range.end;
        if !config.allows(matches + 1) {
            return matches;
        }
    }

    let end = TextRange::whole(target).end;
    if text && previous < end {
        visitor(Fragment::Text(TextRange::new(previous, end)));
    }
    matches
}
