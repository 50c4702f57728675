//! The two trivial matchers.

use super::{Pattern, Shape, Visitor};
use crate::fragment::{Fragment, FragmentKind, MatchCount};
use crate::search_config::SearchConfig;
use crate::text_range::TextRange;

/// Matches nothing. The whole target is unmatched text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPattern;

impl Pattern for EmptyPattern {
    fn locate(&self, _target: &str) -> Option<TextRange> {
        None
    }

    fn iterate(
        &self,
        target: &str,
        config: &SearchConfig,
        visitor: &mut Visitor<'_>,
    ) -> MatchCount {
        if config.allows_kind(FragmentKind::Text) {
            visitor(Fragment::Text(TextRange::whole(target)));
        }
        0
    }

    fn replace_matches(&self, target: &str, _template: &str) -> String {
        target.to_string()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Empty
    }
}

/// Matches the whole target as a single match.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPattern;

impl Pattern for AllPattern {
    fn locate(&self, target: &str) -> Option<TextRange> {
        Some(TextRange::whole(target))
    }

    fn iterate(
        &self,
        target: &str,
        config: &SearchConfig,
        visitor: &mut Visitor<'_>,
    ) -> MatchCount {
        if !config.allows(1) || !config.allows_kind(FragmentKind::Match) {
            return 0;
        }
        visitor(Fragment::Match(TextRange::whole(target)));
        1
    }

    fn replace_matches(&self, _target: &str, template: &str) -> String {
        template.to_string()
    }

    fn shape(&self) -> Shape<'_> {
        Shape::All
    }
}
