use log::trace;

use super::{flatten, union, unmatched};
use crate::fragment::MatchCount;
use crate::pattern::{Matcher, Pattern, Shape, Visitor};
use crate::search_config::SearchConfig;
use crate::text_range::TextRange;

/// Matches wherever any child matches the target.
#[derive(Debug, Clone)]
pub struct OrPattern {
    patterns: Vec<Matcher>,
}

fn disjuncts(shape: Shape<'_>) -> Option<&[Matcher]> {
    match shape {
        Shape::Or(children) => Some(children),
        _ => None,
    }
}

impl OrPattern {
    /// Join `matchers`; children that are disjunctions themselves are
    /// spliced in.
    pub fn new(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        let patterns = flatten(matchers, disjuncts);
        trace!("disjunction of {} matchers", patterns.len());
        Self { patterns }
    }

    pub fn patterns(&self) -> &[Matcher] {
        &self.patterns
    }
}

impl Pattern for OrPattern {
    fn has_matches(&self, target: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.has_matches(target))
    }

    /// Leftmost first match; on a tie the earlier child wins.
    fn locate(&self, target: &str) -> Option<TextRange> {
        self.patterns
            .iter()
            .filter_map(|pattern| pattern.locate(target))
            .reduce(|previous, found| if found.start < previous.start { found } else { previous })
    }

    fn iterate(
        &self,
        target: &str,
        config: &SearchConfig,
        visitor: &mut Visitor<'_>,
    ) -> MatchCount {
        if !self.has_matches(target) {
            return unmatched(target, config, visitor);
        }
        union(&self.patterns, target, config, visitor)
    }

    fn replace_matches(&self, target: &str, template: &str) -> String {
        self.patterns.iter().fold(target.to_string(), |input, pattern| {
            pattern.replace_matches(&input, &pattern.escape_template(template))
        })
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Or(&self.patterns)
    }
}
