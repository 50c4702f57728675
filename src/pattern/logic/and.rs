use log::trace;

use super::{flatten, union, unmatched};
use crate::fragment::MatchCount;
use crate::pattern::{Matcher, Pattern, Shape, Visitor};
use crate::search_config::SearchConfig;
use crate::text_range::TextRange;

/// Matches only where every child matches the target.
#[derive(Debug, Clone)]
pub struct AndPattern {
    patterns: Vec<Matcher>,
}

fn conjuncts(shape: Shape<'_>) -> Option<&[Matcher]> {
    match shape {
        Shape::And(children) => Some(children),
        _ => None,
    }
}

impl AndPattern {
    /// Join `matchers`; children that are conjunctions themselves are
    /// spliced in.
    pub fn new(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        let patterns = flatten(matchers, conjuncts);
        trace!("conjunction of {} matchers", patterns.len());
        Self { patterns }
    }

    pub fn patterns(&self) -> &[Matcher] {
        &self.patterns
    }
}

impl Pattern for AndPattern {
    /// Earliest first match among the children, provided each has one.
    fn locate(&self, target: &str) -> Option<TextRange> {
        let mut earliest: Option<TextRange> = None;
        for pattern in &self.patterns {
            let found = pattern.locate(target)?;
            if earliest.is_none_or(|previous| found.start < previous.start) {
                earliest = Some(found);
            }
        }
        earliest
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
        if !self.has_matches(target) {
            return target.to_string();
        }
        self.patterns.iter().fold(target.to_string(), |input, pattern| {
            pattern.replace_matches(&input, &pattern.escape_template(template))
        })
    }

    fn shape(&self) -> Shape<'_> {
        Shape::And(&self.patterns)
    }
}
