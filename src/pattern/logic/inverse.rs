use crate::fragment::{Fragment, FragmentKind, MatchCount};
use crate::pattern::{Matcher, Pattern, Shape, Visitor};
use crate::search_config::SearchConfig;
use crate::text_range::TextRange;

/// Matches the regions its source leaves unmatched.
///
/// When the source reports nothing at all for a target, the whole target
/// counts as one match.
#[derive(Debug, Clone)]
pub struct InversePattern {
    source: Matcher,
}

impl InversePattern {
    pub fn new(source: Matcher) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &Matcher {
        &self.source
    }
}

impl Pattern for InversePattern {
    fn locate(&self, target: &str) -> Option<TextRange> {
        let whole = TextRange::whole(target);
        let Some(first) = self.source.locate(target) else {
            return Some(whole);
        };
        if first.start > 0 {
            return Some(TextRange::new(0, first.start));
        }
        if first.end == whole.end {
            return None;
        }
        let rest = TextRange::new(first.end, whole.end).slice(target);
        match self.source.locate(rest) {
            Some(second) => Some(TextRange::new(first.end, first.end + second.start)),
            None => Some(TextRange::new(first.end, whole.end)),
        }
    }

    fn iterate(
        &self,
        target: &str,
        config: &SearchConfig,
        visitor: &mut Visitor<'_>,
    ) -> MatchCount {
        if !config.allows(1) {
            return 0;
        }
        let text = config.allows_kind(FragmentKind::Text);
        let whole = config.allows_kind(FragmentKind::Match);

        let mut matches = 0;
        let mut reported = false;
        self.source.iterate(target, &SearchConfig::SHALLOW, &mut |fragment| {
            reported = true;
            let proceed = match fragment {
                Fragment::Match(range) => !text || visitor(Fragment::Text(range)),
                Fragment::Text(range) => {
                    matches += 1;
                    !whole || visitor(Fragment::Match(range))
                }
                Fragment::SubMatch(..) => true,
            };
            proceed && config.allows(matches + 1)
        });

        if !reported {
            if whole {
                visitor(Fragment::Match(TextRange::whole(target)));
            }
            return 1;
        }
        matches
    }

    fn replace_matches(&self, target: &str, template: &str) -> String {
        let mut replaced = String::with_capacity(target.len());
        let mut reported = false;
        self.source.iterate(target, &SearchConfig::SHALLOW, &mut |fragment| {
            reported = true;
            match fragment {
                Fragment::Match(range) => replaced.push_str(range.slice(target)),
                Fragment::Text(_) => replaced.push_str(template),
                Fragment::SubMatch(..) => {}
            }
            true
        });
        if !reported {
            return template.to_string();
        }
        replaced
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Inverse(&self.source)
    }
}
