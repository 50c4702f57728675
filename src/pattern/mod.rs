//! The matcher capability contract and its implementations.
//!
//! Every matcher implements [`Pattern`]. Only three operations are required:
//! [`locate`](Pattern::locate), [`iterate`](Pattern::iterate) and
//! [`replace_matches`](Pattern::replace_matches); everything else is derived.
//! Matchers are shared through the [`Matcher`] handle, which also provides the
//! boolean algebra (`inverse`, `and`, `or`).
//!
//! | Variant          | Source                                     |
//! |------------------|--------------------------------------------|
//! | [`Regex`]        | the regex engine                           |
//! | [`EmptyPattern`] | matches nothing                            |
//! | [`AllPattern`]   | matches the whole target                   |
//! | [`AndPattern`]   | every child must match                     |
//! | [`OrPattern`]    | any child may match                        |
//! | [`InversePattern`] | the unmatched regions of its source      |

mod empty;
mod error;
mod logic;
mod matcher;
mod regex;
mod template;

pub use empty::{AllPattern, EmptyPattern};
pub use error::PatternError;
pub use logic::{AndPattern, InversePattern, OrPattern};
pub use matcher::{Matcher, Shape};
pub use regex::{Regex, escape_pattern};

use std::fmt;

use crate::fragment::{Fragment, FragmentKind, MatchCount, RangeFragment, SubstringFragment};
use crate::search_config::SearchConfig;
use crate::text_range::TextRange;

/// Callback receiving fragments during [`Pattern::iterate`]. Returning
/// `false` stops the iteration.
pub type Visitor<'v> = dyn FnMut(RangeFragment) -> bool + 'v;

/// Capabilities shared by every matcher.
pub trait Pattern: fmt::Debug + Send + Sync {
    /// Location of the first match in `target`.
    fn locate(&self, target: &str) -> Option<TextRange>;

    /// Visit the fragments of `target` allowed by `config`, in document order.
    ///
    /// Stops as soon as `visitor` returns `false` or the configured match cap
    /// is reached. Returns the number of match events seen.
    fn iterate(&self, target: &str, config: &SearchConfig, visitor: &mut Visitor<'_>)
    -> MatchCount;

    /// Replace every match in `target` with `template`.
    fn replace_matches(&self, target: &str, template: &str) -> String;

    fn has_matches(&self, target: &str) -> bool {
        self.locate(target).is_some()
    }

    /// The first match as a slice of `target`.
    fn first<'t>(&self, target: &'t str) -> Option<&'t str> {
        self.locate(target).map(|range| range.slice(target))
    }

    /// [`iterate`](Pattern::iterate) with every fragment kind enabled.
    fn iterate_all(&self, target: &str, visitor: &mut Visitor<'_>) -> MatchCount {
        self.iterate(target, &SearchConfig::ALL, visitor)
    }

    /// Matches (and sub-matches, if enabled) filtered by `config`.
    fn matches_with<'t>(&self, target: &'t str, config: &SearchConfig) -> Vec<SubstringFragment<'t>> {
        let config = config.clone().without_fragment_kind(FragmentKind::Text);
        collect_substrings(self, target, &config)
    }

    fn matches<'t>(&self, target: &'t str) -> Vec<SubstringFragment<'t>> {
        self.matches_with(target, &SearchConfig::MATCHES)
    }

    fn match_ranges_with(&self, target: &str, config: &SearchConfig) -> Vec<RangeFragment> {
        let config = config.clone().without_fragment_kind(FragmentKind::Text);
        let mut result = Vec::new();
        self.iterate(target, &config, &mut |fragment| {
            result.push(fragment);
            true
        });
        result
    }

    fn match_ranges(&self, target: &str) -> Vec<RangeFragment> {
        self.match_ranges_with(target, &SearchConfig::MATCHES)
    }

    /// Break `target` into the fragments allowed by `config`.
    fn fragments_with<'t>(
        &self,
        target: &'t str,
        config: &SearchConfig,
    ) -> Vec<SubstringFragment<'t>> {
        collect_substrings(self, target, config)
    }

    fn fragments<'t>(&self, target: &'t str) -> Vec<SubstringFragment<'t>> {
        self.fragments_with(target, &SearchConfig::ALL)
    }

    /// The unmatched segments of `target`.
    fn split_with<'t>(&self, target: &'t str, config: &SearchConfig) -> Vec<&'t str> {
        let config = config.clone().with_fragment_kind(FragmentKind::Text);
        let mut result = Vec::new();
        self.iterate(target, &config, &mut |fragment| {
            if let Fragment::Text(range) = fragment {
                result.push(range.slice(target));
            }
            true
        });
        result
    }

    fn split<'t>(&self, target: &'t str) -> Vec<&'t str> {
        self.split_with(target, &SearchConfig::TEXT)
    }

    /// Whether this matcher reports capture groups as sub-matches.
    fn supports_sub_matches(&self) -> bool {
        false
    }

    /// Whether [`replace_matches`](Pattern::replace_matches) expands group
    /// references in its template.
    fn supports_replace_templates(&self) -> bool {
        false
    }

    /// Make `template` insert literally when given to
    /// [`replace_matches`](Pattern::replace_matches).
    fn escape_template(&self, template: &str) -> String {
        template.to_string()
    }

    /// Structural view used by the boolean algebra on [`Matcher`].
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf
    }
}

fn collect_substrings<'t, P: Pattern + ?Sized>(
    pattern: &P,
    target: &'t str,
    config: &SearchConfig,
) -> Vec<SubstringFragment<'t>> {
    let mut result = Vec::new();
    pattern.iterate(target, config, &mut |fragment| {
        result.push(fragment.substring(target));
        true
    });
    result
}
