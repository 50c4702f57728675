//! Search configuration: which fragments to report and how many matches.

use std::any::Any;
use std::sync::Arc;

use crate::fragment::{FragmentKind, FragmentKinds, MatchCount};

/// Opaque payload passed through to custom pattern implementations.
pub type UserData = Arc<dyn Any + Send + Sync>;

/// Immutable search configuration.
///
/// The "mutators" consume the value and return the updated one; a no-op
/// update returns the original value untouched.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of matches to report; `None` is unbounded.
    pub max_matches: Option<MatchCount>,
    /// Fragment kinds enabled for the search.
    pub fragments: FragmentKinds,
    /// Payload for user extensions, never inspected by this crate.
    pub user_data: Option<UserData>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::ALL
    }
}

impl SearchConfig {
    /// Every fragment kind, unbounded.
    pub const ALL: Self = Self::new(FragmentKinds::ALL, None);
    /// Matched regions only.
    pub const MATCHES: Self = Self::new(FragmentKinds::MATCH, None);
    /// Matches and sub-matches, unbounded.
    pub const DEEP_MATCHES: Self = Self::new(FragmentKinds::ALL_MATCH, None);
    /// Matches and sub-matches of the first match only.
    pub const FIRST_MATCH: Self = Self::new(FragmentKinds::ALL_MATCH, Some(1));
    /// Unmatched regions only.
    pub const TEXT: Self = Self::new(FragmentKinds::TEXT, None);
    /// Matches and unmatched regions, no sub-matches.
    pub const SHALLOW: Self = Self::new(FragmentKinds::SHALLOW, None);

    pub const fn new(fragments: FragmentKinds, max_matches: Option<MatchCount>) -> Self {
        Self {
            max_matches,
            fragments,
            user_data: None,
        }
    }

    /// Test whether reporting a total of `count` matches is permitted.
    pub fn allows(&self, count: MatchCount) -> bool {
        self.max_matches.is_none_or(|max| count <= max)
    }

    pub fn allows_kind(&self, kind: FragmentKind) -> bool {
        self.fragments.contains(kind)
    }

    pub fn with_max_matches(self, max_matches: Option<MatchCount>) -> Self {
        if self.max_matches == max_matches {
            return self;
        }
        Self {
            max_matches,
            ..self
        }
    }

    pub fn with_fragment_kinds(self, fragments: FragmentKinds) -> Self {
        if self.fragments == fragments {
            return self;
        }
        Self { fragments, ..self }
    }

    pub fn with_fragment_kind(self, kind: FragmentKind) -> Self {
        let fragments = self.fragments.with(kind);
        self.with_fragment_kinds(fragments)
    }

    pub fn without_fragment_kind(self, kind: FragmentKind) -> Self {
        let fragments = self.fragments.without(kind);
        self.with_fragment_kinds(fragments)
    }

    pub fn with_user_data(self, user_data: UserData) -> Self {
        Self {
            user_data: Some(user_data),
            ..self
        }
    }
}
