//! Match fragments and the kinds a search reports.

use std::ops::{BitOr, BitOrAssign};

use crate::text_range::TextRange;

/// Number of match events reported by an iteration.
pub type MatchCount = usize;

/// 0-based capture group index, relative to its enclosing match.
pub type SubMatchId = usize;

/// One classified region of a target string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment<T> {
    /// A matched region.
    Match(T),
    /// An unmatched region.
    Text(T),
    /// A capture group inside the enclosing match.
    SubMatch(T, SubMatchId),
}

/// Fragment over character ranges of the target.
pub type RangeFragment = Fragment<TextRange>;

/// Fragment over slices of the target.
pub type SubstringFragment<'t> = Fragment<&'t str>;

impl<T> Fragment<T> {
    /// The payload, whatever the tag.
    pub fn content(&self) -> &T {
        match self {
            Fragment::Match(data) | Fragment::Text(data) | Fragment::SubMatch(data, _) => data,
        }
    }

    pub fn into_content(self) -> T {
        match self {
            Fragment::Match(data) | Fragment::Text(data) | Fragment::SubMatch(data, _) => data,
        }
    }

    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::Match(_) => FragmentKind::Match,
            Fragment::Text(_) => FragmentKind::Text,
            Fragment::SubMatch(..) => FragmentKind::SubMatch,
        }
    }

    /// Transform the payload, keeping the tag and any capture id.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fragment<U> {
        match self {
            Fragment::Match(data) => Fragment::Match(f(data)),
            Fragment::Text(data) => Fragment::Text(f(data)),
            Fragment::SubMatch(data, id) => Fragment::SubMatch(f(data), id),
        }
    }
}

impl RangeFragment {
    /// Materialize the fragment as a slice of `target`.
    pub fn substring(self, target: &str) -> SubstringFragment<'_> {
        self.map(|range| range.slice(target))
    }
}

impl<'t> SubstringFragment<'t> {
    pub fn as_str(&self) -> &'t str {
        *self.content()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Match,
    SubMatch,
    Text,
}

impl FragmentKind {
    const fn bit(self) -> u8 {
        1u8 << (self as u8)
    }
}

/// A set of fragment kinds enabled for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FragmentKinds(u8);

impl FragmentKinds {
    pub const NONE: Self = Self(0);
    pub const MATCH: Self = Self(FragmentKind::Match.bit());
    pub const SUB_MATCH: Self = Self(FragmentKind::SubMatch.bit());
    pub const TEXT: Self = Self(FragmentKind::Text.bit());
    /// Matches and sub-matches.
    pub const ALL_MATCH: Self = Self(Self::MATCH.0 | Self::SUB_MATCH.0);
    /// Matches and unmatched text, no sub-matches.
    pub const SHALLOW: Self = Self(Self::MATCH.0 | Self::TEXT.0);
    pub const ALL: Self = Self(Self::ALL_MATCH.0 | Self::TEXT.0);

    pub const fn contains(self, kind: FragmentKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn with(self, kind: FragmentKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub const fn without(self, kind: FragmentKind) -> Self {
        Self(self.0 & !kind.bit())
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<FragmentKind> for FragmentKinds {
    fn from(kind: FragmentKind) -> Self {
        Self(kind.bit())
    }
}

impl BitOr for FragmentKinds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FragmentKinds {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
