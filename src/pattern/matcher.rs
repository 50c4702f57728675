//! Shared matcher handle and the boolean algebra over it.

use std::fmt;
use std::ops::{BitAnd, BitOr, Deref, Not};
use std::sync::Arc;

use super::{AllPattern, AndPattern, EmptyPattern, InversePattern, OrPattern, Pattern};

/// Structural view of a matcher.
///
/// Leaf matchers report [`Shape::Leaf`]; the remaining variants let the
/// algebra simplify and flatten without downcasting.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Leaf,
    Empty,
    All,
    And(&'a [Matcher]),
    Or(&'a [Matcher]),
    Inverse(&'a Matcher),
}

/// Cheaply cloneable, immutable handle to any [`Pattern`].
///
/// Matchers are never mutated after construction, so one handle can be
/// shared by any number of composites and threads.
#[derive(Clone)]
pub struct Matcher(Arc<dyn Pattern>);

impl Matcher {
    pub fn new(pattern: impl Pattern + 'static) -> Self {
        Self(Arc::new(pattern))
    }

    /// Matches nothing.
    pub fn empty() -> Self {
        Self::new(EmptyPattern)
    }

    /// Matches the whole target.
    pub fn all() -> Self {
        Self::new(AllPattern)
    }

    /// Matcher selecting what `self` leaves unmatched.
    ///
    /// Inverting twice yields the original handle.
    pub fn inverse(&self) -> Matcher {
        match self.shape() {
            Shape::Empty => Matcher::all(),
            Shape::All => Matcher::empty(),
            Shape::Inverse(source) => source.clone(),
            _ => Matcher::new(InversePattern::new(self.clone())),
        }
    }

    /// Matcher requiring both `self` and `other` to match.
    pub fn and(&self, other: &Matcher) -> Matcher {
        match self.shape() {
            Shape::Empty => self.clone(),
            Shape::All => other.clone(),
            _ => Matcher::all_of([self.clone(), other.clone()]),
        }
    }

    /// Matcher requiring either `self` or `other` to match.
    pub fn or(&self, other: &Matcher) -> Matcher {
        match self.shape() {
            Shape::Empty => other.clone(),
            Shape::All => self.clone(),
            _ => Matcher::any_of([self.clone(), other.clone()]),
        }
    }

    /// Conjunction of `matchers`; nested conjunctions are flattened.
    pub fn all_of(matchers: impl IntoIterator<Item = Matcher>) -> Matcher {
        Matcher::new(AndPattern::new(matchers))
    }

    /// Disjunction of `matchers`; nested disjunctions are flattened.
    pub fn any_of(matchers: impl IntoIterator<Item = Matcher>) -> Matcher {
        Matcher::new(OrPattern::new(matchers))
    }

    /// Whether both handles share the same matcher.
    pub fn ptr_eq(this: &Matcher, other: &Matcher) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl Deref for Matcher {
    type Target = dyn Pattern;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<P: Pattern + 'static> From<P> for Matcher {
    fn from(pattern: P) -> Self {
        Matcher::new(pattern)
    }
}

impl Not for &Matcher {
    type Output = Matcher;

    fn not(self) -> Matcher {
        self.inverse()
    }
}

impl Not for Matcher {
    type Output = Matcher;

    fn not(self) -> Matcher {
        self.inverse()
    }
}

impl BitAnd for &Matcher {
    type Output = Matcher;

    fn bitand(self, other: &Matcher) -> Matcher {
        self.and(other)
    }
}

impl BitAnd for Matcher {
    type Output = Matcher;

    fn bitand(self, other: Matcher) -> Matcher {
        self.and(&other)
    }
}

impl BitOr for &Matcher {
    type Output = Matcher;

    fn bitor(self, other: &Matcher) -> Matcher {
        self.or(other)
    }
}

impl BitOr for Matcher {
    type Output = Matcher;

    fn bitor(self, other: Matcher) -> Matcher {
        self.or(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::EngineFlags;
    use crate::pattern::Regex;

    fn regex(grammar: &str) -> Matcher {
        Matcher::from(Regex::new(grammar, EngineFlags::with_case(true)).unwrap())
    }

    #[test]
    fn empty_and_all_invert_into_each_other() {
        assert!(matches!(Matcher::empty().inverse().shape(), Shape::All));
        assert!(matches!(Matcher::all().inverse().shape(), Shape::Empty));
    }

    #[test]
    fn double_inverse_returns_source() {
        let source = regex("a+");
        let twice = source.inverse().inverse();
        assert!(Matcher::ptr_eq(&source, &twice));
        assert!(matches!((!source.clone()).shape(), Shape::Inverse(_)));
    }

    #[test]
    fn and_with_trivial_receivers() {
        let other = regex("b");
        let empty = Matcher::empty();
        assert!(Matcher::ptr_eq(&empty.and(&other), &empty));
        assert!(Matcher::ptr_eq(&Matcher::all().and(&other), &other));
    }

    #[test]
    fn or_with_trivial_receivers() {
        let other = regex("b");
        let all = Matcher::all();
        assert!(Matcher::ptr_eq(&Matcher::empty().or(&other), &other));
        assert!(Matcher::ptr_eq(&all.or(&other), &all));
    }

    #[test]
    fn operators_build_composites() {
        let a = regex("a");
        let b = regex("b");
        let c = regex("c");
        let all = &(&a & &b) & &c;
        let Shape::And(children) = all.shape() else {
            panic!("expected a conjunction");
        };
        assert_eq!(children.len(), 3);
        let any = a | b;
        let Shape::Or(children) = any.shape() else {
            panic!("expected a disjunction");
        };
        assert_eq!(children.len(), 2);
    }
}
