//! Composable pattern matching over a backtracking regex engine.
//!
//! Expression trees ([`Element`]) compile to regex grammars, and matchers
//! ([`Matcher`]) combine with `!`, `&` and `|` while reporting a uniform
//! stream of [`Fragment`]s.
//!
//! # Example
//!
//! ```rust
//! use patterns::{Fragment, Pattern, factory};
//!
//! let abc = factory::regex("ab+c", true);
//! let xyz = factory::regex("xyz?", true);
//!
//! // Both must match somewhere in the input.
//! let both = &abc & &xyz;
//! assert_eq!(both.replace_matches("cabccxyzc", "-"), "c-c-c");
//!
//! // What the source leaves unmatched.
//! let rest = !&abc;
//! assert_eq!(rest.replace_matches("cabccc", "-"), "-abc-");
//!
//! let fragments = factory::regex("a([b]+)c", true).fragments("-abbc00abc");
//! assert_eq!(fragments[2], Fragment::SubMatch("bb", 0));
//! ```

mod element;
pub mod factory;
mod fragment;
pub mod highlight;
mod pattern;
mod search_config;
mod text_range;

pub use element::{Collect, Element, EngineFlags, MatchOptions, Repeat, SpecialCharacter};
pub use fragment::{
    Fragment, FragmentKind, FragmentKinds, MatchCount, RangeFragment, SubMatchId,
    SubstringFragment,
};
pub use pattern::{
    AllPattern, AndPattern, EmptyPattern, InversePattern, Matcher, OrPattern, Pattern,
    PatternError, Regex, Shape, Visitor, escape_pattern,
};
pub use search_config::{SearchConfig, UserData};
pub use text_range::TextRange;
