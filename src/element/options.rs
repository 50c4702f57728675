//! Match options and the engine flags they resolve to.

/// User-facing options that can be passed to the builder or toggled inline
/// with [`Element::SetOptions`](super::Element::SetOptions) and
/// [`Element::ResetOptions`](super::Element::ResetOptions).
///
/// The all-false default means case-insensitive matching: setting
/// `match_case` is what turns case folding off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchOptions {
    /// Match characters of the same case only.
    pub match_case: bool,
    /// `^` and `$` match at every line boundary.
    pub anchors_match_lines: bool,
    /// `.` also matches line terminators.
    pub any_includes_line_chars: bool,
    /// Word boundaries follow Unicode rather than ASCII rules.
    pub unicode_word_boundaries: bool,
}

impl MatchOptions {
    pub const NONE: Self = Self {
        match_case: false,
        anchors_match_lines: false,
        any_includes_line_chars: false,
        unicode_word_boundaries: false,
    };

    pub const MATCH_CASE: Self = Self {
        match_case: true,
        ..Self::NONE
    };

    pub const ANCHORS_MATCH_LINES: Self = Self {
        anchors_match_lines: true,
        ..Self::NONE
    };

    pub const ANY_INCLUDES_LINE_CHARS: Self = Self {
        any_includes_line_chars: true,
        ..Self::NONE
    };

    pub const UNICODE_WORD_BOUNDARIES: Self = Self {
        unicode_word_boundaries: true,
        ..Self::NONE
    };

    /// Options set in either `self` or `other`.
    pub const fn union(self, other: Self) -> Self {
        Self {
            match_case: self.match_case || other.match_case,
            anchors_match_lines: self.anchors_match_lines || other.anchors_match_lines,
            any_includes_line_chars: self.any_includes_line_chars || other.any_includes_line_chars,
            unicode_word_boundaries: self.unicode_word_boundaries || other.unicode_word_boundaries,
        }
    }

    pub const fn is_empty(self) -> bool {
        !(self.match_case
            || self.anchors_match_lines
            || self.any_includes_line_chars
            || self.unicode_word_boundaries)
    }
}

/// Flags understood by the regex engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EngineFlags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    /// Recorded for callers only; the engine has no ASCII-only `\b`.
    pub unicode_word: bool,
}

impl EngineFlags {
    /// Flags for a plain case-sensitivity choice.
    pub fn with_case(match_case: bool) -> Self {
        Self {
            case_insensitive: !match_case,
            ..Self::default()
        }
    }

    /// Leading inline group that applies these flags, e.g. `(?im)`.
    ///
    /// The engine's word boundaries are always Unicode-aware, so
    /// `unicode_word` has no inline form.
    pub fn inline_prefix(&self) -> String {
        let mut flags = String::new();
        if self.case_insensitive {
            flags.push('i');
        }
        if self.multi_line {
            flags.push('m');
        }
        if self.dot_matches_new_line {
            flags.push('s');
        }
        if flags.is_empty() {
            flags
        } else {
            format!("(?{flags})")
        }
    }
}

impl From<MatchOptions> for EngineFlags {
    fn from(options: MatchOptions) -> Self {
        Self {
            case_insensitive: !options.match_case,
            multi_line: options.anchors_match_lines,
            dot_matches_new_line: options.any_includes_line_chars,
            unicode_word: options.unicode_word_boundaries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_case_insensitive() {
        let flags = EngineFlags::from(MatchOptions::default());
        assert!(flags.case_insensitive);
        assert!(!flags.multi_line);
        assert_eq!(flags.inline_prefix(), "(?i)");
    }

    #[test]
    fn match_case_clears_case_folding() {
        let flags = EngineFlags::from(MatchOptions::MATCH_CASE);
        assert!(!flags.case_insensitive);
        assert_eq!(flags.inline_prefix(), "");
    }

    #[test]
    fn union_combines_all_flags() {
        let options = MatchOptions::ANCHORS_MATCH_LINES.union(MatchOptions::ANY_INCLUDES_LINE_CHARS);
        assert_eq!(EngineFlags::from(options).inline_prefix(), "(?ims)");
        assert!(MatchOptions::NONE.is_empty());
        assert!(!options.is_empty());
    }
}
