//! Matcher backed by the regex engine.

use std::fmt;
use std::sync::LazyLock;

use log::{debug, warn};

use super::template::{self, Template};
use super::{Pattern, PatternError, Visitor};
use crate::element::EngineFlags;
use crate::fragment::{Fragment, FragmentKind, MatchCount};
use crate::search_config::SearchConfig;
use crate::text_range::{CharOffsets, TextRange};

/// Characters with a meaning in the grammar, matched to escape literal text.
static SPECIAL_CHARS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\\|^$(){}*+?\[\]\-.]", EngineFlags::with_case(true)));

/// Escape every character of `text` that has a meaning in the grammar.
pub fn escape_pattern(text: &str) -> String {
    match SPECIAL_CHARS.as_ref() {
        Some(special) => special.replace_matches(text, r"\\$0"),
        None => {
            let mut escaped = String::with_capacity(text.len());
            for c in text.chars() {
                if r"\|^$(){}*+?[]-.".contains(c) {
                    escaped.push('\\');
                }
                escaped.push(c);
            }
            escaped
        }
    }
}

/// A compiled regex grammar.
///
/// Capture groups are reported as sub-matches and replacement templates may
/// refer to them with `$N`.
pub struct Regex {
    engine: fancy_regex::Regex,
    grammar: String,
    flags: EngineFlags,
}

impl Regex {
    /// Compile `grammar`, or `None` if the engine rejects it.
    pub fn new(grammar: &str, flags: EngineFlags) -> Option<Self> {
        match Self::try_new(grammar, flags) {
            Ok(regex) => Some(regex),
            Err(err) => {
                debug!("{err}");
                None
            }
        }
    }

    /// Compile `grammar`, reporting why the engine rejected it.
    pub fn try_new(grammar: &str, flags: EngineFlags) -> Result<Self, PatternError> {
        if grammar.is_empty() {
            return Err(PatternError::EmptyGrammar);
        }
        let source = format!("{}{grammar}", flags.inline_prefix());
        let engine = fancy_regex::Regex::new(&source).map_err(|err| PatternError::Rejected {
            grammar: grammar.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self {
            engine,
            grammar: grammar.to_string(),
            flags,
        })
    }

    /// The grammar as given, without the flag prefix.
    pub fn grammar(&self) -> &str {
        &self.grammar
    }

    pub fn flags(&self) -> EngineFlags {
        self.flags
    }

    /// Number of capture groups, counting the whole match.
    pub fn captures_len(&self) -> usize {
        self.engine.captures_len()
    }

    /// Report one match event. Returns whether to continue, and the char
    /// position where the match ended.
    fn visit_captures(
        &self,
        captures: &fancy_regex::Captures<'_>,
        offsets: &mut CharOffsets<'_>,
        marker: usize,
        config: &SearchConfig,
        visitor: &mut Visitor<'_>,
    ) -> (bool, usize) {
        let text = config.allows_kind(FragmentKind::Text);
        let whole = config.allows_kind(FragmentKind::Match);
        let groups = config.allows_kind(FragmentKind::SubMatch);

        let mut end = marker;
        for index in 0..captures.len() {
            let Some(group) = captures.get(index) else {
                continue;
            };
            let range = offsets.range(group.range());
            if index == 0 {
                end = range.end;
                if text
                    && marker < range.start
                    && !visitor(Fragment::Text(TextRange::new(marker, range.start)))
                {
                    return (false, end);
                }
                if whole && !visitor(Fragment::Match(range)) {
                    return (false, end);
                }
                if !groups {
                    break;
                }
            } else if !visitor(Fragment::SubMatch(range, index - 1)) {
                return (false, end);
            }
        }
        (true, end)
    }
}

impl Pattern for Regex {
    fn locate(&self, target: &str) -> Option<TextRange> {
        match self.engine.find(target) {
            Ok(found) => found.map(|m| TextRange::from_bytes(target, m.range())),
            Err(err) => {
                warn!("search for {:?} failed: {err}", self.grammar);
                None
            }
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
        let mut offsets = CharOffsets::new(target);
        let mut marker = 0;
        let mut matches = 0;
        for captures in self.engine.captures_iter(target) {
            let captures = match captures {
                Ok(captures) => captures,
                Err(err) => {
                    warn!("search for {:?} failed: {err}", self.grammar);
                    break;
                }
            };
            matches += 1;
            let (proceed, end) = self.visit_captures(&captures, &mut offsets, marker, config, visitor);
            marker = end;
            if !proceed || !config.allows(matches + 1) {
                // A stopped iteration reports no trailing text.
                return matches;
            }
        }
        if matches > 0 && config.allows_kind(FragmentKind::Text) {
            let end = offsets.char_at(target.len());
            if marker < end {
                visitor(Fragment::Text(TextRange::new(marker, end)));
            }
        }
        matches
    }

    fn replace_matches(&self, target: &str, template: &str) -> String {
        let expansion = Template::parse(template, self.captures_len()).to_expansion();
        let mut replaced = String::with_capacity(target.len());
        let mut last = 0;
        for captures in self.engine.captures_iter(target) {
            let captures = match captures {
                Ok(captures) => captures,
                Err(err) => {
                    warn!("replace with {:?} failed: {err}", self.grammar);
                    break;
                }
            };
            let Some(whole) = captures.get(0) else {
                continue;
            };
            replaced.push_str(&target[last..whole.start()]);
            captures.expand(&expansion, &mut replaced);
            last = whole.end();
        }
        replaced.push_str(&target[last..]);
        replaced
    }

    fn supports_sub_matches(&self) -> bool {
        true
    }

    fn supports_replace_templates(&self) -> bool {
        true
    }

    fn escape_template(&self, template: &str) -> String {
        template::escape(template)
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regex")
            .field("grammar", &self.grammar)
            .field("flags", &self.flags)
            .finish()
    }
}
