use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::debug;

use patterns::highlight::Highlighter;
use patterns::{EngineFlags, Matcher, Pattern, Regex, SearchConfig, factory};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to search for
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// File to search (standard input if absent)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// How PATTERN is interpreted
    #[arg(short = 'k', long, value_enum, default_value_t = Kind::Regex)]
    kind: Kind,

    /// Match case (the default is case-insensitive)
    #[arg(short = 'c', long)]
    match_case: bool,

    /// Select what the pattern does not match
    #[arg(short = 'v', long)]
    invert: bool,

    /// Additional regex every line must match
    #[arg(long, value_name = "PATTERN")]
    and: Vec<String>,

    /// Alternative regex
    #[arg(long, value_name = "PATTERN")]
    or: Vec<String>,

    /// Print every line with matches replaced by TEMPLATE
    #[arg(short = 'r', long, value_name = "TEMPLATE")]
    replace: Option<String>,

    /// Print the unmatched segments of every line, one per line
    #[arg(short = 's', long, conflicts_with = "replace")]
    split: bool,

    /// Stop after N matches per line
    #[arg(short = 'm', long, value_name = "N")]
    max_count: Option<usize>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Regex,
    Word,
    Prefix,
    Suffix,
    Text,
    Wildcard,
    Filter,
}

fn compile(grammar: &str, match_case: bool) -> anyhow::Result<Matcher> {
    let regex = Regex::try_new(grammar, EngineFlags::with_case(match_case))
        .with_context(|| format!("invalid pattern {grammar:?}"))?;
    Ok(Matcher::new(regex))
}

impl Args {
    fn matcher(&self) -> anyhow::Result<Matcher> {
        let (pattern, case) = (self.pattern.as_str(), self.match_case);
        let mut matcher = match self.kind {
            Kind::Regex => compile(pattern, case)?,
            Kind::Word => factory::word(pattern, case),
            Kind::Prefix => factory::prefix(pattern, case),
            Kind::Suffix => factory::suffix(pattern, case),
            Kind::Text => factory::text(pattern, case),
            Kind::Wildcard => factory::wildcard(pattern, case),
            Kind::Filter => factory::filter(pattern),
        };
        for grammar in &self.and {
            matcher = &matcher & &compile(grammar, case)?;
        }
        for grammar in &self.or {
            matcher = &matcher | &compile(grammar, case)?;
        }
        if self.invert {
            matcher = !matcher;
        }
        Ok(matcher)
    }

    fn input(&self) -> anyhow::Result<Box<dyn BufRead>> {
        Ok(match &self.file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Box::new(BufReader::new(file))
            }
            None => Box::new(io::stdin().lock()),
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let matcher = args.matcher()?;
    debug!("searching with {matcher:?}");

    let stdout = io::stdout();
    let highlighter = if stdout.is_terminal() {
        Highlighter::default()
    } else {
        Highlighter::plain()
    };
    let mut out = BufWriter::new(stdout.lock());

    let deep = SearchConfig::DEEP_MATCHES.with_max_matches(args.max_count);
    let text = SearchConfig::TEXT.with_max_matches(args.max_count);

    for line in args.input()?.lines() {
        let line = line.context("failed to read input")?;
        if let Some(template) = &args.replace {
            writeln!(out, "{}", matcher.replace_matches(&line, template))?;
        } else if args.split {
            for segment in matcher.split_with(&line, &text) {
                writeln!(out, "{segment}")?;
            }
        } else if matcher.has_matches(&line) {
            highlighter.write_line(&mut out, &line, &matcher.match_ranges_with(&line, &deep))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
