// Stable API facade for external consumers - Pure logic, no I/O

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::util::sort::compare_tag_names;

/// A named block of text to be sorted line by line
#[derive(Clone, Debug)]
pub struct InputSource {
    pub name: String,
    pub content: String,
}

impl InputSource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Options for sorting lines
#[derive(Clone, Debug, Default)]
pub struct SortConfig {
    reverse: bool,
    unique: bool,
    skip_blank: bool,
    trim: bool,
    filter: Option<String>,
}

impl SortConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Drop lines that compare equal to the previous kept line
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn skip_blank(mut self, skip_blank: bool) -> Self {
        self.skip_blank = skip_blank;
        self
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Keep only lines matching this regular expression
    pub fn filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    fn compile_filter(&self) -> Result<Option<Regex>> {
        Ok(self.filter.as_deref().map(Regex::new).transpose()?)
    }
}

/// Sorted lines plus the number of input lines left out
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SortOutput {
    pub lines: Vec<String>,
    pub dropped: usize,
}

impl SortOutput {
    /// Newline-joined lines, with a trailing newline when not empty
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if !self.lines.is_empty() {
            text.push('\n');
        }
        text
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Sort the lines of `input` by tag-name order
pub fn sort_lines(input: &str, config: &SortConfig) -> Result<SortOutput> {
    sort_iter(input.lines(), config)
}

/// Concatenate sources in order, then sort their lines together
pub fn sort_sources(sources: &[InputSource], config: &SortConfig) -> Result<SortOutput> {
    for source in sources {
        debug!("Source {}: {} bytes", source.name, source.content.len());
    }
    sort_iter(sources.iter().flat_map(|s| s.content.lines()), config)
}

fn sort_iter<'a, I>(lines: I, config: &SortConfig) -> Result<SortOutput>
where
    I: Iterator<Item = &'a str>,
{
    let filter = config.compile_filter()?;

    let mut total = 0;
    let mut kept: Vec<&str> = Vec::new();
    for line in lines {
        total += 1;
        let line = if config.trim { line.trim() } else { line };
        if config.skip_blank && line.trim().is_empty() {
            continue;
        }
        if let Some(re) = &filter
            && !re.is_match(line)
        {
            continue;
        }
        kept.push(line);
    }

    kept.sort_by(|a, b| compare_tag_names(a, b));
    if config.reverse {
        kept.reverse();
    }
    if config.unique {
        kept.dedup_by(|a, b| compare_tag_names(a, b).is_eq());
    }

    debug!("Sorted {} of {} lines", kept.len(), total);

    Ok(SortOutput {
        dropped: total - kept.len(),
        lines: kept.into_iter().map(str::to_string).collect(),
    })
}
