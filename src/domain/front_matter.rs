//! Front-matter block extraction

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Three dashes mark both ends of a front-matter block.
pub const DELIMITER: &str = "---";

fn delimiter_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*---\s*$").unwrap())
}

/// How a line is recognised as a front-matter delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterMode {
    /// Any line containing `---` anywhere (compatible with existing sites)
    #[default]
    Substring,
    /// Only a line consisting of `---` and surrounding whitespace
    Line,
}

impl DelimiterMode {
    /// Check whether a line is a delimiter under this mode
    pub fn is_delimiter(&self, line: &str) -> bool {
        match self {
            DelimiterMode::Substring => line.contains(DELIMITER),
            DelimiterMode::Line => delimiter_line_regex().is_match(line),
        }
    }
}

/// Raw lines found between the first two delimiter lines of a post
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrontMatter {
    pub lines: Vec<String>,
}

impl FrontMatter {
    /// Collect the front-matter lines of a post.
    ///
    /// Lines before the opening delimiter are skipped and scanning stops at the
    /// closing one. A post with fewer than two delimiters has an empty block.
    pub fn parse(content: &str, mode: DelimiterMode) -> Self {
        let mut inside = false;
        let mut lines = Vec::new();

        for line in content.lines() {
            if mode.is_delimiter(line) {
                if inside {
                    return FrontMatter { lines };
                }
                inside = true;
            } else if inside {
                lines.push(line.to_string());
            }
        }

        // Unterminated block
        FrontMatter::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
