//! Tag extraction from front matter

use crate::domain::front_matter::FrontMatter;

/// Substring that marks the tags line inside a front-matter block
pub const TAGS_KEY: &str = "tags:";

pub struct TagParser;

impl TagParser {
    /// Extract the tags declared in a front-matter block.
    ///
    /// Only the first line containing `tags:` is honored. It is split on
    /// whitespace and every token after the key token is a tag, in source order.
    pub fn extract(front_matter: &FrontMatter) -> Vec<String> {
        Self::find_tags_line(front_matter)
            .map(Self::split_tags_line)
            .unwrap_or_default()
    }

    /// Check whether the block declares a tags key at all
    pub fn has_tags_key(front_matter: &FrontMatter) -> bool {
        Self::find_tags_line(front_matter).is_some()
    }

    fn find_tags_line(front_matter: &FrontMatter) -> Option<&str> {
        front_matter
            .lines
            .iter()
            .map(String::as_str)
            .find(|line| line.contains(TAGS_KEY))
    }

    fn split_tags_line(line: &str) -> Vec<String> {
        line.split_whitespace().skip(1).map(str::to_string).collect()
    }
}
