//! Tag system

pub mod parser;
pub mod site_tags;

// Re-export main types
pub use parser::TagParser;
pub use site_tags::{collect_site_tags, validate_tag, PostTags};
