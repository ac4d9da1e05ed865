//! Domain layer - Front matter, tags and tag pages

pub mod front_matter;
pub mod tag_page;
pub mod tags;

pub use front_matter::{DelimiterMode, FrontMatter};
pub use tag_page::TagPage;
