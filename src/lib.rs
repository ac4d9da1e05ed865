//! tagpages - Tag index page generator
//!
//! Scans blog posts for the tags declared in their front matter and writes one
//! front-matter-only index page per tag for a static site generator to render.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagPagesError;
