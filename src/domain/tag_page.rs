//! Tag index page rendering

use std::path::{Path, PathBuf};

/// Layout the site theme looks up for tag listing pages
pub const DEFAULT_LAYOUT: &str = "tagpage";

/// File name of the generated page inside each tag directory
pub const INDEX_FILE: &str = "index.html";

/// A front-matter-only page that the site generator renders into a tag listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPage {
    pub tag: String,
    pub layout: String,
}

impl TagPage {
    pub fn new(tag: &str, layout: &str) -> Self {
        TagPage {
            tag: tag.to_string(),
            layout: layout.to_string(),
        }
    }

    /// Render the page. Field order is fixed: layout first, then tag.
    pub fn render(&self) -> String {
        format!("---\nlayout: {}\ntag: {}\n---\n", self.layout, self.tag)
    }

    /// Directory of this page under the output root
    pub fn dir(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.tag)
    }

    /// Location of this page under the output root
    pub fn path(&self, output_root: &Path) -> PathBuf {
        self.dir(output_root).join(INDEX_FILE)
    }
}
