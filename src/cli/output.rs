//! Output formatting utilities

use crate::application::RefreshReport;
use crate::domain::tags::PostTags;

/// Format the progress trace for one post.
///
/// The indented tag line appears whenever the post has a `tags:` line, so an
/// empty one shows up as a blank indented line.
pub fn format_post_trace(post: &PostTags) -> String {
    let mut output = format!("-- {} tags:\n", post.path.display());
    if post.has_tags_key {
        output.push_str(&format!("  {}\n", post.tags.join(" ")));
    }
    output
}

/// Format the closing lines of a run
pub fn format_summary(report: &RefreshReport) -> String {
    if !report.dry_run {
        return "-- tags refreshed.\n".to_string();
    }

    let mut output = String::new();
    for page in &report.pages {
        output.push_str(&format!("would write {}\n", page.display()));
    }
    output.push_str("-- dry run, nothing written.\n");
    output
}
