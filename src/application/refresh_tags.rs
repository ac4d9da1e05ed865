//! Refresh tags use case
//!
//! Scans every post, collects the site-wide tag set and regenerates one index
//! page per tag.

use crate::domain::tags::{collect_site_tags, validate_tag, PostTags, TagParser};
use crate::domain::{DelimiterMode, FrontMatter, TagPage};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Options for a refresh run
#[derive(Debug, Clone)]
pub struct RefreshOptions {
    /// Layout written into every tag page
    pub layout: String,

    /// How front-matter delimiters are recognised
    pub delimiters: DelimiterMode,

    /// Compute everything but write nothing
    pub dry_run: bool,
}

/// Outcome of a refresh run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    /// Tags of each post, in discovery order
    pub posts: Vec<PostTags>,

    /// Union of all post tags
    pub tags: BTreeSet<String>,

    /// Index pages written, or that would be written on a dry run
    pub pages: Vec<PathBuf>,

    pub dry_run: bool,
}

/// Service for regenerating tag index pages
pub struct RefreshTagsService {
    repository: FileSystemRepository,
}

impl RefreshTagsService {
    /// Create new refresh tags service
    pub fn new(repository: FileSystemRepository) -> Self {
        RefreshTagsService { repository }
    }

    /// Execute the refresh.
    ///
    /// `on_post` is called once per post as soon as its tags are known, so
    /// progress is visible even if a later step fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A posts directory that was chosen explicitly does not exist
    /// - A post cannot be read
    /// - A tag cannot be used as a directory name
    /// - A tag page cannot be written
    pub fn execute<F>(&self, options: &RefreshOptions, on_post: F) -> Result<RefreshReport>
    where
        F: FnMut(&PostTags),
    {
        let posts = self.scan_posts(options.delimiters, on_post)?;
        let tags = collect_site_tags(&posts);

        let pages = if options.dry_run {
            tags.iter()
                .map(|tag| TagPage::new(tag, &options.layout).path(self.repository.output_dir()))
                .collect()
        } else {
            self.generate_pages(&tags, &options.layout)?
        };

        Ok(RefreshReport {
            posts,
            tags,
            pages,
            dry_run: options.dry_run,
        })
    }

    /// Read and parse every post, validating tags as they are found
    fn scan_posts<F>(&self, delimiters: DelimiterMode, mut on_post: F) -> Result<Vec<PostTags>>
    where
        F: FnMut(&PostTags),
    {
        let paths = self.repository.list_posts()?;
        log::debug!(
            "discovered {} posts in {}",
            paths.len(),
            self.repository.posts_dir().display()
        );

        let mut posts = Vec::with_capacity(paths.len());
        for path in paths {
            let content = self.repository.read_post(&path)?;
            let front_matter = FrontMatter::parse(&content, delimiters);
            let tags = TagParser::extract(&front_matter);

            let post = if tags.is_empty() && TagParser::has_tags_key(&front_matter) {
                log::warn!("{}: tags key has no values", path.display());
                PostTags::empty_tags_key(path)
            } else {
                PostTags::new(path, tags)
            };
            on_post(&post);

            for tag in &post.tags {
                validate_tag(tag, &post.path)?;
            }
            posts.push(post);
        }

        Ok(posts)
    }

    fn generate_pages(&self, tags: &BTreeSet<String>, layout: &str) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(tags.len());
        for tag in tags {
            let path = self.repository.write_tag_page(&TagPage::new(tag, layout))?;
            log::debug!("wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TagPagesError;
    use std::fs;
    use tempfile::TempDir;

    fn setup(posts: &[(&str, &str)]) -> (TempDir, RefreshTagsService) {
        let temp = TempDir::new().unwrap();
        let posts_dir = temp.path().join("_posts");
        fs::create_dir(&posts_dir).unwrap();
        for (name, content) in posts {
            fs::write(posts_dir.join(name), content).unwrap();
        }

        let repo = FileSystemRepository::new(posts_dir, "markdown", temp.path().join("tags"));
        (temp, RefreshTagsService::new(repo))
    }

    fn options(dry_run: bool) -> RefreshOptions {
        RefreshOptions {
            layout: "tagpage".to_string(),
            delimiters: DelimiterMode::Substring,
            dry_run,
        }
    }

    #[test]
    fn test_refresh_writes_one_page_per_unique_tag() {
        let (temp, service) = setup(&[
            ("a.markdown", "---\ntags: foo bar\n---\nA\n"),
            ("b.markdown", "---\ntags: bar baz\n---\nB\n"),
        ]);

        let report = service.execute(&options(false), |_| {}).unwrap();

        assert_eq!(
            report.tags.iter().cloned().collect::<Vec<_>>(),
            vec!["bar", "baz", "foo"]
        );
        assert_eq!(report.pages.len(), 3);
        for tag in ["foo", "bar", "baz"] {
            let content =
                fs::read_to_string(temp.path().join("tags").join(tag).join("index.html")).unwrap();
            assert_eq!(content, format!("---\nlayout: tagpage\ntag: {}\n---\n", tag));
        }
    }

    #[test]
    fn test_refresh_reports_posts_in_order() {
        let (_temp, service) = setup(&[
            ("b.markdown", "---\ntags: two\n---\n"),
            ("a.markdown", "---\ntags: one\n---\n"),
        ]);

        let mut seen = Vec::new();
        let report = service
            .execute(&options(false), |post| seen.push(post.tags.clone()))
            .unwrap();

        assert_eq!(seen, vec![vec!["one".to_string()], vec!["two".to_string()]]);
        assert_eq!(report.posts.len(), 2);
    }

    #[test]
    fn test_refresh_tolerates_posts_without_tags() {
        let (temp, service) = setup(&[
            ("plain.markdown", "No front matter at all\n"),
            ("untagged.markdown", "---\ntitle: Hi\n---\n"),
        ]);

        let report = service.execute(&options(false), |_| {}).unwrap();

        assert!(report.tags.is_empty());
        assert!(report.pages.is_empty());
        assert!(report.posts.iter().all(|p| p.tags.is_empty()));
        assert!(!temp.path().join("tags").exists());
    }

    #[test]
    fn test_empty_tags_key_is_reported() {
        let (_temp, service) = setup(&[
            ("a.markdown", "---\ntags:\n---\n"),
            ("b.markdown", "---\ntitle: none\n---\n"),
        ]);

        let report = service.execute(&options(true), |_| {}).unwrap();
        assert!(report.posts[0].has_tags_key);
        assert!(report.posts[0].tags.is_empty());
        assert!(!report.posts[1].has_tags_key);
        assert!(report.tags.is_empty());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (temp, service) = setup(&[("a.markdown", "---\ntags: foo\n---\n")]);

        let report = service.execute(&options(true), |_| {}).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.pages, vec![temp.path().join("tags/foo/index.html")]);
        assert!(!temp.path().join("tags").exists());
    }

    #[test]
    fn test_invalid_tag_aborts_before_writing() {
        let (temp, service) = setup(&[
            ("a.markdown", "---\ntags: ok\n---\n"),
            ("b.markdown", "---\ntags: ../escape\n---\n"),
        ]);

        match service.execute(&options(false), |_| {}).unwrap_err() {
            TagPagesError::InvalidTag { tag, .. } => assert_eq!(tag, "../escape"),
            other => panic!("Expected InvalidTag, got {:?}", other),
        }
        assert!(!temp.path().join("tags").exists());
    }

    #[test]
    fn test_strict_delimiters_skip_embedded_dashes() {
        let (_temp, service) = setup(&[(
            "a.markdown",
            "Intro --- aside\n---\ntags: real\n---\n",
        )]);

        let mut opts = options(true);
        opts.delimiters = DelimiterMode::Line;
        let report = service.execute(&opts, |_| {}).unwrap();
        assert_eq!(report.tags.into_iter().collect::<Vec<_>>(), vec!["real"]);
    }
}
