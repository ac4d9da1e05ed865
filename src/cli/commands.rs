//! CLI command definitions

use crate::domain::DelimiterMode;
use crate::infrastructure::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagpages")]
#[command(about = "Generate tag index pages from blog post front matter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory scanned for posts (default: ./_posts)
    #[arg(long, value_name = "DIR")]
    pub posts_dir: Option<PathBuf>,

    /// Post file extension, without the dot (default: markdown)
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Root directory of generated tag pages (default: ./tags)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Layout name written into each tag page (default: tagpage)
    #[arg(long, value_name = "NAME")]
    pub layout: Option<String>,

    /// Only treat lines consisting of exactly `---` as front-matter delimiters
    #[arg(long)]
    pub strict_delimiters: bool,

    /// Show which pages would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (default: _tagpages.toml in the current directory, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.posts_dir {
            config.posts_dir = dir.clone();
        }
        if let Some(ext) = &self.extension {
            config.extension = ext.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(layout) = &self.layout {
            config.layout = layout.clone();
        }
        if self.strict_delimiters {
            config.delimiters = DelimiterMode::Line;
        }
        config
    }
}
