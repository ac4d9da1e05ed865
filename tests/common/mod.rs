use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn tagpages_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagpages").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a post into `<site>/_posts`, creating the directory if needed
pub fn write_post(site: &Path, name: &str, content: &str) {
    let posts = site.join("_posts");
    fs::create_dir_all(&posts).unwrap();
    fs::write(posts.join(name), content).unwrap();
}
