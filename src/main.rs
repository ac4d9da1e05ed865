use clap::Parser;
use std::path::Path;
use tagpages::application::{RefreshOptions, RefreshTagsService};
use tagpages::cli::{format_post_trace, format_summary, Cli};
use tagpages::error::TagPagesError;
use tagpages::infrastructure::{Config, FileSystemRepository};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagPagesError> {
    // CLI flags win over the config file
    let config = Config::load(cli.config.as_deref(), Path::new("."))?;
    let config = cli.apply(config);
    config.validate()?;

    // Only a posts directory the user picked has to exist
    let repo = FileSystemRepository::new(
        config.posts_dir.clone(),
        &config.extension,
        config.output_dir.clone(),
    )
    .with_required_posts_dir(config.has_custom_posts_dir());
    let service = RefreshTagsService::new(repo);

    let options = RefreshOptions {
        layout: config.layout,
        delimiters: config.delimiters,
        dry_run: cli.dry_run,
    };

    let report = service.execute(&options, |post| print!("{}", format_post_trace(post)))?;
    print!("{}", format_summary(&report));

    Ok(())
}
