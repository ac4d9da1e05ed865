//! Application layer - Use cases and orchestration

pub mod refresh_tags;

pub use refresh_tags::{RefreshOptions, RefreshReport, RefreshTagsService};
